//! HMAC-SHA256 Webhook Signing
//!
//! Signs and verifies webhook payloads for authenticity. The sender signs the
//! exact bytes it transmits; the receiver verifies the exact bytes it read,
//! before parsing anything. Secrets and signatures are never logged here.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign payload bytes with HMAC-SHA256 and return the hex-encoded signature.
///
/// Deterministic: identical `(secret, payload)` inputs always produce the
/// same 64-character hex digest. An empty payload is valid input. HMAC
/// accepts keys of any length, so this never fails; rejecting degenerate
/// secrets (e.g. empty) is the caller's configuration concern.
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify an HMAC-SHA256 signature against a payload.
///
/// Recomputes the signature and compares in constant time, so a receiver
/// probing endpoint cannot learn signature bytes through timing.
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> bool {
    let expected = sign_payload(secret, payload);
    // Constant-time comparison
    expected.len() == signature.len()
        && expected
            .as_bytes()
            .iter()
            .zip(signature.as_bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

/// Generate a random 32-byte hex signing secret.
pub fn generate_secret() -> String {
    use rand::Rng;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let secret = "test_secret_12345";
        let payload = b"hello world";
        let sig = sign_payload(secret, payload);
        assert!(verify_signature(secret, payload, &sig));
    }

    #[test]
    fn wrong_secret_rejected() {
        let sig = sign_payload("topsecret", b"payload");
        assert!(!verify_signature("other-secret", b"payload", &sig));
    }

    #[test]
    fn mutated_payload_rejected() {
        let payload = br#"{"event":"project.created","data":{"project_id":"abc"}}"#;
        let sig = sign_payload("topsecret", payload);
        // Flip one byte at every position
        for i in 0..payload.len() {
            let mut mutated = payload.to_vec();
            mutated[i] ^= 0x01;
            assert!(
                !verify_signature("topsecret", &mutated, &sig),
                "mutation at byte {i} was accepted"
            );
        }
    }

    #[test]
    fn sign_is_deterministic() {
        let payload =
            br#"{"event":"project.created","data":{"project_id":"abc","company_name":"Acme"}}"#;
        let first = sign_payload("topsecret", payload);
        let second = sign_payload("topsecret", payload);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn empty_payload_is_valid() {
        let sig = sign_payload("topsecret", b"");
        assert_eq!(sig.len(), 64);
        assert!(verify_signature("topsecret", b"", &sig));
        assert!(!verify_signature("topsecret", b"x", &sig));
    }

    #[test]
    fn empty_secret_does_not_panic() {
        // Degenerate but must not crash; config rejects it upstream.
        let sig = sign_payload("", b"payload");
        assert!(verify_signature("", b"payload", &sig));
    }

    #[test]
    fn truncated_signature_rejected() {
        let sig = sign_payload("topsecret", b"payload");
        assert!(!verify_signature("topsecret", b"payload", &sig[..32]));
        assert!(!verify_signature("topsecret", b"payload", ""));
    }

    #[test]
    fn generated_secret_length() {
        let secret = generate_secret();
        assert_eq!(secret.len(), 64); // 32 bytes = 64 hex chars
        assert_ne!(secret, generate_secret());
    }
}
