//! Manual Webhook Trigger
//!
//! Builds a sample webhook event, signs it with the shared secret, and POSTs
//! it to a configured receiver so webhook-handling logic can be verified by
//! hand. The signing contract itself lives in the `hook-signing` crate so a
//! receiver can depend on it without pulling in the trigger tool.

pub mod config;
pub mod delivery;
pub mod payload;
