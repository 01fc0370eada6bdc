//! Webhook Event Payloads
//!
//! Event envelope and sample data for the manual trigger. The envelope is
//! serialized exactly once; those bytes are both signed and transmitted, so
//! sender and receiver always agree on what was authenticated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event types understood by the receiving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A new project was created in the intake wizard.
    #[serde(rename = "project.created")]
    ProjectCreated,
    /// A client approved or rejected a deliverable.
    #[serde(rename = "approval.updated")]
    ApprovalUpdated,
    /// A project moved to a different pipeline stage.
    #[serde(rename = "project.stage_changed")]
    StageChanged,
}

impl EventType {
    /// Parse from the dot-separated wire form (e.g. `"project.created"`).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "project.created" => Some(Self::ProjectCreated),
            "approval.updated" => Some(Self::ApprovalUpdated),
            "project.stage_changed" => Some(Self::StageChanged),
            _ => None,
        }
    }

    /// Convert to the dot-separated string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project.created",
            Self::ApprovalUpdated => "approval.updated",
            Self::StageChanged => "project.stage_changed",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The envelope that gets serialized, signed, and POSTed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event: EventType,
    pub data: serde_json::Value,
}

impl WebhookEvent {
    pub fn new(event: EventType, data: serde_json::Value) -> Self {
        Self { event, data }
    }

    /// Serialize to the canonical byte form used for signing and transmission.
    ///
    /// Struct field order fixes the layout, so the same logical event always
    /// yields the same bytes. Callers must send these exact bytes; signing one
    /// serialization and sending another would break verification.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Data record for a `project.created` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreated {
    pub project_id: Uuid,
    pub project_number: String,
    pub company_name: String,
    pub wizard_completion_id: Uuid,
    pub is_rush_delivery: bool,
}

impl ProjectCreated {
    /// Sample data for manual testing. Edit or replace with real values from
    /// the projects table before exercising a production receiver.
    pub fn sample() -> Self {
        Self {
            project_id: Uuid::nil(),
            project_number: "WA-2025-001".into(),
            company_name: "Test Company".into(),
            wizard_completion_id: Uuid::nil(),
            is_rush_delivery: false,
        }
    }

    /// Whether this record still carries the unedited sample placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.project_id.is_nil() || self.wizard_completion_id.is_nil()
    }

    /// Wrap into a signed-ready `project.created` envelope.
    pub fn into_event(self) -> Result<WebhookEvent, serde_json::Error> {
        Ok(WebhookEvent::new(
            EventType::ProjectCreated,
            serde_json::to_value(self)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_wire_names_round_trip() {
        for ty in [
            EventType::ProjectCreated,
            EventType::ApprovalUpdated,
            EventType::StageChanged,
        ] {
            assert_eq!(EventType::parse_str(ty.as_str()), Some(ty));
        }
        assert_eq!(EventType::parse_str("project.deleted"), None);
    }

    #[test]
    fn canonical_bytes_are_stable() {
        let event = ProjectCreated::sample().into_event().unwrap();
        let first = event.canonical_bytes().unwrap();
        let second = event.canonical_bytes().unwrap();
        assert_eq!(first, second);

        // Envelope key order is fixed by struct declaration order.
        let text = String::from_utf8(first).unwrap();
        assert!(text.starts_with(r#"{"event":"project.created","data":"#));
    }

    #[test]
    fn canonical_bytes_parse_back() {
        let event = ProjectCreated::sample().into_event().unwrap();
        let bytes = event.canonical_bytes().unwrap();
        let parsed: WebhookEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.event, EventType::ProjectCreated);
        assert_eq!(parsed.data["project_number"], "WA-2025-001");
    }

    #[test]
    fn sample_is_detected_as_placeholder() {
        let mut data = ProjectCreated::sample();
        assert!(data.is_placeholder());
        data.project_id = Uuid::new_v4();
        data.wizard_completion_id = Uuid::new_v4();
        assert!(!data.is_placeholder());
    }
}
