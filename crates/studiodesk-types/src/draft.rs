use serde::{Deserialize, Serialize};

use crate::ticket::Priority;

/// The `ticketData` object the assistant emits once it has enough detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Kept as text; unknown values fall back to the default priority
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub trainer_name: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TicketDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: None,
            subcategory: None,
            priority: None,
            trainer_name: None,
            sentiment: None,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_trainer(mut self, trainer: impl Into<String>) -> Self {
        self.trainer_name = Some(trainer.into());
        self
    }

    /// Priority to persist: the parsed value, or `medium`
    pub fn resolved_priority(&self) -> Priority {
        self.priority
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default()
    }

    fn has_required_fields(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Top-level object inside the fenced JSON block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionEnvelope {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub ticket_data: Option<TicketDraft>,
}

impl ExtractionEnvelope {
    /// The draft, if the envelope is flagged ready and passes presence checks
    pub fn into_ready(self) -> Option<TicketDraft> {
        match self.ticket_data {
            Some(draft) if self.ready && draft.has_required_fields() => Some(draft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ready() {
        let json = r#"{
            "ready": true,
            "ticketData": {
                "title": "Trainer Feedback - Anisha Shah",
                "description": "Arrived 20 minutes late",
                "category": "Customer Service",
                "priority": "high",
                "trainerName": "Anisha Shah",
                "tags": ["punctuality"]
            }
        }"#;
        let envelope: ExtractionEnvelope = serde_json::from_str(json).unwrap();
        let draft = envelope.into_ready().unwrap();

        assert_eq!(draft.trainer_name.as_deref(), Some("Anisha Shah"));
        assert_eq!(draft.resolved_priority(), Priority::High);
        assert_eq!(draft.tags, vec!["punctuality".to_string()]);
    }

    #[test]
    fn test_envelope_not_ready() {
        let envelope: ExtractionEnvelope =
            serde_json::from_str(r#"{"ready": false, "ticketData": {"title": "t", "description": "d"}}"#).unwrap();
        assert!(envelope.into_ready().is_none());

        let envelope: ExtractionEnvelope = serde_json::from_str(r#"{"ready": true}"#).unwrap();
        assert!(envelope.into_ready().is_none());
    }

    #[test]
    fn test_envelope_blank_title_rejected() {
        let envelope: ExtractionEnvelope =
            serde_json::from_str(r#"{"ready": true, "ticketData": {"title": "  ", "description": "d"}}"#).unwrap();
        assert!(envelope.into_ready().is_none());
    }

    #[test]
    fn test_priority_fallback() {
        assert_eq!(TicketDraft::new("t", "d").resolved_priority(), Priority::Medium);
        assert_eq!(TicketDraft::new("t", "d").with_priority("urgent").resolved_priority(), Priority::Medium);
        assert_eq!(TicketDraft::new("t", "d").with_priority("low").resolved_priority(), Priority::Low);
    }
}
