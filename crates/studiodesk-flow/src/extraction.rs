use once_cell::sync::Lazy;
use regex::Regex;
use studiodesk_types::{ExtractionEnvelope, TicketDraft};

/// First fenced block tagged `json`, capturing its body
static JSON_FENCE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").ok());

/// Every fenced `json` block, for stripping
static ANY_JSON_FENCE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"```json[\s\S]*?```").ok());

/// Assistant reply after schema validation
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantReply {
    /// A fenced block carried a ready draft that passed presence checks
    Ready { draft: TicketDraft },
    /// Anything else; `text` is the reply with fenced blocks removed
    NeedsMoreInfo { text: String },
}

pub fn parse_reply(reply: &str) -> AssistantReply {
    match extract_draft(reply) {
        Some(draft) => AssistantReply::Ready { draft },
        None => AssistantReply::NeedsMoreInfo {
            text: strip_json_blocks(reply),
        },
    }
}

fn extract_draft(reply: &str) -> Option<TicketDraft> {
    let body = JSON_FENCE.as_ref()?.captures(reply)?.get(1)?.as_str();

    match serde_json::from_str::<ExtractionEnvelope>(body) {
        Ok(envelope) => envelope.into_ready(),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unparsable json block in assistant reply");
            None
        }
    }
}

/// Reply text with every fenced `json` block removed, trimmed
pub fn strip_json_blocks(reply: &str) -> String {
    match ANY_JSON_FENCE.as_ref() {
        Some(re) => re.replace_all(reply, "").trim().to_string(),
        None => reply.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_block() {
        let reply = r#"Thanks, I have everything.

```json
{
  "ready": true,
  "ticketData": {
    "title": "Trainer Feedback - Anisha",
    "description": "Arrived 20 minutes late and was rude",
    "category": "Customer Service",
    "priority": "high",
    "trainerName": "Anisha",
    "tags": ["punctuality"]
  }
}
```"#;
        match parse_reply(reply) {
            AssistantReply::Ready { draft } => {
                assert_eq!(draft.title, "Trainer Feedback - Anisha");
                assert_eq!(draft.category.as_deref(), Some("Customer Service"));
                assert_eq!(draft.tags, vec!["punctuality"]);
            }
            other => panic!("expected ready draft, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_question() {
        let reply = "  Which class was this, and on what date?  ";
        assert_eq!(
            parse_reply(reply),
            AssistantReply::NeedsMoreInfo {
                text: "Which class was this, and on what date?".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_block_is_stripped() {
        let reply = "Could you tell me the trainer's name?\n```json\n{ ready: true, \n```";
        assert_eq!(
            parse_reply(reply),
            AssistantReply::NeedsMoreInfo {
                text: "Could you tell me the trainer's name?".to_string()
            }
        );
    }

    #[test]
    fn test_not_ready_block() {
        let reply = "Almost there.\n```json\n{\"ready\": false}\n```\nWhat time was the class?";
        assert_eq!(
            parse_reply(reply),
            AssistantReply::NeedsMoreInfo {
                text: "Almost there.\n\nWhat time was the class?".to_string()
            }
        );
    }

    #[test]
    fn test_ready_without_description() {
        let reply = "```json\n{\"ready\": true, \"ticketData\": {\"title\": \"Late\", \"description\": \"  \"}}\n```";
        assert_eq!(
            parse_reply(reply),
            AssistantReply::NeedsMoreInfo { text: String::new() }
        );
    }

    #[test]
    fn test_untagged_fence_is_ignored() {
        let reply = "```\n{\"ready\": true, \"ticketData\": {\"title\": \"a\", \"description\": \"b\"}}\n```";
        assert!(matches!(parse_reply(reply), AssistantReply::NeedsMoreInfo { .. }));
    }
}
