use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `source` tag for tickets created through the chat assistant
pub const CHAT_SOURCE: &str = "ai-chatbot";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Analytics tier order
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue { kind: "priority", value: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    New,
    Assigned,
    InProgress,
    PendingCustomer,
    Resolved,
    Closed,
    Reopened,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 7] = [
        TicketStatus::New,
        TicketStatus::Assigned,
        TicketStatus::InProgress,
        TicketStatus::PendingCustomer,
        TicketStatus::Resolved,
        TicketStatus::Closed,
        TicketStatus::Reopened,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Assigned => "assigned",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::PendingCustomer => "pending_customer",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
            TicketStatus::Reopened => "reopened",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s.trim())
            .ok_or_else(|| UnknownValue { kind: "status", value: s.to_string() })
    }
}

/// Externally visible ticket identifier, `TKT-YYMMDD-NNNN`
///
/// Always well-formed: deserialization goes through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketNumber(String);

impl TicketNumber {
    /// Build a number from a calendar date and a suffix in `0..10000`
    pub fn new(date: NaiveDate, suffix: u16) -> Self {
        Self(format!("TKT-{}-{:04}", date.format("%y%m%d"), suffix % 10_000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYMMDD` segment
    pub fn date_code(&self) -> &str {
        &self.0[4..10]
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TicketNumber {
    type Error = UnknownValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TicketNumber> for String {
    fn from(number: TicketNumber) -> Self {
        number.0
    }
}

impl FromStr for TicketNumber {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 15
            && s.starts_with("TKT-")
            && bytes[10] == b'-'
            && bytes[4..10].iter().all(u8::is_ascii_digit)
            && bytes[11..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(UnknownValue { kind: "ticket number", value: s.to_string() })
        }
    }
}

/// A row of the `tickets` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub ticket_number: TicketNumber,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub studio_id: Option<String>,
    pub priority: Priority,
    pub status: TicketStatus,
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reported_by_user_id: Option<String>,
    #[serde(default)]
    pub dynamic_field_data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Ticket {
    /// New ticket with status `new` and no references set
    pub fn new(
        ticket_number: TicketNumber,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ticket_number,
            title: title.into(),
            description: description.into(),
            category_id: None,
            studio_id: None,
            priority: Priority::default(),
            status: TicketStatus::New,
            source: CHAT_SOURCE.to_string(),
            tags: Vec::new(),
            reported_by_user_id: None,
            dynamic_field_data: Map::new(),
            created_at,
            resolved_at: None,
            assigned_to: None,
        }
    }

    /// Hours between creation and resolution, if resolved
    pub fn resolution_hours(&self) -> Option<f64> {
        self.resolved_at
            .map(|resolved| (resolved - self.created_at).num_milliseconds() as f64 / 3_600_000.0)
    }
}

/// What the chat reports back once a ticket has been stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReceipt {
    pub ticket_number: TicketNumber,
    pub title: String,
    pub category: Option<String>,
    pub priority: Priority,
}
