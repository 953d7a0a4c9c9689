use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use studiodesk_types::{Priority, Ticket, TicketNumber, TicketStatus};

/// MongoDB-specific Ticket model (uuid string as `_id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoTicket {
    #[serde(rename = "_id")]
    pub id: String,
    pub ticket_number: TicketNumber,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio_id: Option<String>,
    pub priority: Priority,
    pub status: TicketStatus,
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_by_user_id: Option<String>,
    #[serde(default)]
    pub dynamic_field_data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<Ticket> for MongoTicket {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            ticket_number: ticket.ticket_number,
            title: ticket.title,
            description: ticket.description,
            category_id: ticket.category_id,
            studio_id: ticket.studio_id,
            priority: ticket.priority,
            status: ticket.status,
            source: ticket.source,
            tags: ticket.tags,
            reported_by_user_id: ticket.reported_by_user_id,
            dynamic_field_data: ticket.dynamic_field_data,
            created_at: ticket.created_at,
            resolved_at: ticket.resolved_at,
            assigned_to: ticket.assigned_to,
        }
    }
}

impl From<MongoTicket> for Ticket {
    fn from(ticket: MongoTicket) -> Self {
        Self {
            id: ticket.id,
            ticket_number: ticket.ticket_number,
            title: ticket.title,
            description: ticket.description,
            category_id: ticket.category_id,
            studio_id: ticket.studio_id,
            priority: ticket.priority,
            status: ticket.status,
            source: ticket.source,
            tags: ticket.tags,
            reported_by_user_id: ticket.reported_by_user_id,
            dynamic_field_data: ticket.dynamic_field_data,
            created_at: ticket.created_at,
            resolved_at: ticket.resolved_at,
            assigned_to: ticket.assigned_to,
        }
    }
}
