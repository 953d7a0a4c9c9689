mod common;

use std::sync::Arc;

use chrono::Local;
use common::*;
use regex::Regex;
use studiodesk_flow::session::{APOLOGY_MESSAGE, FOLLOW_UP_MESSAGE, TICKET_FAILED_MESSAGE};
use studiodesk_flow::{ChatSession, FlowError, Gateway, GatewayConfig, SessionState};
use studiodesk_persist::{InMemoryTicketStore, TicketStore};
use studiodesk_types::{Priority, Role, TicketStatus, CHAT_SOURCE};

#[tokio::test]
async fn test_clarifying_question_keeps_session_idle() {
    let client = Arc::new(ScriptedClient::new().reply("Which class was it, and on what day?"));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client.clone()), materializer(store.clone()));

    let outcome = session
        .submit("Trainer Anisha was 20 minutes late and rude")
        .await
        .unwrap();

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.transcript().len(), 3);
    assert_eq!(outcome.turns.len(), 2);
    assert_eq!(outcome.turns[1].content, "Which class was it, and on what day?");
    assert!(outcome.ticket.is_none());
    assert_eq!(store.ticket_count().await, 0);
}

#[tokio::test]
async fn test_ready_reply_creates_exactly_one_ticket() {
    let client = Arc::new(ScriptedClient::new().reply(READY_REPLY));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store.clone()))
        .with_reporter("user-7");

    let before = session.transcript().len();
    let outcome = session.submit("Anisha was late and rude in yoga today").await.unwrap();

    // user turn + summary + confirmation
    assert_eq!(session.transcript().len(), before + 3);
    assert_eq!(outcome.turns.len(), 3);
    assert!(outcome.turns[1].content.starts_with("Great! I've gathered all the information."));
    assert!(outcome.turns[2].ticket_created.is_some());

    let tickets = store.list_tickets().await.unwrap();
    assert_eq!(tickets.len(), 1);
    let ticket = &tickets[0];
    assert_eq!(ticket.priority, Priority::High);
    assert_eq!(ticket.status, TicketStatus::New);
    assert_eq!(ticket.source, CHAT_SOURCE);
    assert_eq!(ticket.reported_by_user_id.as_deref(), Some("user-7"));
    assert!(ticket.category_id.is_some());
    assert_eq!(ticket.studio_id.as_deref(), Some("kwality-house"));
    assert_eq!(ticket.dynamic_field_data["trainerName"], "Anisha");
    assert_eq!(ticket.dynamic_field_data["sentiment"], "negative");
    assert_eq!(ticket.dynamic_field_data["aiGenerated"], true);

    let receipt = outcome.ticket.unwrap();
    assert_eq!(receipt.ticket_number, ticket.ticket_number);
    assert_eq!(receipt.category.as_deref(), Some("Customer Service"));
    let notification = outcome.notification.unwrap();
    assert_eq!(notification.title, "Ticket Created");
    assert!(notification.description.contains(receipt.ticket_number.as_str()));
}

#[tokio::test]
async fn test_ticket_number_uses_local_date() {
    let client = Arc::new(ScriptedClient::new().reply(READY_REPLY));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store));

    let outcome = session.submit("feedback").await.unwrap();
    let number = outcome.ticket.unwrap().ticket_number;

    let pattern = Regex::new(r"^TKT-\d{6}-\d{4}$").unwrap();
    assert!(pattern.is_match(number.as_str()));
    assert_eq!(number.date_code(), Local::now().format("%y%m%d").to_string());
}

#[tokio::test]
async fn test_unknown_category_leaves_category_id_empty() {
    let reply = ready_reply_with_category("Trainer Vibes");
    let client = Arc::new(ScriptedClient::new().reply(&reply));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store.clone()));

    let outcome = session.submit("feedback").await.unwrap();

    assert!(outcome.ticket.is_some());
    let tickets = store.list_tickets().await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].category_id, None);
}

#[tokio::test]
async fn test_same_draft_twice_creates_two_tickets() {
    let client = Arc::new(ScriptedClient::new().reply(READY_REPLY).reply(READY_REPLY));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store.clone()));

    session.submit("first").await.unwrap();
    session.submit("second").await.unwrap();

    let tickets = store.list_tickets().await.unwrap();
    assert_eq!(tickets.len(), 2);
    assert_ne!(tickets[0].id, tickets[1].id);
}

#[tokio::test]
async fn test_history_excludes_welcome_turn() {
    let client = Arc::new(
        ScriptedClient::new()
            .reply("Which class?")
            .reply("Thanks. Anything else?"),
    );
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client.clone()), materializer(store));

    session.submit("Anisha was late").await.unwrap();
    session.submit("Morning yoga").await.unwrap();

    let requests = client.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);

    // system + user
    let first: Vec<&str> = requests[0].messages.iter().map(|m| m.role()).collect();
    assert_eq!(first, vec!["system", "user"]);

    // system + user + assistant + user
    let second = &requests[1].messages;
    assert_eq!(second.len(), 4);
    assert_eq!(second[1].content().to_text(), "Anisha was late");
    assert_eq!(second[2].content().to_text(), "Which class?");
    assert_eq!(second[3].content().to_text(), "Morning yoga");
}

#[tokio::test]
async fn test_upstream_failure_appends_apology() {
    let client = Arc::new(ScriptedClient::new().fail("503 Service Unavailable"));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store.clone()));

    let outcome = session.submit("Anisha was late").await.unwrap();

    assert_eq!(outcome.turns.len(), 2);
    assert_eq!(outcome.turns[1].content, APOLOGY_MESSAGE);
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(store.ticket_count().await, 0);
}

#[tokio::test]
async fn test_missing_credential_appends_apology() {
    let gateway = Arc::new(Gateway::unconfigured(GatewayConfig::default()));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway, materializer(store));

    let outcome = session.submit("hello").await.unwrap();
    assert_eq!(outcome.turns.last().unwrap().content, APOLOGY_MESSAGE);
}

#[tokio::test]
async fn test_fence_only_reply_falls_back_to_follow_up() {
    let client = Arc::new(ScriptedClient::new().reply("```json\n{\"ready\": false}\n```"));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store));

    let outcome = session.submit("hello").await.unwrap();
    assert_eq!(outcome.turns[1].content, FOLLOW_UP_MESSAGE);
}

#[tokio::test]
async fn test_store_failure_appends_manual_submission_hint() {
    let client = Arc::new(ScriptedClient::new().reply(READY_REPLY));
    let mut session = ChatSession::new(gateway(client), materializer(Arc::new(FailingStore)));

    let outcome = session.submit("feedback").await.unwrap();

    assert_eq!(outcome.turns.len(), 3);
    assert_eq!(outcome.turns[2].content, TICKET_FAILED_MESSAGE);
    assert!(outcome.ticket.is_none());
    assert!(outcome.notification.is_none());
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn test_blank_input_is_rejected_without_turns() {
    let client = Arc::new(ScriptedClient::new());
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client.clone()), materializer(store));

    let result = session.submit("   \n").await;

    assert!(matches!(result, Err(FlowError::EmptyInput)));
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn test_input_is_trimmed() {
    let client = Arc::new(ScriptedClient::new().reply("Which class?"));
    let store = Arc::new(InMemoryTicketStore::seeded());
    let mut session = ChatSession::new(gateway(client), materializer(store));

    let outcome = session.submit("  Anisha was late  ").await.unwrap();
    assert_eq!(outcome.turns[0].role, Role::User);
    assert_eq!(outcome.turns[0].content, "Anisha was late");
}
