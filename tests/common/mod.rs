//
//  freshdesk-client
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared fixtures for the integration tests: sample payloads shaped like
//! real API responses, and a connection helper pointing the client at a
//! local mock server.

#![allow(dead_code)]

use freshdesk_client::Freshdesk;
use serde_json::{json, Value};

/// The API key every test connection authenticates with.
pub const API_KEY: &str = "MX4CEAw4FogInimEdRW2";

/// Connects a client to the given mock server.
pub fn connect(server: &mockito::ServerGuard) -> Freshdesk {
    Freshdesk::with_endpoint(&server.url(), API_KEY).expect("mock endpoint should be valid")
}

/// A ticket payload as the API returns it.
pub fn ticket_json() -> Value {
    json!({
        "id": 1,
        "subject": "This is a sample ticket",
        "description": "<div>This is a sample ticket, feel free to delete it.</div>",
        "description_text": "This is a sample ticket, feel free to delete it.",
        "priority": 1,
        "status": 2,
        "source": 2,
        "requester_id": 1,
        "cc_emails": ["test2@example.com"],
        "fwd_emails": [],
        "tags": ["foo", "bar"],
        "custom_field": {"support_tier": "gold"},
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T09:01:00Z"
    })
}

/// A conversation entry payload.
pub fn comment_json() -> Value {
    json!({
        "id": 7,
        "ticket_id": 1,
        "body": "<div>We looked into it.</div>",
        "body_text": "We looked into it.",
        "source": 2,
        "private": true,
        "user_id": 1,
        "created_at": "2022-05-27T10:14:01Z",
        "updated_at": "2022-05-27T10:14:01Z"
    })
}

/// A contact payload.
pub fn contact_json() -> Value {
    json!({
        "id": 1,
        "name": "Rachel",
        "email": "rachel@example.com",
        "customer_id": 1,
        "active": true,
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A company payload.
pub fn company_json() -> Value {
    json!({
        "id": 1,
        "name": "ACME Corp",
        "domains": ["acme.example.com"],
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A customer payload.
pub fn customer_json() -> Value {
    json!({
        "id": 1,
        "name": "ACME Corp",
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// An agent payload with its embedded contact object.
pub fn agent_json() -> Value {
    json!({
        "id": 1,
        "occasional": false,
        "ticket_scope": 2,
        "contact": {
            "name": "Jane Agent",
            "email": "jane@example.com"
        },
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A group payload.
pub fn group_json() -> Value {
    json!({
        "id": 1,
        "name": "Entertainment",
        "description": "Singers and dancers",
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A role payload.
pub fn role_json() -> Value {
    json!({
        "id": 1,
        "name": "Agent",
        "default": true,
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A time entry payload.
pub fn time_entry_json() -> Value {
    json!({
        "id": 1,
        "ticket_id": 1,
        "agent_id": 1,
        "billable": true,
        "note": "Weekly sync",
        "time_spent": "01:30",
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A ticket field definition payload.
pub fn ticket_field_json() -> Value {
    json!({
        "id": 1,
        "name": "priority",
        "label": "Priority",
        "type": "default_priority",
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A solution category payload.
pub fn category_json() -> Value {
    json!({
        "id": 2,
        "name": "General",
        "description": "Everything else",
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A solution folder payload.
pub fn folder_json() -> Value {
    json!({
        "id": 3,
        "name": "Getting started",
        "visibility": 1,
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}

/// A solution article payload.
pub fn article_json() -> Value {
    json!({
        "id": 4,
        "title": "Getting started",
        "description": "<div>Welcome aboard</div>",
        "status": 2,
        "folder_id": 3,
        "created_at": "2022-05-27T08:46:53Z",
        "updated_at": "2022-05-27T08:46:53Z"
    })
}
