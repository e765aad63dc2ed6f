//
//  freshdesk-client
//  tests/time_entries.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP-level tests for the time entry and ticket field mappers.

mod common;

use common::{connect, ticket_field_json, time_entry_json};
use freshdesk_client::ListOptions;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_list_time_entries_tenant_wide() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/time_entries")
        .match_query(Matcher::Any)
        .with_body(json!([time_entry_json()]).to_string())
        .create_async()
        .await;

    let entries = connect(&server)
        .time_entries
        .list(None, &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note(), Some("Weekly sync"));
    assert_eq!(entries[0].to_string(), "Weekly sync (01:30)");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_time_entries_for_a_ticket() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tickets/1/time_entries")
        .match_query(Matcher::Any)
        .with_body(json!([time_entry_json()]).to_string())
        .create_async()
        .await;

    let entries = connect(&server)
        .time_entries
        .list(Some(1), &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ticket_id(), Some(1));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_ticket_fields() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/ticket_fields")
        .with_body(json!([ticket_field_json()]).to_string())
        .create_async()
        .await;

    let fields = connect(&server).ticket_fields.list(None).await.unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), Some("priority"));
}

#[tokio::test]
async fn test_list_ticket_fields_with_type_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ticket_fields")
        .match_query(Matcher::UrlEncoded(
            "type".into(),
            "default_priority".into(),
        ))
        .with_body(json!([ticket_field_json()]).to_string())
        .create_async()
        .await;

    let fields = connect(&server)
        .ticket_fields
        .list(Some("default_priority"))
        .await
        .unwrap();

    assert_eq!(fields.len(), 1);
    mock.assert_async().await;
}
