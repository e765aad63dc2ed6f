//
//  freshdesk-client
//  tests/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP-level tests for the conversation mapper.

mod common;

use common::{comment_json, connect};
use freshdesk_client::ListOptions;
use mockito::Matcher;
use serde_json::{json, Map};

#[tokio::test]
async fn test_list_conversations() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tickets/1/conversations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_body(json!([comment_json()]).to_string())
        .create_async()
        .await;

    let comments = connect(&server)
        .comments
        .list(1, &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].source().unwrap(), "note");
    assert_eq!(comments[0].ticket_id(), Some(1));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_note() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tickets/1/notes")
        .match_body(Matcher::Json(json!({
            "body": "On it.",
            "private": true
        })))
        .with_body(comment_json().to_string())
        .create_async()
        .await;

    let mut extra = Map::new();
    extra.insert("private".to_string(), json!(true));
    let note = connect(&server)
        .comments
        .create_note(1, "On it.", &extra)
        .await
        .unwrap();

    assert_eq!(note.body_text(), Some("We looked into it."));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/tickets/1/reply")
        .match_body(Matcher::Json(json!({"body": "Fixed, closing."})))
        .with_body(comment_json().to_string())
        .create_async()
        .await;

    connect(&server)
        .comments
        .create_reply(1, "Fixed, closing.", &Map::new())
        .await
        .unwrap();

    mock.assert_async().await;
}
