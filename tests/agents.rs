//
//  freshdesk-client
//  tests/agents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP-level tests for the agent, group, and role mappers.

mod common;

use common::{agent_json, connect, group_json, role_json};
use freshdesk_client::ListOptions;
use mockito::Matcher;
use serde_json::{json, Map};

#[tokio::test]
async fn test_get_agent() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/agents/1")
        .with_body(agent_json().to_string())
        .create_async()
        .await;

    let agent = connect(&server).agents.get(1).await.unwrap();
    assert_eq!(agent.id(), Some(1));
    assert_eq!(agent.name(), Some("Jane Agent"));
    assert_eq!(agent.to_string(), "Jane Agent");
}

#[tokio::test]
async fn test_list_agents_forwards_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/agents")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "abc@xyz.com".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_body(json!([agent_json()]).to_string())
        .create_async()
        .await;

    let agents = connect(&server)
        .agents
        .list(&ListOptions {
            extra: vec![("email".to_string(), "abc@xyz.com".to_string())],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(agents.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_agent() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/agents/1")
        .match_body(Matcher::Json(json!({"occasional": true})))
        .with_body(agent_json().to_string())
        .create_async()
        .await;

    let mut changes = Map::new();
    changes.insert("occasional".to_string(), json!(true));
    connect(&server).agents.update(1, &changes).await.unwrap();
}

#[tokio::test]
async fn test_delete_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/agents/1")
        .with_status(204)
        .create_async()
        .await;

    connect(&server).agents.delete(1).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_me_returns_the_key_owner() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/agents/me")
        .with_body(agent_json().to_string())
        .create_async()
        .await;

    let me = connect(&server).agents.me().await.unwrap();
    assert_eq!(me.name(), Some("Jane Agent"));
}

#[tokio::test]
async fn test_get_and_list_groups() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/groups/1")
        .with_body(group_json().to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/groups")
        .match_query(Matcher::Any)
        .with_body(json!([group_json()]).to_string())
        .create_async()
        .await;

    let freshdesk = connect(&server);
    let group = freshdesk.groups.get(1).await.unwrap();
    assert_eq!(group.name(), Some("Entertainment"));

    let groups = freshdesk.groups.list(&ListOptions::default()).await.unwrap();
    assert_eq!(groups.len(), 1);
}

#[tokio::test]
async fn test_get_and_list_roles() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/roles/1")
        .with_body(role_json().to_string())
        .create_async()
        .await;
    // Roles come back in one unpaginated fetch.
    server
        .mock("GET", "/roles")
        .with_body(json!([role_json(), role_json()]).to_string())
        .create_async()
        .await;

    let freshdesk = connect(&server);
    let role = freshdesk.roles.get(1).await.unwrap();
    assert_eq!(role.name(), Some("Agent"));

    let roles = freshdesk.roles.list().await.unwrap();
    assert_eq!(roles.len(), 2);
}
