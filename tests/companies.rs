//
//  freshdesk-client
//  tests/companies.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP-level tests for the company and customer mappers.

mod common;

use common::{company_json, connect, contact_json, customer_json};
use freshdesk_client::{FreshdeskError, ListOptions};
use mockito::Matcher;
use serde_json::{json, Map};

#[tokio::test]
async fn test_get_company() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/companies/1")
        .with_body(company_json().to_string())
        .create_async()
        .await;

    let company = connect(&server).companies.get(1).await.unwrap();
    assert_eq!(company.name(), Some("ACME Corp"));
    assert_eq!(company.to_string(), "ACME Corp");
}

#[tokio::test]
async fn test_list_companies() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/companies")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_body(json!([company_json()]).to_string())
        .create_async()
        .await;

    let companies = connect(&server)
        .companies
        .list(&ListOptions::default())
        .await
        .unwrap();
    assert_eq!(companies.len(), 1);
}

#[tokio::test]
async fn test_filter_companies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search/companies")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("query".into(), "\"updated_at:>'2020-07-12'\"".into()),
        ]))
        .with_body(json!({"total": 1, "results": [company_json()]}).to_string())
        .create_async()
        .await;

    let companies = connect(&server)
        .companies
        .filter("updated_at:>'2020-07-12'", None)
        .await
        .unwrap();

    assert_eq!(companies.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_and_update_company() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/companies")
        .match_body(Matcher::Json(json!({"name": "ACME Corp"})))
        .with_body(company_json().to_string())
        .create_async()
        .await;
    server
        .mock("PUT", "/companies/1")
        .match_body(Matcher::Json(json!({"description": "Coyote supplies"})))
        .with_body(company_json().to_string())
        .create_async()
        .await;

    let freshdesk = connect(&server);

    let mut body = Map::new();
    body.insert("name".to_string(), json!("ACME Corp"));
    freshdesk.companies.create(&body).await.unwrap();

    let mut changes = Map::new();
    changes.insert("description".to_string(), json!("Coyote supplies"));
    freshdesk.companies.update(1, &changes).await.unwrap();
}

#[tokio::test]
async fn test_delete_company() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/companies/1")
        .with_status(204)
        .create_async()
        .await;

    connect(&server).companies.delete(1).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_customer_from_contact() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/contacts/1")
        .with_body(contact_json().to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/customers/1")
        .with_body(customer_json().to_string())
        .create_async()
        .await;

    let freshdesk = connect(&server);
    let contact = freshdesk.contacts.get(1).await.unwrap();
    let customer = freshdesk
        .customers
        .get_from_contact(&contact)
        .await
        .unwrap();
    assert_eq!(customer.name(), Some("ACME Corp"));
}

#[tokio::test]
async fn test_customer_lookup_without_customer_id_fails_locally() {
    let mut payload = contact_json();
    payload.as_object_mut().unwrap().remove("customer_id");

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/contacts/1")
        .with_body(payload.to_string())
        .create_async()
        .await;

    let freshdesk = connect(&server);
    let contact = freshdesk.contacts.get(1).await.unwrap();
    let err = freshdesk
        .customers
        .get_from_contact(&contact)
        .await
        .unwrap_err();
    assert!(matches!(err, FreshdeskError::Record(_)));
}
