//
//  freshdesk-client
//  api/contacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Contact Operations
//!
//! [`ContactApi`] manages requesters: CRUD plus the contact lifecycle the
//! API exposes on top of it. Deletion is two-staged (soft delete, then an
//! optional hard delete), soft-deleted contacts can be restored, and a
//! contact can be promoted to a full agent.
//!
//! ## Listing Filters
//!
//! The list endpoint filters through plain query parameters
//! (`email`, `mobile`, `phone`, `state`, `company_id`, `_updated_since`),
//! passed via [`ListOptions::extra`]. The search endpoint takes the filter
//! grammar instead.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::client::FreshdeskClient;
use super::common::{FreshdeskError, ListOptions, PageWalk, Result};
use crate::models::{Agent, Contact};

/// A new contact to create.
///
/// # Defaults
///
/// `Default` matches what the API expects of a minimal contact: ticket
/// visibility restricted (`view_all_tickets` false) and a placeholder
/// description.
#[derive(Debug, Clone)]
pub struct CreateContact {
    /// The contact's display name.
    pub name: String,

    /// The contact's primary email address.
    pub email: Option<String>,

    /// Whether the contact may see every ticket of their company.
    pub view_all_tickets: bool,

    /// Free-form description. Defaults to `"Freshdesk Contact"`.
    pub description: String,

    /// Extra body fields merged in verbatim.
    pub extra: Map<String, Value>,
}

impl Default for CreateContact {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: None,
            view_all_tickets: false,
            description: "Freshdesk Contact".to_string(),
            extra: Map::new(),
        }
    }
}

impl CreateContact {
    fn json_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("name".to_string(), Value::from(self.name.clone()));
        if let Some(email) = &self.email {
            body.insert("email".to_string(), Value::from(email.clone()));
        }
        body.insert(
            "view_all_tickets".to_string(),
            Value::from(self.view_all_tickets),
        );
        body.insert(
            "description".to_string(),
            Value::from(self.description.clone()),
        );
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }
}

/// Options for promoting a contact to an agent.
///
/// # Defaults
///
/// A full-time agent (`occasional` false) scoped to group tickets
/// (`ticket_scope` 2).
#[derive(Debug, Clone)]
pub struct MakeAgent {
    /// Whether the agent is occasional (true) or full-time (false).
    pub occasional: bool,

    /// Ticket permission scope code. Defaults to 2 (group tickets).
    pub ticket_scope: u8,

    /// Extra body fields merged in verbatim.
    pub extra: Map<String, Value>,
}

impl Default for MakeAgent {
    fn default() -> Self {
        Self {
            occasional: false,
            ticket_scope: 2,
            extra: Map::new(),
        }
    }
}

impl MakeAgent {
    fn json_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("occasional".to_string(), Value::from(self.occasional));
        body.insert("ticket_scope".to_string(), Value::from(self.ticket_scope));
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }
}

/// The mapper for the `contacts` endpoint family.
#[derive(Debug)]
pub struct ContactApi {
    client: Arc<FreshdeskClient>,
}

impl ContactApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one contact by id.
    pub async fn get(&self, contact_id: u64) -> Result<Contact> {
        let path = format!("contacts/{}", contact_id);
        Contact::from_json(self.client.get(&path, &[]).await?)
    }

    /// Lists contacts; filters ride along as passthrough query pairs.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Contact>> {
        let walk = PageWalk::list(options.page, options.per_page);
        let items = self.client.get_paged("contacts", &options.extra, walk).await?;
        items.into_iter().map(Contact::from_json).collect()
    }

    /// Searches contacts with a structured query string.
    ///
    /// Same query grammar, length guard, and 10-page cap as
    /// [`TicketApi::filter`](super::tickets::TicketApi::filter).
    pub async fn filter(&self, query: &str, page: Option<u32>) -> Result<Vec<Contact>> {
        let walk = PageWalk::search(page);
        let items = self
            .client
            .get_search_paged("search/contacts", query, walk)
            .await?;
        items.into_iter().map(Contact::from_json).collect()
    }

    /// Creates a contact.
    pub async fn create(&self, contact: &CreateContact) -> Result<Contact> {
        Contact::from_json(
            self.client
                .post_json("contacts", &contact.json_body())
                .await?,
        )
    }

    /// Applies a partial update and returns the resulting contact.
    pub async fn update(&self, contact_id: u64, changes: &Map<String, Value>) -> Result<Contact> {
        let path = format!("contacts/{}", contact_id);
        let body = Value::Object(changes.clone());
        Contact::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Soft-deletes a contact. It can be restored until hard-deleted.
    pub async fn soft_delete(&self, contact_id: u64) -> Result<()> {
        let path = format!("contacts/{}", contact_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }

    /// Restores a soft-deleted contact.
    pub async fn restore(&self, contact_id: u64) -> Result<()> {
        let path = format!("contacts/{}/restore", contact_id);
        self.client.put_json(&path, None).await?;
        Ok(())
    }

    /// Irreversibly deletes a contact.
    ///
    /// With `force`, a contact that was never soft-deleted is removed in
    /// one step.
    pub async fn permanently_delete(&self, contact_id: u64, force: bool) -> Result<()> {
        let path = format!("contacts/{}/hard_delete", contact_id);
        let query = vec![("force".to_string(), force.to_string())];
        self.client.delete(&path, &query).await?;
        Ok(())
    }

    /// Promotes a contact to an agent and returns the new agent record.
    ///
    /// The promotion response only references the agent id, so the full
    /// record is fetched in a second call.
    pub async fn make_agent(&self, contact_id: u64, options: &MakeAgent) -> Result<Agent> {
        let path = format!("contacts/{}/make_agent", contact_id);
        let promoted = self
            .client
            .put_json(&path, Some(&options.json_body()))
            .await?;

        let agent_id = promoted
            .get("agent")
            .and_then(|agent| agent.get("id"))
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                FreshdeskError::Record("promotion response carries no agent id".to_string())
            })?;

        let agent_path = format!("agents/{}", agent_id);
        Agent::from_json(self.client.get(&agent_path, &[]).await?)
    }
}
