//
//  freshdesk-client
//  api/agents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Agent Operations
//!
//! [`AgentApi`] manages helpdesk operators. Listing filters (`email`,
//! `mobile`, `phone`, `state`) pass through [`ListOptions::extra`] as plain
//! query pairs; deleting an agent demotes them back to a contact on the
//! remote side.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::client::FreshdeskClient;
use super::common::{ListOptions, PageWalk, Result};
use crate::models::Agent;

/// The mapper for the `agents` endpoint family.
#[derive(Debug)]
pub struct AgentApi {
    client: Arc<FreshdeskClient>,
}

impl AgentApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one agent by id.
    pub async fn get(&self, agent_id: u64) -> Result<Agent> {
        let path = format!("agents/{}", agent_id);
        Agent::from_json(self.client.get(&path, &[]).await?)
    }

    /// Lists agents; filters ride along as passthrough query pairs.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Agent>> {
        let walk = PageWalk::list(options.page, options.per_page);
        let items = self.client.get_paged("agents", &options.extra, walk).await?;
        items.into_iter().map(Agent::from_json).collect()
    }

    /// Applies a partial update and returns the resulting agent.
    pub async fn update(&self, agent_id: u64, changes: &Map<String, Value>) -> Result<Agent> {
        let path = format!("agents/{}", agent_id);
        let body = Value::Object(changes.clone());
        Agent::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Deletes an agent, demoting them to a contact.
    pub async fn delete(&self, agent_id: u64) -> Result<()> {
        let path = format!("agents/{}", agent_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }

    /// Fetches the agent the API key belongs to.
    pub async fn me(&self) -> Result<Agent> {
        Agent::from_json(self.client.get("agents/me", &[]).await?)
    }
}
