//
//  freshdesk-client
//  api/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Role Operations
//!
//! [`RoleApi`] reads permission roles. A tenant has a handful of roles at
//! most, so the listing is a single unpaginated fetch.

use std::sync::Arc;

use super::client::FreshdeskClient;
use super::common::{FreshdeskError, Result};
use crate::models::Role;

/// The mapper for the `roles` endpoint family.
#[derive(Debug)]
pub struct RoleApi {
    client: Arc<FreshdeskClient>,
}

impl RoleApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one role by id.
    pub async fn get(&self, role_id: u64) -> Result<Role> {
        let path = format!("roles/{}", role_id);
        Role::from_json(self.client.get(&path, &[]).await?)
    }

    /// Lists every role.
    pub async fn list(&self) -> Result<Vec<Role>> {
        let items = self.client.get("roles", &[]).await?;
        match items {
            serde_json::Value::Array(items) => items.into_iter().map(Role::from_json).collect(),
            other => Err(FreshdeskError::Record(format!(
                "expected a JSON array of roles, got {}",
                other
            ))),
        }
    }
}
