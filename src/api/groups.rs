//
//  freshdesk-client
//  api/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Group Operations
//!
//! [`GroupApi`] reads agent groups.

use std::sync::Arc;

use super::client::FreshdeskClient;
use super::common::{ListOptions, PageWalk, Result};
use crate::models::Group;

/// The mapper for the `groups` endpoint family.
#[derive(Debug)]
pub struct GroupApi {
    client: Arc<FreshdeskClient>,
}

impl GroupApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one group by id.
    pub async fn get(&self, group_id: u64) -> Result<Group> {
        let path = format!("groups/{}", group_id);
        Group::from_json(self.client.get(&path, &[]).await?)
    }

    /// Lists groups.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Group>> {
        let walk = PageWalk::list(options.page, options.per_page);
        let items = self.client.get_paged("groups", &options.extra, walk).await?;
        items.into_iter().map(Group::from_json).collect()
    }
}
