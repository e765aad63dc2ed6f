//
//  freshdesk-client
//  api/time_entries.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Time Entry Operations
//!
//! [`TimeEntryApi`] reads logged time, either tenant-wide or scoped to one
//! ticket.

use std::sync::Arc;

use super::client::FreshdeskClient;
use super::common::{ListOptions, PageWalk, Result};
use crate::models::TimeEntry;

/// The mapper for the `time_entries` endpoint family.
#[derive(Debug)]
pub struct TimeEntryApi {
    client: Arc<FreshdeskClient>,
}

impl TimeEntryApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Lists time entries, optionally scoped to a ticket.
    ///
    /// Filters (`agent_id`, `billable`, `executed_after`, ...) pass through
    /// [`ListOptions::extra`].
    pub async fn list(
        &self,
        ticket_id: Option<u64>,
        options: &ListOptions,
    ) -> Result<Vec<TimeEntry>> {
        let path = match ticket_id {
            Some(ticket_id) => format!("tickets/{}/time_entries", ticket_id),
            None => "time_entries".to_string(),
        };
        let walk = PageWalk::list(options.page, options.per_page);
        let items = self.client.get_paged(&path, &options.extra, walk).await?;
        items.into_iter().map(TimeEntry::from_json).collect()
    }
}
