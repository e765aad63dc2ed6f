//
//  freshdesk-client
//  api/companies.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Company Operations
//!
//! [`CompanyApi`] covers the `companies` endpoint family. Companies have no
//! required fields beyond a name and no client-side defaults, so creation
//! and update both take a plain JSON object merged into the request body.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::client::FreshdeskClient;
use super::common::{ListOptions, PageWalk, Result};
use crate::models::Company;

/// The mapper for the `companies` endpoint family.
#[derive(Debug)]
pub struct CompanyApi {
    client: Arc<FreshdeskClient>,
}

impl CompanyApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one company by id.
    pub async fn get(&self, company_id: u64) -> Result<Company> {
        let path = format!("companies/{}", company_id);
        Company::from_json(self.client.get(&path, &[]).await?)
    }

    /// Lists companies.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Company>> {
        let walk = PageWalk::list(options.page, options.per_page);
        let items = self
            .client
            .get_paged("companies", &options.extra, walk)
            .await?;
        items.into_iter().map(Company::from_json).collect()
    }

    /// Searches companies with a structured query string.
    ///
    /// Same query grammar, length guard, and 10-page cap as
    /// [`TicketApi::filter`](super::tickets::TicketApi::filter).
    pub async fn filter(&self, query: &str, page: Option<u32>) -> Result<Vec<Company>> {
        let walk = PageWalk::search(page);
        let items = self
            .client
            .get_search_paged("search/companies", query, walk)
            .await?;
        items.into_iter().map(Company::from_json).collect()
    }

    /// Creates a company from the given body fields.
    pub async fn create(&self, company: &Map<String, Value>) -> Result<Company> {
        let body = Value::Object(company.clone());
        Company::from_json(self.client.post_json("companies", &body).await?)
    }

    /// Applies a partial update and returns the resulting company.
    pub async fn update(&self, company_id: u64, changes: &Map<String, Value>) -> Result<Company> {
        let path = format!("companies/{}", company_id);
        let body = Value::Object(changes.clone());
        Company::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Deletes a company.
    pub async fn delete(&self, company_id: u64) -> Result<()> {
        let path = format!("companies/{}", company_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }
}
