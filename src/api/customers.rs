//
//  freshdesk-client
//  api/customers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Customer Operations
//!
//! [`CustomerApi`] reads customer accounts, the billing-side view the API
//! keeps alongside companies. Read-only: customers are managed through the
//! company endpoints.

use std::sync::Arc;

use super::client::FreshdeskClient;
use super::common::{FreshdeskError, Result};
use crate::models::{Contact, Customer};

/// The mapper for the `customers` endpoint family.
#[derive(Debug)]
pub struct CustomerApi {
    client: Arc<FreshdeskClient>,
}

impl CustomerApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one customer by id.
    pub async fn get(&self, customer_id: u64) -> Result<Customer> {
        let path = format!("customers/{}", customer_id);
        Customer::from_json(self.client.get(&path, &[]).await?)
    }

    /// Fetches the customer a contact belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] when the contact carries no
    /// `customer_id`.
    pub async fn get_from_contact(&self, contact: &Contact) -> Result<Customer> {
        let customer_id = contact.customer_id().ok_or_else(|| {
            FreshdeskError::Record("contact carries no customer_id".to_string())
        })?;
        self.get(customer_id).await
    }
}
