//
//  freshdesk-client
//  api/ticket_fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Ticket Field Operations
//!
//! [`TicketFieldApi`] reads the ticket form's field definitions, optionally
//! narrowed to one field type.

use std::sync::Arc;

use serde_json::Value;

use super::client::FreshdeskClient;
use super::common::{FreshdeskError, Result};
use crate::models::TicketField;

/// The mapper for the `ticket_fields` endpoint.
#[derive(Debug)]
pub struct TicketFieldApi {
    client: Arc<FreshdeskClient>,
}

impl TicketFieldApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Lists the field definitions of the ticket form.
    ///
    /// `field_type` narrows the listing to one definition type, e.g.
    /// `default_priority` or `custom_dropdown`.
    pub async fn list(&self, field_type: Option<&str>) -> Result<Vec<TicketField>> {
        let query = match field_type {
            Some(field_type) => vec![("type".to_string(), field_type.to_string())],
            None => Vec::new(),
        };
        let items = self.client.get("ticket_fields", &query).await?;
        match items {
            Value::Array(items) => items.into_iter().map(TicketField::from_json).collect(),
            other => Err(FreshdeskError::Record(format!(
                "expected a JSON array of ticket fields, got {}",
                other
            ))),
        }
    }
}
