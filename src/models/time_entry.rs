//
//  freshdesk-client
//  models/time_entry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The TimeEntry domain record.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::record::RecordFields;
use crate::api::common::Result;

/// Time an agent logged against a ticket.
#[derive(Debug, Clone)]
pub struct TimeEntry {
    fields: RecordFields,
}

impl TimeEntry {
    /// Builds a time entry from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, &[])?,
        })
    }

    /// When the time entry was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the time entry was last updated.
    pub fn updated_at(&self) -> DateTime<FixedOffset> {
        self.fields.updated_at()
    }

    /// Looks up any raw field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterates over the stored field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys()
    }

    /// The time entry id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The id of the ticket the time was logged against.
    pub fn ticket_id(&self) -> Option<u64> {
        self.fields.u64_field("ticket_id")
    }

    /// The agent note attached to the entry.
    pub fn note(&self) -> Option<&str> {
        self.fields.str_field("note")
    }

    /// The logged duration as the API's `HH:MM` string.
    pub fn time_spent(&self) -> Option<&str> {
        self.fields.str_field("time_spent")
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.note().unwrap_or_default(),
            self.time_spent().unwrap_or_default()
        )
    }
}
