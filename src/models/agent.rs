//
//  freshdesk-client
//  models/agent.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The Agent domain record.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::record::RecordFields;
use crate::api::common::Result;

/// A helpdesk operator.
///
/// Agent payloads embed their personal details in a nested `contact`
/// object; [`Agent::name`] reaches into it.
#[derive(Debug, Clone)]
pub struct Agent {
    fields: RecordFields,
}

impl Agent {
    /// Builds an agent from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, &[])?,
        })
    }

    /// When the agent was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the agent was last updated.
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

    /// The agent id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The agent's display name, from the embedded contact object.
    pub fn name(&self) -> Option<&str> {
        self.fields
            .get("contact")
            .and_then(|contact| contact.get("name"))
            .and_then(Value::as_str)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}
