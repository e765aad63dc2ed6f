//
//  freshdesk-client
//  models/company.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The Company domain record.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::record::RecordFields;
use crate::api::common::Result;

/// An organization contacts are grouped under.
#[derive(Debug, Clone)]
pub struct Company {
    fields: RecordFields,
}

impl Company {
    /// Builds a company from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, &[])?,
        })
    }

    /// When the company was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the company was last updated.
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

    /// The company id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The company name, when the payload carried one.
    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}
