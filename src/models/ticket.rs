//
//  freshdesk-client
//  models/ticket.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The Ticket domain record.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::record::RecordFields;
use crate::api::common::{FreshdeskError, Result};

/// Raw field names that collide with the derived accessors below.
const RESERVED: &[&str] = &["priority", "status", "source"];

/// A helpdesk ticket.
///
/// The central Freshdesk resource. Beyond the open-ended field mapping every
/// record carries, tickets expose three derived accessors decoding the
/// numeric `priority`, `status`, and `source` codes the API sends. The raw
/// codes stay available under their shadow names (`_priority`, `_status`,
/// `_source`) through [`Ticket::get`].
///
/// # Example
///
/// ```rust,no_run
/// use freshdesk_client::Freshdesk;
///
/// # async fn example() -> freshdesk_client::Result<()> {
/// let freshdesk = Freshdesk::new("company.freshdesk.com", "api-key")?;
/// let ticket = freshdesk.tickets.get(1, &[]).await?;
///
/// println!("#{:?} {}", ticket.id(), ticket);
/// println!("priority: {}", ticket.priority()?);
/// println!("status:   {}", ticket.status()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticket {
    fields: RecordFields,
}

impl Ticket {
    /// Builds a ticket from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, RESERVED)?,
        })
    }

    /// When the ticket was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the ticket was last updated.
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

    /// The ticket id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The ticket subject, when the payload carried one.
    pub fn subject(&self) -> Option<&str> {
        self.fields.str_field("subject")
    }

    /// Decodes the ticket priority code.
    ///
    /// | Code | Label |
    /// |------|-------|
    /// | 1 | `low` |
    /// | 2 | `medium` |
    /// | 3 | `high` |
    /// | 4 | `urgent` |
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] for a missing field or a code
    /// outside the table.
    pub fn priority(&self) -> Result<&'static str> {
        match self.fields.code("priority")? {
            1 => Ok("low"),
            2 => Ok("medium"),
            3 => Ok("high"),
            4 => Ok("urgent"),
            other => Err(FreshdeskError::Record(format!(
                "unknown ticket priority code {}",
                other
            ))),
        }
    }

    /// Decodes the ticket status code.
    ///
    /// | Code | Label |
    /// |------|-------|
    /// | 2 | `open` |
    /// | 3 | `pending` |
    /// | 4 | `resolved` |
    /// | 5 | `closed` |
    ///
    /// Tenants can define additional statuses, so any other code decodes to
    /// the synthesized label `status_<code>` instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] only when the field is missing or
    /// not an integer; unknown codes never error.
    pub fn status(&self) -> Result<String> {
        Ok(match self.fields.code("status")? {
            2 => "open".to_string(),
            3 => "pending".to_string(),
            4 => "resolved".to_string(),
            5 => "closed".to_string(),
            other => format!("status_{}", other),
        })
    }

    /// Decodes the channel the ticket arrived through.
    ///
    /// | Code | Label |
    /// |------|-------|
    /// | 1 | `email` |
    /// | 2 | `portal` |
    /// | 3 | `phone` |
    /// | 4 | `forum` |
    /// | 5 | `twitter` |
    /// | 6 | `facebook` |
    /// | 7 | `chat` |
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] for a missing field or a code
    /// outside the table.
    pub fn source(&self) -> Result<&'static str> {
        match self.fields.code("source")? {
            1 => Ok("email"),
            2 => Ok("portal"),
            3 => Ok("phone"),
            4 => Ok("forum"),
            5 => Ok("twitter"),
            6 => Ok("facebook"),
            7 => Ok("chat"),
            other => Err(FreshdeskError::Record(format!(
                "unknown ticket source code {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subject().unwrap_or_default())
    }
}
