//
//  freshdesk-client
//  models/comment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The Comment domain record.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::record::RecordFields;
use crate::api::common::{FreshdeskError, Result};

/// Raw field names that collide with the derived accessors below.
const RESERVED: &[&str] = &["source"];

/// A conversation entry on a ticket: a note or a reply.
///
/// Comments decode their own `source` code table, distinct from the one on
/// tickets. The raw code stays available under `_source`.
#[derive(Debug, Clone)]
pub struct Comment {
    fields: RecordFields,
}

impl Comment {
    /// Builds a comment from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, RESERVED)?,
        })
    }

    /// When the comment was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the comment was last updated.
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

    /// The comment id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The id of the ticket this comment belongs to.
    pub fn ticket_id(&self) -> Option<u64> {
        self.fields.u64_field("ticket_id")
    }

    /// The comment body with markup stripped, when the payload carried one.
    pub fn body_text(&self) -> Option<&str> {
        self.fields.str_field("body_text")
    }

    /// Decodes the channel the comment arrived through.
    ///
    /// | Code | Label |
    /// |------|-------|
    /// | 0 | `reply` |
    /// | 2 | `note` |
    /// | 5 | `twitter` |
    /// | 6 | `survey` |
    /// | 7 | `facebook` |
    /// | 8 | `email` |
    /// | 9 | `phone` |
    /// | 10 | `mobihelp` |
    /// | 11 | `e-commerce` |
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] for a missing field or a code
    /// outside the table.
    pub fn source(&self) -> Result<&'static str> {
        match self.fields.code("source")? {
            0 => Ok("reply"),
            2 => Ok("note"),
            5 => Ok("twitter"),
            6 => Ok("survey"),
            7 => Ok("facebook"),
            8 => Ok("email"),
            9 => Ok("phone"),
            10 => Ok("mobihelp"),
            11 => Ok("e-commerce"),
            other => Err(FreshdeskError::Record(format!(
                "unknown comment source code {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.body_text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn comment_with_source(source: i64) -> Comment {
        Comment::from_json(json!({
            "id": 7,
            "ticket_id": 1,
            "body_text": "We looked into it.",
            "source": source,
            "created_at": "2022-05-27T08:46:53Z",
            "updated_at": "2022-05-27T08:46:53Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_source_codes() {
        assert_eq!(comment_with_source(0).source().unwrap(), "reply");
        assert_eq!(comment_with_source(2).source().unwrap(), "note");
        assert_eq!(comment_with_source(11).source().unwrap(), "e-commerce");
    }

    #[test]
    fn test_unmapped_source_raises() {
        // 1 sits inside the ticket table but not the comment table.
        assert!(matches!(
            comment_with_source(1).source().unwrap_err(),
            FreshdeskError::Record(_)
        ));
    }

    #[test]
    fn test_display_is_the_body_text() {
        assert_eq!(comment_with_source(2).to_string(), "We looked into it.");
    }
}
