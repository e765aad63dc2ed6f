//
//  freshdesk-client
//  models/solutions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Knowledge-base domain records: categories, folders, and articles.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::record::RecordFields;
use crate::api::common::{FreshdeskError, Result};

/// Raw field names colliding with [`SolutionArticle`]'s derived accessor.
const ARTICLE_RESERVED: &[&str] = &["status"];

/// A top-level knowledge-base section grouping folders.
#[derive(Debug, Clone)]
pub struct SolutionCategory {
    fields: RecordFields,
}

impl SolutionCategory {
    /// Builds a category from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, &[])?,
        })
    }

    /// When the category was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the category was last updated.
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

    /// The category id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The category name, when the payload carried one.
    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }
}

impl fmt::Display for SolutionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}

/// A folder of articles inside a category.
#[derive(Debug, Clone)]
pub struct SolutionFolder {
    fields: RecordFields,
}

impl SolutionFolder {
    /// Builds a folder from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, &[])?,
        })
    }

    /// When the folder was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the folder was last updated.
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

    /// The folder id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The folder name, when the payload carried one.
    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }
}

impl fmt::Display for SolutionFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}

/// A knowledge-base article.
///
/// Articles decode their publication state from the numeric `status` code;
/// the raw code stays available under `_status`.
#[derive(Debug, Clone)]
pub struct SolutionArticle {
    fields: RecordFields,
}

impl SolutionArticle {
    /// Builds an article from a raw API payload.
    pub(crate) fn from_json(raw: Value) -> Result<Self> {
        Ok(Self {
            fields: RecordFields::from_json(raw, ARTICLE_RESERVED)?,
        })
    }

    /// When the article was created.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.fields.created_at()
    }

    /// When the article was last updated.
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

    /// The article id, when the payload carried one.
    pub fn id(&self) -> Option<u64> {
        self.fields.u64_field("id")
    }

    /// The article title, when the payload carried one.
    pub fn title(&self) -> Option<&str> {
        self.fields.str_field("title")
    }

    /// Decodes the publication state.
    ///
    /// | Code | Label |
    /// |------|-------|
    /// | 1 | `draft` |
    /// | 2 | `published` |
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] for a missing field or a code
    /// outside the table.
    pub fn status(&self) -> Result<&'static str> {
        match self.fields.code("status")? {
            1 => Ok("draft"),
            2 => Ok("published"),
            other => Err(FreshdeskError::Record(format!(
                "unknown article status code {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SolutionArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article_with_status(status: i64) -> SolutionArticle {
        SolutionArticle::from_json(json!({
            "id": 4,
            "title": "Getting started",
            "status": status,
            "created_at": "2022-05-27T08:46:53Z",
            "updated_at": "2022-05-27T08:46:53Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_article_status_codes() {
        assert_eq!(article_with_status(1).status().unwrap(), "draft");
        assert_eq!(article_with_status(2).status().unwrap(), "published");
    }

    #[test]
    fn test_unmapped_article_status_raises() {
        assert!(matches!(
            article_with_status(3).status().unwrap_err(),
            FreshdeskError::Record(_)
        ));
    }

    #[test]
    fn test_raw_status_is_shadowed() {
        let article = article_with_status(2);
        assert_eq!(article.get("_status"), Some(&json!(2)));
        assert!(article.get("status").is_none());
    }
}
