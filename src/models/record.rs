//
//  freshdesk-client
//  models/record.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared Normalization for Domain Records
//!
//! Every resource payload goes through the same normalization before it
//! becomes a typed record: the `custom_field` envelope is flattened into the
//! top level, field names colliding with derived accessors are shadowed, and
//! the two mandatory timestamps are parsed eagerly. [`RecordFields`] holds
//! the result; the concrete record types in this module's siblings wrap it
//! and add their derived accessors on top.
//!
//! # Normalization Rules
//!
//! 1. The payload must be a JSON object.
//! 2. A non-empty `custom_field` object is removed and its entries merged
//!    into the top-level mapping (an empty envelope is left in place).
//! 3. Any field whose name appears in the record type's reserved set is
//!    stored under the `_`-prefixed shadow name instead, so a raw
//!    `priority` never overwrites the computed `priority()` accessor.
//! 4. `created_at` and `updated_at` must be present and parse as ISO-8601
//!    timestamps; failure is a hard [`FreshdeskError::Record`].
//!
//! # Notes
//!
//! - Fields keep their raw JSON values; accessors decode on demand
//! - Records are plain values: construction is the only mutation

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::api::common::{FreshdeskError, Result};

/// The normalized field mapping behind every domain record.
///
/// Holds the eagerly parsed timestamps and the open-ended mapping from
/// field name to raw JSON value. Record types delegate their generic
/// lookups here and implement their derived accessors against
/// [`RecordFields::code`].
#[derive(Debug, Clone)]
pub struct RecordFields {
    created_at: DateTime<FixedOffset>,
    updated_at: DateTime<FixedOffset>,
    fields: Map<String, Value>,
}

impl RecordFields {
    /// Normalizes a raw resource payload.
    ///
    /// `reserved` is the record type's fixed set of derived-accessor names;
    /// incoming fields with those names are stored under their shadow name
    /// (`priority` becomes `_priority`). Custom fields flattened out of the
    /// envelope are subject to the same shadowing.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] when the payload is not a JSON
    /// object or when either timestamp is missing, non-string, or does not
    /// parse.
    pub(crate) fn from_json(raw: Value, reserved: &'static [&'static str]) -> Result<Self> {
        let mut map = match raw {
            Value::Object(map) => map,
            other => {
                return Err(FreshdeskError::Record(format!(
                    "resource payload must be a JSON object, got {}",
                    other
                )))
            }
        };

        // Flatten the tenant custom-field envelope into the top level.
        let flatten = matches!(map.get("custom_field"), Some(Value::Object(custom)) if !custom.is_empty());
        if flatten {
            if let Some(Value::Object(custom)) = map.remove("custom_field") {
                map.extend(custom);
            }
        }

        let mut fields = Map::with_capacity(map.len());
        for (name, value) in map {
            if reserved.contains(&name.as_str()) {
                fields.insert(format!("_{}", name), value);
            } else {
                fields.insert(name, value);
            }
        }

        let created_at = take_timestamp(&mut fields, "created_at")?;
        let updated_at = take_timestamp(&mut fields, "updated_at")?;

        Ok(Self {
            created_at,
            updated_at,
            fields,
        })
    }

    /// When the resource was created, as parsed at construction time.
    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    /// When the resource was last updated, as parsed at construction time.
    pub fn updated_at(&self) -> DateTime<FixedOffset> {
        self.updated_at
    }

    /// Looks up a raw field value by name.
    ///
    /// Shadowed fields are found under their shadow name (`_priority`),
    /// never under the reserved name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterates over the stored field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Looks up a string field.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Looks up an unsigned integer field.
    pub fn u64_field(&self, name: &str) -> Option<u64> {
        self.fields.get(name).and_then(Value::as_u64)
    }

    /// Reads the shadowed numeric code behind a derived accessor.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::Record`] when the field is absent or not
    /// an integer.
    pub(crate) fn code(&self, name: &str) -> Result<i64> {
        let shadow = format!("_{}", name);
        let value = self.fields.get(&shadow).ok_or_else(|| {
            FreshdeskError::Record(format!("record has no {} field", name))
        })?;
        value.as_i64().ok_or_else(|| {
            FreshdeskError::Record(format!("record field {} is not an integer code: {}", name, value))
        })
    }
}

/// Removes and parses one of the mandatory timestamp fields.
fn take_timestamp(fields: &mut Map<String, Value>, name: &str) -> Result<DateTime<FixedOffset>> {
    let value = fields
        .remove(name)
        .ok_or_else(|| FreshdeskError::Record(format!("record has no {} timestamp", name)))?;

    let Value::String(text) = value else {
        return Err(FreshdeskError::Record(format!(
            "record timestamp {} is not a string: {}",
            name, value
        )));
    };

    DateTime::parse_from_rfc3339(&text).map_err(|e| {
        FreshdeskError::Record(format!("record timestamp {} {:?} does not parse: {}", name, text, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_payload() -> Value {
        json!({
            "id": 1,
            "subject": "Help",
            "created_at": "2022-05-27T08:46:53Z",
            "updated_at": "2022-05-27T09:01:00Z"
        })
    }

    #[test]
    fn test_timestamps_parse_eagerly() {
        let fields = RecordFields::from_json(base_payload(), &[]).unwrap();
        assert_eq!(fields.created_at().to_rfc3339(), "2022-05-27T08:46:53+00:00");
        assert_eq!(fields.updated_at().to_rfc3339(), "2022-05-27T09:01:00+00:00");
        // The raw strings are consumed by the typed accessors.
        assert!(fields.get("created_at").is_none());
    }

    #[test]
    fn test_missing_timestamp_is_a_hard_error() {
        let err = RecordFields::from_json(json!({"id": 1, "created_at": "2022-05-27T08:46:53Z"}), &[])
            .unwrap_err();
        assert!(matches!(err, FreshdeskError::Record(_)));
    }

    #[test]
    fn test_malformed_timestamp_is_a_hard_error() {
        let mut payload = base_payload();
        payload["updated_at"] = json!("yesterday-ish");
        let err = RecordFields::from_json(payload, &[]).unwrap_err();
        assert!(matches!(err, FreshdeskError::Record(_)));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = RecordFields::from_json(json!([1, 2, 3]), &[]).unwrap_err();
        assert!(matches!(err, FreshdeskError::Record(_)));
    }

    #[test]
    fn test_reserved_names_are_shadowed() {
        let mut payload = base_payload();
        payload["priority"] = json!(2);
        let fields = RecordFields::from_json(payload, &["priority"]).unwrap();
        assert!(fields.get("priority").is_none());
        assert_eq!(fields.get("_priority"), Some(&json!(2)));
        assert_eq!(fields.code("priority").unwrap(), 2);
    }

    #[test]
    fn test_custom_field_envelope_is_flattened() {
        let mut payload = base_payload();
        payload["custom_field"] = json!({"account_tier": "gold", "priority": 4});
        let fields = RecordFields::from_json(payload, &["priority"]).unwrap();
        assert_eq!(fields.str_field("account_tier"), Some("gold"));
        assert!(fields.get("custom_field").is_none());
        // Flattened custom fields respect the shadowing rule too.
        assert_eq!(fields.code("priority").unwrap(), 4);
    }

    #[test]
    fn test_empty_custom_field_envelope_stays_put() {
        let mut payload = base_payload();
        payload["custom_field"] = json!({});
        let fields = RecordFields::from_json(payload, &[]).unwrap();
        assert_eq!(fields.get("custom_field"), Some(&json!({})));
    }

    #[test]
    fn test_code_requires_an_integer() {
        let mut payload = base_payload();
        payload["source"] = json!("email");
        let fields = RecordFields::from_json(payload, &["source"]).unwrap();
        assert!(matches!(
            fields.code("source").unwrap_err(),
            FreshdeskError::Record(_)
        ));
    }

    #[test]
    fn test_missing_code_field() {
        let fields = RecordFields::from_json(base_payload(), &["source"]).unwrap();
        assert!(matches!(
            fields.code("source").unwrap_err(),
            FreshdeskError::Record(_)
        ));
    }
}
