//! Field validation for incoming entity payloads.
//!
//! Validation collects every violation instead of stopping at the first one.
//! Errors are grouped by field, then by the name of the violated constraint,
//! and serialize to a plain JSON object:
//!
//! ```
//! use cinema_database::validation::{constraints, ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! errors.add("release_date", constraints::IS_DATE, "release_date must be a Date instance");
//!
//! let json = serde_json::to_value(&errors).unwrap();
//! assert_eq!(json["release_date"]["is_date"], "release_date must be a Date instance");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum length of movie and actor names, matching the column contract.
pub const MAX_NAME_LENGTH: usize = 255;

/// Constraint identifiers used as keys in [`ValidationErrors`].
pub mod constraints {
    pub const IS_NOT_EMPTY: &str = "is_not_empty";
    pub const MAX_LENGTH: &str = "max_length";
    pub const IS_DATE: &str = "is_date";
    pub const IS_ENUM: &str = "is_enum";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, BTreeMap<String, String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violated constraint for a field.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.0
            .entry(field.into())
            .or_default()
            .insert(constraint.into(), message.into());
    }

    /// Fold errors of a nested value in under `prefix`, e.g. `actors[0].name`.
    pub fn merge_nested(&mut self, prefix: &str, nested: ValidationErrors) {
        for (field, violations) in nested.0 {
            let entry = self.0.entry(format!("{prefix}.{field}")).or_default();
            entry.extend(violations);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Violations recorded for a single field.
    pub fn field(&self, field: &str) -> Option<&BTreeMap<String, String>> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violations in self.0.values() {
            for message in violations.values() {
                if !first {
                    f.write_str("; ")?;
                }
                f.write_str(message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a required name: present after trimming and within [`MAX_NAME_LENGTH`].
pub fn check_name(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(
            field,
            constraints::IS_NOT_EMPTY,
            format!("{field} should not be empty"),
        );
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        errors.add(
            field,
            constraints::MAX_LENGTH,
            format!("{field} must be shorter than or equal to {MAX_NAME_LENGTH} characters"),
        );
    }
}

/// Parse a calendar date, accepting `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Check that a required date is present, a string and well formed.
pub fn check_date(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&Value>,
) -> Option<NaiveDate> {
    let parsed = value.and_then(Value::as_str).and_then(parse_date);
    if parsed.is_none() {
        errors.add(
            field,
            constraints::IS_DATE,
            format!("{field} must be a Date instance"),
        );
    }
    parsed
}

/// Parse one of a closed set of string values. Non-string values never match.
pub fn check_enum<T: FromStr>(
    errors: &mut ValidationErrors,
    field: &str,
    value: &Value,
    allowed: &[&str],
) -> Option<T> {
    match value.as_str().map(str::parse::<T>) {
        Some(Ok(parsed)) => Some(parsed),
        _ => {
            errors.add(
                field,
                constraints::IS_ENUM,
                format!(
                    "{field} must be one of the following values: {}",
                    allowed.join(", ")
                ),
            );
            None
        }
    }
}
