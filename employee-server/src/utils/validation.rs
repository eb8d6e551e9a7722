//! Input validation helpers
//!
//! Request payloads implement [`Validate`] and produce a field-keyed
//! [`ValidationReport`]. Resolution is static: each payload type carries
//! its own rule set, there is no runtime validator lookup.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field-keyed validation report
///
/// Maps a field key (compact form, e.g. `FirstName`) to the ordered list
/// of messages recorded for it. Serializes as the wire error body:
///
/// ```json
/// { "errors": { "FirstName": ["'First Name' must not be empty."] } }
/// ```
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    /// Create an empty (valid) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field key
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// True when no field has recorded an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field key -> messages
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

/// Capability: validate a request payload into a field-keyed report
pub trait Validate {
    fn validate(&self) -> ValidationReport;
}

/// Required-text rule: missing, empty, or whitespace-only fails
///
/// The report key uses the field's compact identifier form (`FirstName`);
/// the message uses the spaced display form (`First Name`). Both forms are
/// wire compatibility requirements.
pub fn require_text(report: &mut ValidationReport, value: Option<&str>, key: &str, display: &str) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        report.add(key, format!("'{display}' must not be empty."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        assert!(ValidationReport::new().is_valid());
    }

    #[test]
    fn test_messages_accumulate_in_order() {
        let mut report = ValidationReport::new();
        report.add("Field", "first");
        report.add("Field", "second");

        assert!(!report.is_valid());
        assert_eq!(report.errors()["Field"], vec!["first", "second"]);
    }

    #[test]
    fn test_require_text_accepts_non_blank() {
        let mut report = ValidationReport::new();
        require_text(&mut report, Some("John"), "FirstName", "First Name");
        assert!(report.is_valid());
    }

    #[test]
    fn test_report_serializes_as_errors_body() {
        let mut report = ValidationReport::new();
        require_text(&mut report, None, "FirstName", "First Name");

        let body = serde_json::to_value(&report).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "errors": { "FirstName": ["'First Name' must not be empty."] }
            })
        );
    }
}
