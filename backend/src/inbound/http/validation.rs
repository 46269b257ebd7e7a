//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUserId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUserId => "invalid_user_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_user_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!(
        "{field} must be a non-empty id without surrounding whitespace"
    ))
    .with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUserId.as_str(),
    }))
}

/// Parse a user id from a path segment.
pub(crate) fn parse_user_id(value: String, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value.as_str()).map_err(|_| invalid_user_id_error(field, &value))
}

/// Parse a user id from an optional query or body field.
pub(crate) fn require_user_id(value: Option<String>, field: FieldName) -> Result<UserId, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    parse_user_id(value, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    const FIELD: FieldName = FieldName::new("userId1");

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a Value> {
        error.details().and_then(|details| details.get(key))
    }

    #[rstest]
    fn absent_value_is_missing_field() {
        let error = require_user_id(None, FIELD).expect_err("missing");
        assert_eq!(detail(&error, "code"), Some(&json!("missing_field")));
        assert_eq!(detail(&error, "field"), Some(&json!("userId1")));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case(" u-1")]
    fn malformed_value_is_invalid_user_id(#[case] raw: &str) {
        let error = require_user_id(Some(raw.to_owned()), FIELD).expect_err("invalid");
        assert_eq!(detail(&error, "code"), Some(&json!("invalid_user_id")));
        assert_eq!(detail(&error, "value"), Some(&json!(raw)));
    }

    #[rstest]
    fn well_formed_value_parses() {
        let id = require_user_id(Some("u-1".to_owned()), FIELD).expect("valid");
        assert_eq!(id.as_ref(), "u-1");
    }
}
