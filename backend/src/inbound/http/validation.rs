//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path segments are extracted as strings and parsed here so malformed ids
//! produce `invalid_request` payloads with field context rather than Actix's
//! plain-text 404.

use std::str::FromStr;

use serde_json::json;

use crate::domain::{Error, TicketId, UserId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
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

pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const USER_ID: FieldName = FieldName::new("userId");

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a non-negative integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

fn parse_id<T: FromStr>(value: &str, field: FieldName) -> Result<T, Error> {
    value.parse().map_err(|_| invalid_id_error(field, value))
}

pub(crate) fn parse_ticket_id(value: &str) -> Result<TicketId, Error> {
    parse_id(value, ID)
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    parse_id(value, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("4", 4)]
    #[case("021", 21)]
    fn parses_numeric_ticket_ids(#[case] raw: &str, #[case] expected: u64) {
        assert_eq!(parse_ticket_id(raw).expect("valid id"), TicketId::new(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("1.5")]
    #[case("")]
    fn rejects_malformed_user_ids(#[case] raw: &str) {
        let error = parse_user_id(raw, USER_ID).expect_err("malformed id");
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "userId", "value": raw, "code": "invalid_id" }))
        );
    }
}
