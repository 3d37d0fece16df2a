//! Textual filter mini-language
//!
//! A filter expression is three whitespace-separated parts:
//! `attribute operator value`, where the value is the remainder of the
//! string after the second token and may itself contain spaces. Values are
//! type-inferred in a fixed order: integer, float, boolean, ISO-8601 date,
//! and finally string.

use crate::error::{QueryError, QueryResult};
use crate::filter::Filter;
use crate::operator::Operator;
use chrono::NaiveDate;
use loupe_core::DataValue;

/// Infer a typed value from raw text.
pub fn parse_value(text: &str) -> DataValue {
    if let Ok(v) = text.parse::<i64>() {
        return DataValue::Int(v);
    }
    if let Ok(v) = text.parse::<f64>() {
        return DataValue::Float(v);
    }
    if text.eq_ignore_ascii_case("true") {
        return DataValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return DataValue::Bool(false);
    }
    if let Ok(v) = text.parse::<NaiveDate>() {
        return DataValue::Date(v);
    }
    DataValue::Str(text.to_string())
}

/// Parse a filter expression of the form `attribute operator value`.
pub fn parse_filter(text: &str) -> QueryResult<Filter> {
    let text = text.trim();

    let (attribute, rest) = split_token(text)
        .ok_or_else(|| QueryError::InvalidExpression(text.to_string()))?;
    let (operator, value) = split_token(rest)
        .ok_or_else(|| QueryError::InvalidExpression(text.to_string()))?;

    let operator = operator.parse::<Operator>()?;
    if value.is_empty() {
        return Err(QueryError::InvalidExpression(text.to_string()));
    }

    Ok(Filter::new(attribute, operator, parse_value(value)))
}

/// Split off the first whitespace-separated token, returning it and the
/// trimmed remainder. Returns None when there is no token or no remainder.
fn split_token(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.splitn(2, char::is_whitespace);
    let token = parts.next().filter(|s| !s.is_empty())?;
    let rest = parts.next()?.trim_start();
    Some((token, rest))
}
