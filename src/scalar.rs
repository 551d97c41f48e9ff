//! `DateTime` scalar: conversion between ISO-8601 wire strings and `chrono` timestamps.
//!
//! Only the API boundary converts; the store and resolvers work on [`DateTime`] values.

use crate::error::AppError;
use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Internal timestamp, millisecond precision, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Truncates to milliseconds so every value survives a wire round trip.
    pub fn from_utc(at: chrono::DateTime<Utc>) -> Self {
        Self(at.trunc_subsecs(3))
    }

    pub fn as_utc(&self) -> chrono::DateTime<Utc> {
        self.0
    }

    /// The smallest representable instant strictly after `self`.
    pub fn next_tick(&self) -> Self {
        Self(self.0 + chrono::Duration::milliseconds(1))
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serialize(self))
    }
}

/// Parses a client-supplied string. Accepts RFC 3339, a date-time without offset
/// (read as UTC) and a bare calendar date (midnight UTC).
pub fn parse_value(input: &str) -> Result<DateTime, AppError> {
    let input = input.trim();
    if let Ok(at) = chrono::DateTime::parse_from_rfc3339(input) {
        return Ok(DateTime::from_utc(at.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(DateTime::from_utc(naive.and_utc()));
    }
    if let Some(naive) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(DateTime::from_utc(naive.and_utc()));
    }
    Err(AppError::BadInput(format!("invalid DateTime '{input}'")))
}

/// Only string literals are date-time literals; any other kind reads as null.
pub fn parse_literal(value: &Value) -> Result<Option<DateTime>, AppError> {
    match value {
        Value::String(s) => parse_value(s).map(Some),
        _ => Ok(None),
    }
}

/// Renders `2024-05-01T12:30:00.250Z`.
pub fn serialize(value: &DateTime) -> String {
    value.0.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A valid ISO-8601 DateTime string
#[Scalar(name = "DateTime")]
impl ScalarType for DateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match parse_literal(&value) {
            Ok(Some(at)) => Ok(at),
            Ok(None) => Err(InputValueError::expected_type(value)),
            Err(err) => Err(InputValueError::custom(err)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn to_value(&self) -> Value {
        Value::String(serialize(self))
    }
}
