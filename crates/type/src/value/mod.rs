// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

mod compare;
mod r#type;

pub use compare::compare_float;
pub use r#type::Type;

/// A SQL scalar value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// The SQL null marker
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int64(i64),
	/// An 8-byte floating point
	Float64(f64),
	/// A UTF-8 encoded text
	String(String),
	/// An arbitrary byte sequence
	Bytes(Vec<u8>),
	/// A calendar date (year, month, day)
	Date(NaiveDate),
	/// A calendar date and wall-clock time, not anchored to any zone
	Datetime(NaiveDateTime),
	/// A time of day (hour, minute, second, nanosecond)
	Time(NaiveTime),
	/// An absolute instant with nanosecond precision
	Timestamp(DateTime<Utc>),
}

impl Value {
	pub fn null() -> Self {
		Value::Null
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int64(v: impl Into<i64>) -> Self {
		Value::Int64(v.into())
	}

	pub fn float64(v: impl Into<f64>) -> Self {
		Value::Float64(v.into())
	}

	pub fn string(v: impl Into<String>) -> Self {
		Value::String(v.into())
	}

	pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
		Value::Bytes(v.into())
	}

	pub fn date(v: impl Into<NaiveDate>) -> Self {
		Value::Date(v.into())
	}

	pub fn datetime(v: impl Into<NaiveDateTime>) -> Self {
		Value::Datetime(v.into())
	}

	pub fn time(v: impl Into<NaiveTime>) -> Self {
		Value::Time(v.into())
	}

	pub fn timestamp(v: impl Into<DateTime<Utc>>) -> Self {
		Value::Timestamp(v.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Null => Type::Null,
			Value::Boolean(_) => Type::Boolean,
			Value::Int64(_) => Type::Int64,
			Value::Float64(_) => Type::Float64,
			Value::String(_) => Type::String,
			Value::Bytes(_) => Type::Bytes,
			Value::Date(_) => Type::Date,
			Value::Datetime(_) => Type::Datetime,
			Value::Time(_) => Type::Time,
			Value::Timestamp(_) => Type::Timestamp,
		}
	}
}

impl From<Option<Value>> for Value {
	fn from(value: Option<Value>) -> Self {
		value.unwrap_or(Value::Null)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int64(value) => Display::fmt(value, f),
			Value::Float64(value) => Display::fmt(value, f),
			Value::String(value) => Display::fmt(value, f),
			Value::Bytes(value) => {
				f.write_str("b\"")?;
				for byte in value {
					write!(f, "\\x{:02x}", byte)?;
				}
				f.write_str("\"")
			}
			Value::Date(value) => Display::fmt(value, f),
			Value::Datetime(value) => write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S%.f")),
			Value::Time(value) => Display::fmt(value, f),
			Value::Timestamp(value) => f.write_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
		}
	}
}
