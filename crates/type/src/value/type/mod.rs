// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All possible SQL scalar kinds a [`crate::Value`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// The null marker
	Null,
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte signed integer
	Int64,
	/// An 8-byte floating point
	Float64,
	/// A UTF-8 encoded text
	String,
	/// An arbitrary byte sequence
	Bytes,
	/// A calendar date without a zone
	Date,
	/// A calendar date and wall-clock time without a zone
	Datetime,
	/// A wall-clock time of day
	Time,
	/// An absolute instant with nanosecond precision
	Timestamp,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int64 | Type::Float64)
	}

	/// Whether two values of these kinds may be ordered against each other.
	/// Numbers compare across integer and floating point; every other kind only
	/// with itself.
	pub fn is_comparable_with(&self, other: &Type) -> bool {
		if self.is_number() && other.is_number() {
			return true;
		}
		self == other
	}

	/// Fixed position of the kind in a cross-kind ordering. Numbers share a rank.
	pub fn rank(&self) -> u8 {
		match self {
			Type::Null => 0,
			Type::Boolean => 1,
			Type::Int64 | Type::Float64 => 2,
			Type::String => 3,
			Type::Bytes => 4,
			Type::Date => 5,
			Type::Datetime => 6,
			Type::Time => 7,
			Type::Timestamp => 8,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Null => f.write_str("NULL"),
			Type::Boolean => f.write_str("BOOL"),
			Type::Int64 => f.write_str("INT64"),
			Type::Float64 => f.write_str("FLOAT64"),
			Type::String => f.write_str("STRING"),
			Type::Bytes => f.write_str("BYTES"),
			Type::Date => f.write_str("DATE"),
			Type::Datetime => f.write_str("DATETIME"),
			Type::Time => f.write_str("TIME"),
			Type::Timestamp => f.write_str("TIMESTAMP"),
		}
	}
}
