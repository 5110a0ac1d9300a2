// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use zetalite_type::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	pub fn is_asc(&self) -> bool {
		matches!(self, SortDirection::Asc)
	}
}

impl Display for SortDirection {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SortDirection::Asc => f.write_str("ASC"),
			SortDirection::Desc => f.write_str("DESC"),
		}
	}
}

/// One `ORDER BY` clause. Its position in the key list is its precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
	pub direction: SortDirection,
}

impl SortKey {
	pub fn asc() -> Self {
		Self {
			direction: SortDirection::Asc,
		}
	}

	pub fn desc() -> Self {
		Self {
			direction: SortDirection::Desc,
		}
	}
}

impl From<bool> for SortKey {
	fn from(is_asc: bool) -> Self {
		if is_asc {
			Self::asc()
		} else {
			Self::desc()
		}
	}
}

impl From<SortDirection> for SortKey {
	fn from(direction: SortDirection) -> Self {
		Self {
			direction,
		}
	}
}

/// The composite order key of one row, positionally matching the sort keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedRow {
	pub values: Vec<Value>,
}

impl OrderedRow {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}
}

impl From<Vec<Value>> for OrderedRow {
	fn from(values: Vec<Value>) -> Self {
		Self::new(values)
	}
}
