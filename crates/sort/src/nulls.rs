// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::SortDirection;

/// Where nulls land relative to non-null values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullOrdering {
	/// Nulls come first in both directions.
	#[default]
	AlwaysFirst,
	/// Nulls come first when ascending and last when descending.
	SqlStandard,
}

impl NullOrdering {
	/// Whether a null sorts before a non-null value in the given direction.
	pub fn null_precedes(&self, direction: SortDirection) -> bool {
		match self {
			NullOrdering::AlwaysFirst => true,
			NullOrdering::SqlStandard => direction.is_asc(),
		}
	}
}
