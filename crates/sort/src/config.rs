// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::NullOrdering;

/// What the sorter does when two values of a key cannot be compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnIncomparable {
	/// Reject the sort before any row is moved.
	#[default]
	Fail,
	/// Keep sorting; incomparable values are grouped by kind.
	RankByKind,
}

/// Configuration for a [`crate::Sorter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
	/// Placement of nulls relative to non-null values
	pub nulls: NullOrdering,
	/// Handling of values whose kinds cannot be ordered against each other
	pub on_incomparable: OnIncomparable,
	/// Keep tied rows in their input order
	pub stable: bool,
}

impl Default for SortConfig {
	fn default() -> Self {
		Self {
			nulls: NullOrdering::default(),
			on_incomparable: OnIncomparable::default(),
			stable: true,
		}
	}
}

impl SortConfig {
	pub fn with_nulls(mut self, nulls: NullOrdering) -> Self {
		self.nulls = nulls;
		self
	}

	pub fn with_on_incomparable(mut self, on_incomparable: OnIncomparable) -> Self {
		self.on_incomparable = on_incomparable;
		self
	}

	pub fn with_stable(mut self, stable: bool) -> Self {
		self.stable = stable;
		self
	}
}
