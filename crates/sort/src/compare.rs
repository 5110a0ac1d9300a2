// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use zetalite_type::{Result, Value};

use crate::{NullOrdering, SortDirection};

/// Outcome of comparing two values for ordering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
	/// The left value sorts strictly before the right one.
	pub before: bool,
	/// Both values occupy the same position.
	pub equal: bool,
}

impl Comparison {
	pub const EQUAL: Comparison = Comparison {
		before: false,
		equal: true,
	};

	pub const BEFORE: Comparison = Comparison {
		before: true,
		equal: false,
	};

	pub const AFTER: Comparison = Comparison {
		before: false,
		equal: false,
	};

	pub fn ordering(&self) -> Ordering {
		if self.equal {
			Ordering::Equal
		} else if self.before {
			Ordering::Less
		} else {
			Ordering::Greater
		}
	}
}

/// Decides whether `left` sorts before `right` under `direction`.
///
/// Nulls are placed by `nulls`; two nulls are equal. Non-null values are
/// checked for equality first, then for `<` when ascending or `>` when
/// descending. Errors from the value comparison are returned unchanged.
pub fn compare_for_ordering(
	left: &Value,
	right: &Value,
	direction: SortDirection,
	nulls: NullOrdering,
) -> Result<Comparison> {
	match (left.is_null(), right.is_null()) {
		(true, true) => Ok(Comparison::EQUAL),
		(true, false) => Ok(if nulls.null_precedes(direction) {
			Comparison::BEFORE
		} else {
			Comparison::AFTER
		}),
		(false, true) => Ok(if nulls.null_precedes(direction) {
			Comparison::AFTER
		} else {
			Comparison::BEFORE
		}),
		(false, false) => {
			if left.is_equal(right)? {
				return Ok(Comparison::EQUAL);
			}

			let before = match direction {
				SortDirection::Asc => left.is_less_than(right)?,
				SortDirection::Desc => left.is_greater_than(right)?,
			};

			Ok(Comparison {
				before,
				equal: false,
			})
		}
	}
}
