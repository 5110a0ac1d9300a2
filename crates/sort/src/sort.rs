// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tracing::{instrument, warn};
use zetalite_type::{Error, Result, Value, return_error};

use crate::{
	NullOrdering, OnIncomparable, OrderedRow, SortConfig, SortDirection, SortError, SortKey,
	compare::compare_for_ordering,
};

/// Orders rows by their composite order keys.
#[derive(Debug, Clone, Default)]
pub struct Sorter {
	config: SortConfig,
}

/// Sorts `rows` in place with the default configuration.
pub fn sort_rows(keys: &[SortKey], rows: &mut [OrderedRow]) -> Result<()> {
	Sorter::default().sort(keys, rows)
}

impl Sorter {
	pub fn new(config: SortConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &SortConfig {
		&self.config
	}

	pub fn sort(&self, keys: &[SortKey], rows: &mut [OrderedRow]) -> Result<()> {
		self.sort_by_key(keys, rows, OrderedRow::values)
	}

	/// Sorts any row type whose order key can be borrowed through `key`.
	///
	/// Does nothing when `keys` is empty, so rows stay in arrival order.
	#[instrument(name = "sort::sort_by_key", level = "trace", skip_all, fields(keys = keys.len(), rows = items.len()))]
	pub fn sort_by_key<T, F>(&self, keys: &[SortKey], items: &mut [T], key: F) -> Result<()>
	where
		F: Fn(&T) -> &[Value],
	{
		if keys.is_empty() {
			return Ok(());
		}

		for (row, item) in items.iter().enumerate() {
			let actual = key(item).len();
			if actual != keys.len() {
				return_error!(SortError::KeyArityMismatch {
					row,
					expected: keys.len(),
					actual,
				});
			}
		}

		if self.config.on_incomparable == OnIncomparable::Fail {
			self.ensure_comparable(keys, items, &key)?;
		}

		let nulls = self.config.nulls;
		let mut first_error: Option<Error> = None;

		let mut compare = |l: &T, r: &T| {
			for (position, sort_key) in keys.iter().enumerate() {
				let vl = &key(l)[position];
				let vr = &key(r)[position];
				match compare_for_ordering(vl, vr, sort_key.direction, nulls) {
					Ok(comparison) if comparison.equal => continue,
					Ok(comparison) => return comparison.ordering(),
					Err(err) => {
						if first_error.is_none() {
							first_error = Some(err);
						}
						let ord = rank_by_kind(vl, vr, sort_key.direction);
						if ord != Ordering::Equal {
							return ord;
						}
					}
				}
			}
			Ordering::Equal
		};

		if self.config.stable {
			items.sort_by(&mut compare);
		} else {
			items.sort_unstable_by(&mut compare);
		}

		match (first_error, self.config.on_incomparable) {
			(None, _) => Ok(()),
			(Some(err), OnIncomparable::Fail) => Err(err),
			(Some(err), OnIncomparable::RankByKind) => {
				warn!(code = %err.code, "incomparable order key values ranked by kind: {}", err.message);
				Ok(())
			}
		}
	}

	/// Compares every non-null value of each key column with the first
	/// non-null value of that column. Comparability is an equivalence over
	/// kinds, so passing this check means no comparison during the sort fails.
	fn ensure_comparable<T, F>(&self, keys: &[SortKey], items: &[T], key: &F) -> Result<()>
	where
		F: Fn(&T) -> &[Value],
	{
		for (position, sort_key) in keys.iter().enumerate() {
			let mut values = items.iter().map(|item| &key(item)[position]).filter(|v| !v.is_null());

			let Some(anchor) = values.next() else {
				continue;
			};

			for value in values {
				compare_for_ordering(anchor, value, sort_key.direction, NullOrdering::AlwaysFirst)?;
			}
		}
		Ok(())
	}
}

fn rank_by_kind(l: &Value, r: &Value, direction: SortDirection) -> Ordering {
	let ord = l.get_type().rank().cmp(&r.get_type().rank());
	match direction {
		SortDirection::Asc => ord,
		SortDirection::Desc => ord.reverse(),
	}
}
