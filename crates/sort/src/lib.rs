// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! SQL `ORDER BY` support for aggregate and set operations.
//!
//! Rows are ordered by a composite key: one [`Value`](zetalite_type::Value)
//! per [`SortKey`], compared position by position until one differs.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod compare;
mod config;
mod error;
mod key;
mod nulls;
mod sort;

pub use compare::{Comparison, compare_for_ordering};
pub use config::{OnIncomparable, SortConfig};
pub use error::SortError;
pub use key::{OrderedRow, SortDirection, SortKey};
pub use nulls::NullOrdering;
pub use sort::{Sorter, sort_rows};
