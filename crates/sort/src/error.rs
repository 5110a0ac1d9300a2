// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use zetalite_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SortError {
	#[error("Row {row} has {actual} order key values, expected {expected}")]
	KeyArityMismatch {
		row: usize,
		expected: usize,
		actual: usize,
	},
}

impl IntoDiagnostic for SortError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SortError::KeyArityMismatch {
				row,
				expected,
				actual,
			} => Diagnostic {
				code: "SORT_001".to_string(),
				message: format!("Row {} has {} order key values, expected {}", row, actual, expected),
				label: Some(format!("expected {} values", expected)),
				help: Some("Build one order key value per ORDER BY clause".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SortError> for Error {
	fn from(err: SortError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
