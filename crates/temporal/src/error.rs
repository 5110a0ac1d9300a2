// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use zetalite_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemporalError {
	#[error("failed to load time zone '{spec}': {reason}")]
	ZoneLoad {
		spec: String,
		reason: String,
	},

	#[error("invalid time zone offset '{spec}': {reason}")]
	InvalidOffset {
		spec: String,
		reason: String,
	},

	#[error("failed to reinterpret wall clock '{text}': {reason}")]
	Formatting {
		text: String,
		reason: String,
	},

	#[error("invalid timestamp '{text}': {reason}")]
	InvalidTimestamp {
		text: String,
		reason: String,
	},
}

impl IntoDiagnostic for TemporalError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TemporalError::ZoneLoad {
				spec,
				reason,
			} => Diagnostic {
				code: "TIMEZONE_001".to_string(),
				message: format!("failed to load time zone '{}'", spec),
				label: Some("unknown time zone".to_string()),
				help: Some(
					"Use a fixed offset such as '+09:00' or a zone database name such as 'America/Los_Angeles'"
						.to_string(),
				),
				notes: vec![],
				cause: Some(Box::new(Diagnostic {
					code: "TIMEZONE_001".to_string(),
					message: reason,
					label: None,
					help: None,
					notes: vec![],
					cause: None,
				})),
			},

			TemporalError::InvalidOffset {
				spec,
				reason,
			} => Diagnostic {
				code: "TIMEZONE_002".to_string(),
				message: format!("invalid time zone offset '{}': {}", spec, reason),
				label: Some("malformed offset".to_string()),
				help: Some("Offsets are written as +HH, +HH:MM or +HHMM (or with a leading '-')".to_string()),
				notes: vec!["Minutes must be below 60 and the offset below 24 hours".to_string()],
				cause: None,
			},

			TemporalError::Formatting {
				text,
				reason,
			} => Diagnostic {
				code: "TEMPORAL_001".to_string(),
				message: format!("failed to reinterpret wall clock '{}': {}", text, reason),
				label: None,
				help: Some("This is an internal error - please report this issue".to_string()),
				notes: vec![],
				cause: None,
			},

			TemporalError::InvalidTimestamp {
				text,
				reason,
			} => Diagnostic {
				code: "TEMPORAL_002".to_string(),
				message: format!("invalid timestamp '{}': {}", text, reason),
				label: Some("unparseable timestamp".to_string()),
				help: Some(
					"Write timestamps as YYYY-MM-DD, YYYY-MM-DD HH:MM:SS[.fffffffff] or YYYY-MM-DDTHH:MM:SS[.fffffffff]"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<TemporalError> for Error {
	fn from(err: TemporalError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
