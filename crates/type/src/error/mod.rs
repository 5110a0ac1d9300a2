// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter, Write},
	ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

mod diagnostic;

use crate::value::Type;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Renders the diagnostic the way it is reported to a query caller.
	pub fn render(&self) -> String {
		let mut output = String::new();

		let _ = write!(&mut output, "error[{}]: {}", self.code, self.message);

		if let Some(label) = &self.label {
			let _ = write!(&mut output, "\n  = {}", label);
		}

		if let Some(help) = &self.help {
			let _ = write!(&mut output, "\nhelp: {}", help);
		}

		for note in &self.notes {
			let _ = write!(&mut output, "\nnote: {}", note);
		}

		if let Some(cause) = &self.cause {
			let _ = write!(&mut output, "\ncaused by: {}", cause.render());
		}

		output
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0.render())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
	Equal,
	LessThan,
	GreaterThan,
}

impl CompareOp {
	pub fn symbol(&self) -> &'static str {
		match self {
			CompareOp::Equal => "=",
			CompareOp::LessThan => "<",
			CompareOp::GreaterThan => ">",
		}
	}
}

impl Display for CompareOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("Cannot apply '{operator}' operator to {left} and {right}")]
	Incomparable {
		operator: CompareOp,
		left: Type,
		right: Type,
	},
}

/// Builds an [`Error`] from anything that can describe itself as a diagnostic.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error::from($crate::error::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}
