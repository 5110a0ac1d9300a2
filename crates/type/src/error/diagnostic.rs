// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{CompareOp, Diagnostic, IntoDiagnostic, TypeError};

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::Incomparable {
				operator,
				left,
				right,
			} => {
				let sym = operator.symbol();
				let mut notes = vec![
					format!("Left operand is of type: {}", left),
					format!("Right operand is of type: {}", right),
				];

				if matches!(operator, CompareOp::LessThan | CompareOp::GreaterThan) {
					notes.push("Ordering requires both operands to share a comparable type".to_string());
				}

				Diagnostic {
					code: "COMPARE_001".to_string(),
					message: format!("Cannot apply '{}' operator to {} and {}", sym, left, right),
					label: Some(format!("'{}' operator on incompatible types", sym)),
					help: Some("Cast the operands to a common type before comparing them".to_string()),
					notes,
					cause: None,
				}
			}
		}
	}
}
