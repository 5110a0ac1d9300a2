// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::FixedOffset;
use zetalite_type::Result;

use crate::TemporalError;

/// Parses a numeric zone offset: `±HH`, `±HH:MM` or `±HHMM`, optionally
/// prefixed with `UTC`.
///
/// Returns `Ok(None)` when `spec` is not written as an offset at all, so the
/// caller can try the zone database instead.
pub fn parse_offset(spec: &str) -> Result<Option<FixedOffset>> {
	let text = spec.strip_prefix("UTC").unwrap_or(spec).as_bytes();

	let (sign, digits) = match text.split_first() {
		Some((&b'+', rest)) => (1, rest),
		Some((&b'-', rest)) => (-1, rest),
		_ => return Ok(None),
	};

	let (hour, minute) = match digits {
		[h1, h2] => ([*h1, *h2], None),
		[h1, h2, m1, m2] => ([*h1, *h2], Some([*m1, *m2])),
		[h1, h2, b':', m1, m2] => ([*h1, *h2], Some([*m1, *m2])),
		_ => return Err(invalid(spec, "expected +HH, +HH:MM or +HHMM")),
	};

	let hour = two_digits(hour).ok_or_else(|| invalid(spec, "hour must be two digits"))?;
	let minute = match minute {
		Some(minute) => two_digits(minute).ok_or_else(|| invalid(spec, "minute must be two digits"))?,
		None => 0,
	};

	if minute >= 60 {
		return Err(invalid(spec, "minute must be below 60"));
	}

	let seconds = sign * (hour * 3600 + minute * 60);
	FixedOffset::east_opt(seconds).map(Some).ok_or_else(|| invalid(spec, "offset must be below 24 hours"))
}

fn two_digits(digits: [u8; 2]) -> Option<i32> {
	if digits.iter().all(u8::is_ascii_digit) {
		Some(((digits[0] - b'0') * 10 + (digits[1] - b'0')) as i32)
	} else {
		None
	}
}

fn invalid(spec: &str, reason: &str) -> zetalite_type::Error {
	TemporalError::InvalidOffset {
		spec: spec.to_string(),
		reason: reason.to_string(),
	}
	.into()
}
