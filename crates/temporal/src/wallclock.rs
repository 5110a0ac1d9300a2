// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tracing::instrument;
use zetalite_type::Result;

use crate::{ResolvedZone, TemporalError, Timestamp};

const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const SPACED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders the wall-clock fields of `timestamp` without any zone information,
/// e.g. `2022-09-10T15:04:05.123456789`. Trailing zeros of the fraction are
/// dropped, and so is the fraction when it is zero.
pub fn format_wall_clock(timestamp: &Timestamp) -> String {
	let local = timestamp.local();
	let mut text = local.format("%Y-%m-%dT%H:%M:%S").to_string();

	let nanos = local.nanosecond();
	if nanos != 0 {
		let fraction = format!("{:09}", nanos);
		text.push('.');
		text.push_str(fraction.trim_end_matches('0'));
	}
	text
}

/// Keeps the displayed wall-clock fields of `timestamp` and reads them in
/// `zone`, yielding a different instant unless both zones agree on the offset.
#[instrument(name = "temporal::reinterpret_in_zone", level = "trace", skip_all, fields(zone = zone.name()))]
pub fn reinterpret_in_zone(timestamp: &Timestamp, zone: Arc<ResolvedZone>) -> Result<Timestamp> {
	let text = format_wall_clock(timestamp);

	let local = NaiveDateTime::parse_from_str(&text, WALL_CLOCK_FORMAT).map_err(|err| TemporalError::Formatting {
		text: text.clone(),
		reason: err.to_string(),
	})?;

	let instant = zone.from_local(&local).ok_or_else(|| TemporalError::Formatting {
		text,
		reason: format!("wall clock is not representable in zone {}", zone.name()),
	})?;

	Ok(Timestamp::new(instant, zone))
}

/// Parses a zone-less timestamp literal and anchors it in `zone`.
pub fn parse_timestamp(text: &str, zone: Arc<ResolvedZone>) -> Result<Timestamp> {
	let trimmed = text.trim();

	let local = parse_local(trimmed).ok_or_else(|| TemporalError::InvalidTimestamp {
		text: text.to_string(),
		reason: "expected YYYY-MM-DD[( |T)HH:MM:SS[.fffffffff]]".to_string(),
	})?;

	let instant = zone.from_local(&local).ok_or_else(|| TemporalError::InvalidTimestamp {
		text: text.to_string(),
		reason: format!("out of range in zone {}", zone.name()),
	})?;

	Ok(Timestamp::new(instant, zone))
}

fn parse_local(text: &str) -> Option<NaiveDateTime> {
	if let Ok(local) = NaiveDateTime::parse_from_str(text, WALL_CLOCK_FORMAT) {
		return Some(local);
	}
	if let Ok(local) = NaiveDateTime::parse_from_str(text, SPACED_FORMAT) {
		return Some(local);
	}
	NaiveDate::parse_from_str(text, DATE_FORMAT).ok().and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
	use chrono::FixedOffset;

	use super::*;

	fn zone(seconds: i32) -> Arc<ResolvedZone> {
		Arc::new(ResolvedZone::fixed("test", FixedOffset::east_opt(seconds).unwrap()))
	}

	fn utc() -> Arc<ResolvedZone> {
		Arc::new(ResolvedZone::utc())
	}

	#[test]
	fn test_format_full_precision() {
		let ts = parse_timestamp("2022-09-10T15:04:05.123456789", utc()).unwrap();
		assert_eq!(format_wall_clock(&ts), "2022-09-10T15:04:05.123456789");
	}

	#[test]
	fn test_format_trims_fraction() {
		let ts = parse_timestamp("2022-09-10 15:04:05.120", utc()).unwrap();
		assert_eq!(format_wall_clock(&ts), "2022-09-10T15:04:05.12");

		let ts = parse_timestamp("2022-09-10 15:04:05", utc()).unwrap();
		assert_eq!(format_wall_clock(&ts), "2022-09-10T15:04:05");
	}

	#[test]
	fn test_parse_date_only() {
		let ts = parse_timestamp("2022-09-10", zone(3600)).unwrap();
		assert_eq!(format_wall_clock(&ts), "2022-09-10T00:00:00");
		assert_eq!(ts.unix_nanos(), Some(1_662_764_400_000_000_000));
	}

	#[test]
	fn test_parse_invalid() {
		for text in ["", "2022-13-01", "10/09/2022", "2022-09-10T25:00:00", "2022-09-10 15:04"] {
			let err = parse_timestamp(text, utc()).unwrap_err();
			assert_eq!(err.code, "TEMPORAL_002", "{text}");
		}
	}

	#[test]
	fn test_reinterpret_keeps_fields_and_moves_instant() {
		let original = parse_timestamp("2022-09-10T15:04:05.123456789", utc()).unwrap();

		let reinterpreted = reinterpret_in_zone(&original, zone(9 * 3600)).unwrap();

		assert_eq!(reinterpreted.local(), original.local());
		assert_eq!(
			original.instant().signed_duration_since(reinterpreted.instant()).num_seconds(),
			9 * 3600
		);
	}

	#[test]
	fn test_reinterpret_in_same_zone_is_identity() {
		let original = parse_timestamp("2022-09-10T15:04:05.5", zone(-3 * 3600)).unwrap();

		let reinterpreted = reinterpret_in_zone(&original, Arc::clone(original.zone())).unwrap();

		assert_eq!(reinterpreted, original);
	}
}
