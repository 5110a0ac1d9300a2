// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

mod cache;
mod database;
mod offset;
mod resolver;

pub use cache::{MemoryZoneCache, ZoneCache};
pub use database::{IanaZoneDatabase, ZoneDatabase};
pub use offset::parse_offset;
pub use resolver::{ZoneResolver, resolve_zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
	/// A constant offset from UTC
	Fixed(FixedOffset),
	/// A zone database entry with its transition rules
	Named(Tz),
}

/// A time zone able to project instants to local wall-clock fields and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedZone {
	name: String,
	kind: ZoneKind,
}

impl ResolvedZone {
	pub fn fixed(name: impl Into<String>, offset: FixedOffset) -> Self {
		Self {
			name: name.into(),
			kind: ZoneKind::Fixed(offset),
		}
	}

	pub fn named(name: impl Into<String>, tz: Tz) -> Self {
		Self {
			name: name.into(),
			kind: ZoneKind::Named(tz),
		}
	}

	pub fn utc() -> Self {
		Self::fixed("UTC", Utc.fix())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> ZoneKind {
		self.kind
	}

	pub fn fixed_offset_seconds(&self) -> Option<i32> {
		match self.kind {
			ZoneKind::Fixed(offset) => Some(offset.local_minus_utc()),
			ZoneKind::Named(_) => None,
		}
	}

	/// The offset from UTC in effect at `instant`.
	pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
		match self.kind {
			ZoneKind::Fixed(offset) => offset,
			ZoneKind::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
		}
	}

	/// Wall-clock fields of `instant` as displayed in this zone.
	pub fn to_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
		instant.with_timezone(&self.offset_at(instant)).naive_local()
	}

	/// The instant at which this zone displays `local`.
	///
	/// Ambiguous readings take the earlier instant. Readings inside a forward
	/// transition gap use the offset in effect before the gap. Returns `None`
	/// only when the result is outside the representable range.
	pub fn from_local(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
		match self.kind {
			ZoneKind::Fixed(offset) => offset.from_local_datetime(local).single().map(|dt| dt.with_timezone(&Utc)),
			ZoneKind::Named(tz) => {
				if let Some(dt) = tz.from_local_datetime(local).earliest() {
					return Some(dt.with_timezone(&Utc));
				}
				let probe = local.checked_sub_signed(TimeDelta::days(1))?;
				let before = tz.offset_from_utc_datetime(&probe).fix();
				before.from_local_datetime(local).single().map(|dt| dt.with_timezone(&Utc))
			}
		}
	}
}

impl Display for ResolvedZone {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.name)
	}
}
