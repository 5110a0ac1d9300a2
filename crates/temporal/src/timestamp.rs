// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use zetalite_type::Value;

use crate::ResolvedZone;

/// An absolute instant together with the zone it is displayed in.
#[derive(Debug, Clone)]
pub struct Timestamp {
	instant: DateTime<Utc>,
	zone: Arc<ResolvedZone>,
}

impl Timestamp {
	pub fn new(instant: DateTime<Utc>, zone: Arc<ResolvedZone>) -> Self {
		Self {
			instant,
			zone,
		}
	}

	pub fn utc(instant: DateTime<Utc>) -> Self {
		Self::new(instant, Arc::new(ResolvedZone::utc()))
	}

	pub fn from_unix_nanos(nanos: i64, zone: Arc<ResolvedZone>) -> Self {
		Self::new(DateTime::from_timestamp_nanos(nanos), zone)
	}

	/// Nanoseconds since the unix epoch, `None` outside roughly 1677..2262.
	pub fn unix_nanos(&self) -> Option<i64> {
		self.instant.timestamp_nanos_opt()
	}

	pub fn instant(&self) -> DateTime<Utc> {
		self.instant
	}

	pub fn zone(&self) -> &Arc<ResolvedZone> {
		&self.zone
	}

	pub fn offset(&self) -> FixedOffset {
		self.zone.offset_at(&self.instant)
	}

	/// Wall-clock fields as displayed in the attached zone.
	pub fn local(&self) -> NaiveDateTime {
		self.zone.to_local(&self.instant)
	}

	/// The same instant displayed in `zone`.
	pub fn with_zone(&self, zone: Arc<ResolvedZone>) -> Self {
		Self::new(self.instant, zone)
	}
}

impl PartialEq for Timestamp {
	fn eq(&self, other: &Self) -> bool {
		self.instant == other.instant && self.zone.name() == other.zone.name()
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.local().format("%Y-%m-%d %H:%M:%S%.f"), self.offset())
	}
}

impl From<&Timestamp> for Value {
	fn from(timestamp: &Timestamp) -> Self {
		Value::Timestamp(timestamp.instant)
	}
}
