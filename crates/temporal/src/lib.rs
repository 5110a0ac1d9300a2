// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Time zone resolution and wall-clock handling for date/time functions.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod error;
mod timestamp;
mod wallclock;
pub mod zone;

pub use error::TemporalError;
pub use timestamp::Timestamp;
pub use wallclock::{format_wall_clock, parse_timestamp, reinterpret_in_zone};
pub use zone::{
	IanaZoneDatabase, MemoryZoneCache, ResolvedZone, ZoneCache, ZoneDatabase, ZoneKind, ZoneResolver, parse_offset,
	resolve_zone,
};
