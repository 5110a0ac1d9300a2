// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono_tz::Tz;

/// Source of named zones such as `America/Los_Angeles`.
pub trait ZoneDatabase: Send + Sync {
	/// Loads the zone called `name`, or describes why it cannot be loaded.
	fn load(&self, name: &str) -> Result<Tz, String>;
}

/// The IANA time zone database compiled into `chrono-tz`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IanaZoneDatabase;

impl ZoneDatabase for IanaZoneDatabase {
	fn load(&self, name: &str) -> Result<Tz, String> {
		name.parse::<Tz>().map_err(|err| err.to_string())
	}
}
