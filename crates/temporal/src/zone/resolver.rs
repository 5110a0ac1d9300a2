// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, instrument};
use zetalite_type::Result;

use crate::{
	TemporalError,
	zone::{IanaZoneDatabase, MemoryZoneCache, ResolvedZone, ZoneCache, ZoneDatabase, parse_offset},
};

static GLOBAL: Lazy<ZoneResolver> = Lazy::new(|| ZoneResolver::new(MemoryZoneCache::new(), IanaZoneDatabase));

/// Resolves `spec` through the process-wide resolver.
pub fn resolve_zone(spec: &str) -> Result<Arc<ResolvedZone>> {
	GLOBAL.resolve(spec)
}

/// Turns zone specifiers as written in SQL (`+09:00`, `-09`,
/// `America/Los_Angeles`) into zones, memoizing every result.
pub struct ZoneResolver<C = MemoryZoneCache, D = IanaZoneDatabase> {
	cache: C,
	database: D,
}

impl Default for ZoneResolver {
	fn default() -> Self {
		Self::new(MemoryZoneCache::new(), IanaZoneDatabase)
	}
}

impl ZoneResolver {
	pub fn global() -> &'static ZoneResolver {
		&GLOBAL
	}
}

impl<C: ZoneCache, D: ZoneDatabase> ZoneResolver<C, D> {
	pub fn new(cache: C, database: D) -> Self {
		Self {
			cache,
			database,
		}
	}

	pub fn cache(&self) -> &C {
		&self.cache
	}

	pub fn database(&self) -> &D {
		&self.database
	}

	/// Resolves `spec`, returning the cached zone when it has been seen before.
	///
	/// Offsets are cached under their canonical `UTC`-prefixed name, named
	/// zones under `spec` itself.
	#[instrument(name = "temporal::zone::resolve", level = "trace", skip(self))]
	pub fn resolve(&self, spec: &str) -> Result<Arc<ResolvedZone>> {
		if let Some(zone) = self.cache.get(spec) {
			return Ok(zone);
		}

		let canonical = if spec.starts_with("UTC") {
			spec.to_string()
		} else {
			format!("UTC{}", spec)
		};

		if let Some(zone) = self.cache.get(&canonical) {
			return Ok(zone);
		}

		if let Some(offset) = parse_offset(spec)? {
			debug!(spec, seconds = offset.local_minus_utc(), "resolved fixed offset zone");
			let zone = Arc::new(ResolvedZone::fixed(canonical.as_str(), offset));
			return Ok(self.cache.insert(&canonical, zone));
		}

		debug!(spec, "loading zone from zone database");
		let tz = self.database.load(spec).map_err(|reason| TemporalError::ZoneLoad {
			spec: spec.to_string(),
			reason,
		})?;

		Ok(self.cache.insert(spec, Arc::new(ResolvedZone::named(spec, tz))))
	}
}
