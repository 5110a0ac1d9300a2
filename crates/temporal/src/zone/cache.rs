// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::ResolvedZone;

/// Storage for resolved zones, keyed by the specifier they were resolved from.
pub trait ZoneCache: Send + Sync {
	fn get(&self, key: &str) -> Option<Arc<ResolvedZone>>;

	/// Stores `zone` under `key` unless another zone got there first, and
	/// returns whichever zone the cache now holds for `key`.
	fn insert(&self, key: &str, zone: Arc<ResolvedZone>) -> Arc<ResolvedZone>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// In-memory zone cache. Entries are never evicted.
///
/// Lookups share a read lock; insertions take the write lock only around the
/// map update, never around zone construction or database access.
#[derive(Debug, Default)]
pub struct MemoryZoneCache {
	zones: RwLock<HashMap<String, Arc<ResolvedZone>>>,
}

impl MemoryZoneCache {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ZoneCache for MemoryZoneCache {
	fn get(&self, key: &str) -> Option<Arc<ResolvedZone>> {
		self.zones.read().get(key).cloned()
	}

	fn insert(&self, key: &str, zone: Arc<ResolvedZone>) -> Arc<ResolvedZone> {
		let mut zones = self.zones.write();
		Arc::clone(zones.entry(key.to_string()).or_insert(zone))
	}

	fn len(&self) -> usize {
		self.zones.read().len()
	}
}
