// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	thread,
};

use chrono_tz::Tz;
use zetalite_temporal::{
	IanaZoneDatabase, MemoryZoneCache, ZoneCache, ZoneDatabase, ZoneKind, ZoneResolver, format_wall_clock,
	parse_timestamp, reinterpret_in_zone, resolve_zone,
};

#[derive(Default)]
struct CountingDatabase {
	loads: AtomicUsize,
}

impl CountingDatabase {
	fn loads(&self) -> usize {
		self.loads.load(Ordering::SeqCst)
	}
}

impl ZoneDatabase for CountingDatabase {
	fn load(&self, name: &str) -> Result<Tz, String> {
		self.loads.fetch_add(1, Ordering::SeqCst);
		IanaZoneDatabase.load(name)
	}
}

fn counting_resolver() -> ZoneResolver<MemoryZoneCache, CountingDatabase> {
	ZoneResolver::new(MemoryZoneCache::new(), CountingDatabase::default())
}

#[test]
fn test_fixed_offsets() {
	let resolver = counting_resolver();

	for (spec, seconds) in [("+09", 32400), ("+09:00", 32400), ("-09", -32400), ("-09:00", -32400), ("-09:30", -34200)]
	{
		let zone = resolver.resolve(spec).unwrap();
		assert_eq!(zone.fixed_offset_seconds(), Some(seconds), "{spec}");
		assert_eq!(zone.name(), format!("UTC{spec}"));
	}

	assert_eq!(resolver.database().loads(), 0);
}

#[test]
fn test_unknown_zone_fails() {
	let resolver = counting_resolver();

	let err = resolver.resolve("Not/AZone").unwrap_err();

	assert_eq!(err.code, "TIMEZONE_001");
	assert!(err.message.contains("Not/AZone"));
	assert!(err.cause.is_some());
}

#[test]
fn test_named_zone_loaded_once() {
	let resolver = counting_resolver();

	let first = resolver.resolve("America/Los_Angeles").unwrap();
	let second = resolver.resolve("America/Los_Angeles").unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(first.kind(), ZoneKind::Named(chrono_tz::America::Los_Angeles));
	assert_eq!(resolver.database().loads(), 1);
}

#[test]
fn test_failed_load_is_not_cached() {
	let resolver = counting_resolver();

	assert!(resolver.resolve("Not/AZone").is_err());
	assert!(resolver.resolve("Not/AZone").is_err());

	assert_eq!(resolver.database().loads(), 2);
	assert!(resolver.cache().is_empty());
}

#[test]
fn test_concurrent_resolution_converges() {
	let resolver = counting_resolver();

	let zones: Vec<_> = thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|i| {
				let resolver = &resolver;
				scope.spawn(move || {
					let spec = if i % 2 == 0 {
						"Asia/Tokyo"
					} else {
						"+05:30"
					};
					resolver.resolve(spec).unwrap()
				})
			})
			.collect();
		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});

	let tokyo = resolver.resolve("Asia/Tokyo").unwrap();
	let india = resolver.resolve("+05:30").unwrap();

	for (i, zone) in zones.iter().enumerate() {
		let expected = if i % 2 == 0 {
			&tokyo
		} else {
			&india
		};
		assert!(Arc::ptr_eq(zone, expected));
	}
	assert_eq!(resolver.cache().len(), 2);
}

#[test]
fn test_reinterpret_in_offset_zone() {
	let los_angeles = resolve_zone("America/Los_Angeles").unwrap();
	let original = parse_timestamp("2022-09-10T15:04:05.123456789", los_angeles).unwrap();

	let reinterpreted = reinterpret_in_zone(&original, resolve_zone("+09:00").unwrap()).unwrap();

	assert_eq!(format_wall_clock(&reinterpreted), "2022-09-10T15:04:05.123456789");
	assert_eq!(reinterpreted.local(), original.local());
	assert_ne!(reinterpreted.instant(), original.instant());
	// PDT is UTC-07:00, so the same reading in UTC+09:00 is 16 hours earlier
	assert_eq!(original.instant().signed_duration_since(reinterpreted.instant()).num_hours(), 16);
}

#[test]
fn test_conversion_differs_from_reinterpretation() {
	let utc = resolve_zone("UTC").unwrap();
	let tokyo = resolve_zone("Asia/Tokyo").unwrap();
	let original = parse_timestamp("2022-09-10 15:04:05", utc).unwrap();

	let converted = original.with_zone(Arc::clone(&tokyo));
	let reinterpreted = reinterpret_in_zone(&original, tokyo).unwrap();

	assert_eq!(converted.instant(), original.instant());
	assert_eq!(format_wall_clock(&converted), "2022-09-11T00:04:05");
	assert_eq!(format_wall_clock(&reinterpreted), "2022-09-10T15:04:05");
}
