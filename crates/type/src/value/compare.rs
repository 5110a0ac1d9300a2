// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::{
	Value,
	error::{CompareOp, Result, TypeError},
};

/// Orders two floats the way `ORDER BY` does: NaN equals NaN and sorts before
/// every other float, and the two zeros are equal.
#[inline]
pub fn compare_float(l: f64, r: f64) -> Ordering {
	match (l.is_nan(), r.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Less,
		(false, true) => Ordering::Greater,
		(false, false) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
	}
}

/// Compares an integer with a float without rounding the integer, so values
/// beyond 2^53 keep a transitive ordering. NaN sorts before every integer.
fn compare_int_float(l: i64, r: f64) -> Ordering {
	// 2^63, the first float above i64::MAX
	const LIMIT: f64 = 9_223_372_036_854_775_808.0;

	if r.is_nan() {
		return Ordering::Greater;
	}
	if r >= LIMIT {
		return Ordering::Less;
	}
	if r < -LIMIT {
		return Ordering::Greater;
	}

	let whole = r.trunc();
	match l.cmp(&(whole as i64)) {
		Ordering::Equal => compare_float(0.0, r - whole),
		ordering => ordering,
	}
}

impl Value {
	/// Compares two values of compatible kinds.
	///
	/// Returns `Ok(None)` when either side is null, and an error when both are
	/// non-null but their kinds cannot be ordered against each other.
	pub fn compare(&self, other: &Value, operator: CompareOp) -> Result<Option<Ordering>> {
		let ordering = match (self, other) {
			(Value::Null, _) | (_, Value::Null) => return Ok(None),
			(Value::Boolean(l), Value::Boolean(r)) => l.cmp(r),
			(Value::Int64(l), Value::Int64(r)) => l.cmp(r),
			(Value::Float64(l), Value::Float64(r)) => compare_float(*l, *r),
			(Value::Int64(l), Value::Float64(r)) => compare_int_float(*l, *r),
			(Value::Float64(l), Value::Int64(r)) => compare_int_float(*r, *l).reverse(),
			(Value::String(l), Value::String(r)) => l.cmp(r),
			(Value::Bytes(l), Value::Bytes(r)) => l.cmp(r),
			(Value::Date(l), Value::Date(r)) => l.cmp(r),
			(Value::Datetime(l), Value::Datetime(r)) => l.cmp(r),
			(Value::Time(l), Value::Time(r)) => l.cmp(r),
			(Value::Timestamp(l), Value::Timestamp(r)) => l.cmp(r),
			(left, right) => {
				return Err(TypeError::Incomparable {
					operator,
					left: left.get_type(),
					right: right.get_type(),
				}
				.into());
			}
		};
		Ok(Some(ordering))
	}

	#[inline]
	pub fn is_equal(&self, other: &Value) -> Result<bool> {
		Ok(self.compare(other, CompareOp::Equal)?.is_some_and(|o| o == Ordering::Equal))
	}

	#[inline]
	pub fn is_less_than(&self, other: &Value) -> Result<bool> {
		Ok(self.compare(other, CompareOp::LessThan)?.is_some_and(|o| o == Ordering::Less))
	}

	#[inline]
	pub fn is_greater_than(&self, other: &Value) -> Result<bool> {
		Ok(self.compare(other, CompareOp::GreaterThan)?.is_some_and(|o| o == Ordering::Greater))
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::Type;

	#[test]
	fn test_int_ordering() {
		let one = Value::int64(1);
		let two = Value::int64(2);
		assert!(one.is_less_than(&two).unwrap());
		assert!(two.is_greater_than(&one).unwrap());
		assert!(!one.is_equal(&two).unwrap());
		assert!(one.is_equal(&Value::int64(1)).unwrap());
	}

	#[test]
	fn test_int_float_promotion() {
		assert!(Value::int64(2).is_equal(&Value::float64(2.0)).unwrap());
		assert!(Value::float64(1.5).is_less_than(&Value::int64(2)).unwrap());
		assert!(Value::int64(3).is_greater_than(&Value::float64(2.5)).unwrap());
	}

	#[test]
	fn test_int_float_exact_beyond_2_pow_53() {
		let base = 1i64 << 53;
		let int = Value::int64(base);
		let float = Value::float64(base as f64);
		let next = Value::int64(base + 1);

		assert!(int.is_equal(&float).unwrap());
		assert!(!float.is_equal(&next).unwrap());
		assert!(float.is_less_than(&next).unwrap());
		assert!(next.is_greater_than(&float).unwrap());
		assert!(int.is_less_than(&next).unwrap());
	}

	#[test]
	fn test_int_float_fraction_and_bounds() {
		assert_eq!(compare_int_float(2, 2.5), Ordering::Less);
		assert_eq!(compare_int_float(-2, -2.5), Ordering::Greater);
		assert_eq!(compare_int_float(-3, -2.5), Ordering::Less);
		assert_eq!(compare_int_float(0, -0.0), Ordering::Equal);
		assert_eq!(compare_int_float(i64::MAX, 9_223_372_036_854_775_808.0), Ordering::Less);
		assert_eq!(compare_int_float(i64::MIN, -9_223_372_036_854_775_808.0), Ordering::Equal);
		assert_eq!(compare_int_float(i64::MIN, f64::NEG_INFINITY), Ordering::Greater);
		assert_eq!(compare_int_float(i64::MAX, f64::INFINITY), Ordering::Less);
		assert_eq!(compare_int_float(i64::MIN, f64::NAN), Ordering::Greater);
	}

	#[test]
	fn test_nan_sorts_first_and_equals_itself() {
		let nan = Value::float64(f64::NAN);
		assert!(nan.is_equal(&Value::float64(f64::NAN)).unwrap());
		assert!(nan.is_less_than(&Value::float64(f64::NEG_INFINITY)).unwrap());
		assert!(!nan.is_greater_than(&Value::float64(0.0)).unwrap());
	}

	#[test]
	fn test_signed_zeros_are_equal() {
		assert!(Value::float64(-0.0).is_equal(&Value::float64(0.0)).unwrap());
	}

	#[test]
	fn test_strings_and_bytes() {
		assert!(Value::string("apple").is_less_than(&Value::string("banana")).unwrap());
		assert!(Value::bytes(vec![0u8, 2]).is_greater_than(&Value::bytes(vec![0u8, 1])).unwrap());
	}

	#[test]
	fn test_dates() {
		let earlier = Value::date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
		let later = Value::date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
		assert!(earlier.is_less_than(&later).unwrap());
	}

	#[test]
	fn test_null_is_never_true() {
		let null = Value::null();
		let one = Value::int64(1);
		assert!(!null.is_equal(&null).unwrap());
		assert!(!null.is_less_than(&one).unwrap());
		assert!(!one.is_greater_than(&null).unwrap());
		assert_eq!(null.compare(&Value::string("x"), CompareOp::Equal).unwrap(), None);
	}

	#[test]
	fn test_incomparable_kinds_fail() {
		let err = Value::int64(1).is_less_than(&Value::string("1")).unwrap_err();
		assert_eq!(err.code, "COMPARE_001");
		assert!(err.message.contains("'<'"));
		assert!(err.message.contains("INT64"));
		assert!(err.message.contains("STRING"));
	}

	#[test]
	fn test_incomparable_reports_operator() {
		let err = Value::bool(true).is_equal(&Value::int64(1)).unwrap_err();
		assert!(err.message.contains("'='"));
		assert_eq!(Value::bool(true).get_type(), Type::Boolean);
	}
}
