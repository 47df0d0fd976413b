// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lenient numeric coercion for user-supplied strings.
//!
//! Only the leading numeric part of a string counts. Anything without one is
//! zero, so `"12 items"` is 12 and `"seven"` is 0.

/// Leading decimal or exponent number in `input`, or 0.
pub fn floatval(input: &str) -> f64 {
	let s = input.trim_start();
	let bytes = s.as_bytes();

	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let int_start = end;
	end += count_digits(&bytes[end..]);
	let mut mantissa_digits = end - int_start;

	if bytes.get(end) == Some(&b'.') {
		let fraction = count_digits(&bytes[end + 1..]);
		if mantissa_digits + fraction > 0 {
			mantissa_digits += fraction;
			end += 1 + fraction;
		}
	}

	if mantissa_digits == 0 {
		return 0.0;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exp_end = end + 1;
		if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
			exp_end += 1;
		}
		let exp_digits = count_digits(&bytes[exp_end..]);
		if exp_digits > 0 {
			end = exp_end + exp_digits;
		}
	}

	s[..end].parse().unwrap_or(0.0)
}

/// Leading integer in `input`, or 0. Saturates on overflow.
///
/// Exponents and hex prefixes are not integers: `"1e10"` is 1 and `"0x1A"`
/// is 0.
pub fn intval(input: &str) -> i64 {
	let s = input.trim_start();
	let bytes = s.as_bytes();

	let signed = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let digits = count_digits(&bytes[signed..]);
	if digits == 0 {
		return 0;
	}

	let number = &s[..signed + digits];
	number.parse().unwrap_or(if number.starts_with('-') {
		i64::MIN
	} else {
		i64::MAX
	})
}

/// Non-negative integer part of `value`.
pub fn absint(value: f64) -> u64 {
	(value.trunc() as i64).unsigned_abs()
}

/// Non-negative leading integer of `input`.
pub fn absint_str(input: &str) -> u64 {
	intval(input).unsigned_abs()
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_floatval_prefixes() {
		assert_eq!(floatval("7"), 7.0);
		assert_eq!(floatval("seven"), 0.0);
		assert_eq!(floatval("  3.25 apples"), 3.25);
		assert_eq!(floatval("-0.5"), -0.5);
		assert_eq!(floatval(".5"), 0.5);
		assert_eq!(floatval("1."), 1.0);
		assert_eq!(floatval("1e3"), 1000.0);
		assert_eq!(floatval("2E-2x"), 0.02);
		assert_eq!(floatval("4e"), 4.0);
		assert_eq!(floatval("."), 0.0);
		assert_eq!(floatval("-"), 0.0);
		assert_eq!(floatval(""), 0.0);
	}

	#[test]
	fn test_intval_prefixes() {
		assert_eq!(intval("1_string"), 1);
		assert_eq!(intval("-1"), -1);
		assert_eq!(intval("+42"), 42);
		assert_eq!(intval("1e10"), 1);
		assert_eq!(intval("0x1A"), 0);
		assert_eq!(intval("seven"), 0);
		assert_eq!(intval("3.9"), 3);
		assert_eq!(intval("99999999999999999999"), i64::MAX);
		assert_eq!(intval("-99999999999999999999"), i64::MIN);
	}

	#[test]
	fn test_absint() {
		assert_eq!(absint(0.0), 0);
		assert_eq!(absint(1.0), 1);
		assert_eq!(absint(-1.0), 1);
		assert_eq!(absint(4.999), 4);
		assert_eq!(absint(-4.999), 4);
		#[allow(clippy::excessive_precision)]
		let rounds_up = 4.9999999999999999;
		assert_eq!(absint(rounds_up), 5);
		assert_eq!(absint(1e10), 10_000_000_000);
		assert_eq!(absint(f64::NAN), 0);
	}

	#[test]
	fn test_absint_str() {
		assert_eq!(absint_str("1_string"), 1);
		assert_eq!(absint_str("-1"), 1);
		assert_eq!(absint_str("seven"), 0);
		assert_eq!(absint_str("0x1A"), 0);
		assert_eq!(absint_str("1e10"), 1);
		assert_eq!(absint_str("-99999999999999999999"), 1u64 << 63);
	}

	proptest! {
		#[test]
		fn intval_matches_integer_display(n in any::<i64>(), suffix in "[a-z _]{0,6}") {
			prop_assert_eq!(intval(&format!("{n}{suffix}")), n);
		}

		#[test]
		fn floatval_reads_plain_decimals(n in -1.0e9f64..1.0e9) {
			let text = format!("{n}");
			prop_assert_eq!(floatval(&text), n);
		}
	}
}
