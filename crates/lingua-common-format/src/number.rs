// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lingua_common_i18n::LocaleMetadata;

use crate::numeric::{floatval, intval};

/// Format `number` with the locale's thousands separator and decimal point.
///
/// Rounds half away from zero to `decimals` places.
pub fn number_format_i18n(number: f64, decimals: u32, meta: &LocaleMetadata) -> String {
	let separators = &meta.number_format;
	number_format(
		number,
		decimals,
		&separators.decimal_point,
		&separators.thousands_sep,
	)
}

/// [`number_format_i18n`] for untrusted string input.
///
/// Both arguments are coerced leniently, and negative decimals count as 0.
pub fn number_format_i18n_str(number: &str, decimals: &str, meta: &LocaleMetadata) -> String {
	let decimals = u32::try_from(intval(decimals).max(0)).unwrap_or(u32::MAX);
	number_format_i18n(floatval(number), decimals, meta)
}

/// Group digits and round to a fixed number of decimals.
pub fn number_format(number: f64, decimals: u32, decimal_point: &str, thousands_sep: &str) -> String {
	if !number.is_finite() {
		return number.to_string();
	}

	let decimals = decimals.min(f64::DIGITS * 2) as usize;
	let rounded = round_half_away(number, decimals);
	let negative = rounded < 0.0;

	let digits = format!("{:.*}", decimals, rounded.abs());
	let (integer, fraction) = match digits.split_once('.') {
		Some((integer, fraction)) => (integer, Some(fraction)),
		None => (digits.as_str(), None),
	};

	let mut out = String::with_capacity(digits.len() + integer.len() / 3 * thousands_sep.len() + 1);
	if negative {
		out.push('-');
	}
	for (i, digit) in integer.chars().enumerate() {
		if i > 0 && (integer.len() - i) % 3 == 0 {
			out.push_str(thousands_sep);
		}
		out.push(digit);
	}
	if let Some(fraction) = fraction {
		out.push_str(decimal_point);
		out.push_str(fraction);
	}
	out
}

/// Significant digits kept before the final rounding step.
const PRE_ROUND_DIGITS: usize = 15;

fn round_half_away(number: f64, decimals: usize) -> f64 {
	let factor = 10f64.powi(decimals as i32);
	let scaled = number * factor;
	if !scaled.is_finite() {
		return number;
	}
	// 1.005 * 100 is 100.49999999999999; read it back as 100.5
	let scaled = format!("{:.*e}", PRE_ROUND_DIGITS - 1, scaled)
		.parse::<f64>()
		.unwrap_or(scaled);
	let rounded = scaled.round() / factor;
	// no "-0"
	if rounded == 0.0 {
		0.0
	} else {
		rounded
	}
}
