// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Grammatical fixes applied to already formatted dates.

use std::collections::HashMap;

use lingua_common_i18n::LocaleMetadata;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

/// A day number first, then a word: `1 January`, `1. January`.
static DAY_THEN_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}\.? [^\d ]+").unwrap());

static CATALAN_DE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i) de ([ao])").unwrap());

/// Decline month names and apply locale contractions.
///
/// When the locale declines months and `date` starts with a day number, every
/// nominative month name following a space is replaced by its genitive form.
/// Catalan contracts `de` before `a` or `o` (`de agost` becomes `d'agost`).
pub fn wp_maybe_decline_date(date: &str, meta: &LocaleMetadata) -> String {
	let mut date = date.to_string();

	if meta.decline_months && DAY_THEN_MONTH.is_match(&date) {
		date = decline_months(&date, meta);
	}

	if meta.locale == "ca" {
		date = CATALAN_DE.replace_all(&date, " d'${1}").into_owned();
	}

	date
}

fn decline_months(date: &str, meta: &LocaleMetadata) -> String {
	let genitive: HashMap<&str, &str> = meta
		.month
		.iter()
		.zip(meta.month_genitive.iter())
		.map(|(nominative, genitive)| (nominative.as_str(), genitive.as_str()))
		.collect();

	let alternation = meta
		.month
		.iter()
		.map(|month| regex::escape(month))
		.collect::<Vec<_>>()
		.join("|");

	let pattern = match Regex::new(&format!(" ({alternation})( |$)")) {
		Ok(pattern) => pattern,
		Err(e) => {
			warn!(locale = %meta.locale, error = %e, "cannot build month pattern");
			return date.to_string();
		}
	};

	pattern
		.replace_all(date, |caps: &Captures| {
			let month = &caps[1];
			let declined = genitive.get(month).copied().unwrap_or(month);
			format!(" {declined}{}", &caps[2])
		})
		.into_owned()
}
