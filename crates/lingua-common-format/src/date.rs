// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized dates and site time.
//!
//! Timestamps passed to [`date_i18n`] are already shifted to site time: they
//! are rendered as if they were UTC wall-clock seconds.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use lingua_common_i18n::LocaleMetadata;
use tracing::debug;

use crate::pattern::{format_date, ZonedTime};
use crate::settings::DateSettings;

const MYSQL_FORMAT: &str = "Y-m-d H:i:s";

const DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M:%S",
	"%Y/%m/%d %H:%M:%S",
	"%B %d, %Y, %I:%M %p",
	"%B %d, %Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Format a site-time timestamp with localized names.
///
/// Without a timestamp the current time is used: site time, or UTC when
/// `gmt` is set.
pub fn date_i18n(
	format: &str,
	timestamp: Option<i64>,
	gmt: bool,
	settings: &DateSettings,
	meta: &LocaleMetadata,
) -> String {
	let timestamp = timestamp.unwrap_or_else(|| {
		let now = Utc::now();
		if gmt {
			now.timestamp()
		} else {
			now.timestamp() + settings.offset_seconds_at(now)
		}
	});

	format_date(format, &settings.wall_clock(timestamp), meta)
}

/// Reformat a stored date string.
///
/// `G` and `U` return the Unix timestamp of `date` read as UTC. Other
/// formats are rendered with localized names when `translate` is set and in
/// English otherwise. Empty or unparseable dates give `None`.
pub fn mysql2date(
	format: &str,
	date: &str,
	translate: bool,
	settings: &DateSettings,
	meta: &LocaleMetadata,
) -> Option<String> {
	if date.trim().is_empty() {
		return None;
	}

	let Some(local) = parse_datetime(date) else {
		debug!(date, "unparseable date");
		return None;
	};
	let timestamp = Utc.from_utc_datetime(&local).timestamp();

	Some(match format {
		"G" | "U" => timestamp.to_string(),
		_ if translate => date_i18n(format, Some(timestamp), false, settings, meta),
		_ => format_date(format, &settings.wall_clock(timestamp), LocaleMetadata::english()),
	})
}

/// Parse a stored date or date-time. Dates alone are read as midnight.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
	let input = input.trim();

	DATETIME_FORMATS
		.iter()
		.find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
		.or_else(|| {
			DATE_FORMATS
				.iter()
				.find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
				.and_then(|date| date.and_hms_opt(0, 0, 0))
		})
}

/// Result of [`current_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentTime {
	Timestamp(i64),
	Formatted(String),
}

impl fmt::Display for CurrentTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Timestamp(ts) => write!(f, "{ts}"),
			Self::Formatted(s) => f.write_str(s),
		}
	}
}

/// The current time as `mysql`, `timestamp` or any date pattern.
pub fn current_time(kind: &str, gmt: bool, settings: &DateSettings) -> CurrentTime {
	current_time_at(Utc::now(), kind, gmt, settings)
}

/// [`current_time`] for a given instant. Patterns are rendered in English.
pub fn current_time_at(
	now: DateTime<Utc>,
	kind: &str,
	gmt: bool,
	settings: &DateSettings,
) -> CurrentTime {
	let offset = if gmt {
		0
	} else {
		settings.offset_seconds_at(now)
	};
	let timestamp = now.timestamp() + offset;

	match kind {
		"timestamp" => CurrentTime::Timestamp(timestamp),
		"mysql" => CurrentTime::Formatted(format_date(
			MYSQL_FORMAT,
			&ZonedTime::utc(timestamp),
			LocaleMetadata::english(),
		)),
		pattern => CurrentTime::Formatted(format_date(
			pattern,
			&ZonedTime::utc(timestamp),
			LocaleMetadata::english(),
		)),
	}
}
