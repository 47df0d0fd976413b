// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Conversion between site time and UTC date strings.
//!
//! Input that cannot be read as a date renders the Unix epoch in the
//! requested format, so callers always get a string of the expected shape.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use lingua_common_i18n::LocaleMetadata;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::date::parse_datetime;
use crate::pattern::{format_date, ZonedTime};
use crate::settings::DateSettings;

pub const DEFAULT_FORMAT: &str = "Y-m-d H:i:s";

static DATETIME_FIELDS: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"([0-9]{1,4})-([0-9]{1,2})-([0-9]{1,2}) ([0-9]{1,2}):([0-9]{1,2}):([0-9]{1,2})").unwrap()
});

/// Convert a site-time date string to UTC.
pub fn get_gmt_from_date(date: &str, format: &str, settings: &DateSettings) -> String {
	let Some(local) = read_datetime(date) else {
		return epoch(format);
	};

	let Some(utc) = settings.to_utc(local) else {
		debug!(date, "date out of range, using the epoch");
		return epoch(format);
	};
	format_date(
		format,
		&ZonedTime::utc(utc.timestamp()),
		LocaleMetadata::english(),
	)
}

/// Convert a UTC date string to site time.
pub fn get_date_from_gmt(date: &str, format: &str, settings: &DateSettings) -> String {
	let Some(utc) = read_datetime(date) else {
		return epoch(format);
	};

	let instant = Utc.from_utc_datetime(&utc);
	let time = match settings.timezone {
		Some(tz) => ZonedTime::in_zone(instant, tz),
		None => ZonedTime::utc(instant.timestamp() + settings.offset_seconds_at(instant)),
	};
	format_date(format, &time, LocaleMetadata::english())
}

/// Read `Y-m-d H:i:s` fields anywhere in `input`, else any known date form.
fn read_datetime(input: &str) -> Option<NaiveDateTime> {
	let parsed = match DATETIME_FIELDS.captures(input) {
		Some(caps) => {
			let field = |i: usize| caps[i].parse::<u32>().ok();
			NaiveDate::from_ymd_opt(caps[1].parse().ok()?, field(2)?, field(3)?)
				.and_then(|day| day.and_hms_opt(field(4)?, field(5)?, field(6)?))
		}
		None => parse_datetime(input),
	};

	if parsed.is_none() {
		debug!(date = input, "unreadable date, using the epoch");
	}
	parsed
}

fn epoch(format: &str) -> String {
	format_date(format, &ZonedTime::utc(0), LocaleMetadata::english())
}
