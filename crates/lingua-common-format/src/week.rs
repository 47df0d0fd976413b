// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{Datelike, NaiveDate, TimeZone, Utc};

use crate::settings::DateSettings;

const DAY_IN_SECONDS: i64 = 86_400;
const WEEK_IN_SECONDS: i64 = 7 * DAY_IN_SECONDS;

/// First and last second of a week, as UTC timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
	pub start: i64,
	pub end: i64,
}

/// The week containing the date part of `mysql_date`.
///
/// Weeks begin on `start_of_week` (0 = Sunday), or on the site setting when
/// none is given. Values past Saturday wrap.
pub fn get_weekstartend(
	mysql_date: &str,
	start_of_week: Option<u32>,
	settings: &DateSettings,
) -> Option<WeekBounds> {
	let date = mysql_date
		.trim()
		.get(..10)
		.and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())?;
	let day = Utc
		.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?)
		.timestamp();

	let start_of_week = i64::from(start_of_week.unwrap_or(settings.start_of_week) % 7);
	let mut weekday = i64::from(date.weekday().num_days_from_sunday());
	if weekday < start_of_week {
		weekday += 7;
	}

	let start = day - DAY_IN_SECONDS * (weekday - start_of_week);
	Some(WeekBounds {
		start,
		end: start + WEEK_IN_SECONDS - 1,
	})
}
