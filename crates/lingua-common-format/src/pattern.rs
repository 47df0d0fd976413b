// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Date pattern rendering.
//!
//! Patterns use the single-letter date format characters found in site
//! settings (`F j, Y`, `g:i a`, ...). A backslash emits the next character
//! literally; characters with no meaning are copied through.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::{OffsetComponents, Tz};
use lingua_common_i18n::LocaleMetadata;

const ISO8601: &str = "Y-m-d\\TH:i:sP";
const RFC2822: &str = "D, d M Y H:i:s O";

/// A wall-clock time plus the zone facts the timezone characters report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedTime {
	pub local: NaiveDateTime,
	/// Value emitted for `U`.
	pub timestamp: i64,
	pub offset_seconds: i32,
	pub abbreviation: String,
	pub identifier: String,
	pub dst: bool,
}

impl ZonedTime {
	/// `timestamp` read as UTC wall-clock time.
	pub fn utc(timestamp: i64) -> Self {
		Self {
			local: naive_from_timestamp(timestamp),
			timestamp,
			offset_seconds: 0,
			abbreviation: "GMT".to_string(),
			identifier: "UTC".to_string(),
			dst: false,
		}
	}

	/// `instant` as seen in `tz`.
	pub fn in_zone(instant: DateTime<Utc>, tz: Tz) -> Self {
		let zoned = instant.with_timezone(&tz);
		let offset = zoned.offset();
		Self {
			local: zoned.naive_local(),
			timestamp: instant.timestamp(),
			offset_seconds: offset.fix().local_minus_utc(),
			abbreviation: offset.to_string(),
			identifier: tz.name().to_string(),
			dst: offset.dst_offset().num_seconds() != 0,
		}
	}

	/// Keep the zone facts but show a different wall clock.
	pub fn with_wall_clock(self, local: NaiveDateTime, timestamp: i64) -> Self {
		Self {
			local,
			timestamp,
			..self
		}
	}
}

/// Out-of-range timestamps clamp to the epoch.
pub(crate) fn naive_from_timestamp(timestamp: i64) -> NaiveDateTime {
	DateTime::from_timestamp(timestamp, 0)
		.unwrap_or_default()
		.naive_utc()
}

/// Render `pattern` for `time`, taking names from `meta`.
pub fn format_date(pattern: &str, time: &ZonedTime, meta: &LocaleMetadata) -> String {
	let local = &time.local;
	let mut out = String::with_capacity(pattern.len() * 2);
	let mut chars = pattern.chars();

	while let Some(c) = chars.next() {
		match c {
			'\\' => {
				if let Some(escaped) = chars.next() {
					out.push(escaped);
				}
			}

			// day
			'd' => out.push_str(&format!("{:02}", local.day())),
			'D' => out.push_str(
				meta
					.weekday_abbrev(local.weekday().num_days_from_sunday() as usize)
					.unwrap_or_default(),
			),
			'j' => out.push_str(&local.day().to_string()),
			'l' => out.push_str(
				meta
					.weekday(local.weekday().num_days_from_sunday() as usize)
					.unwrap_or_default(),
			),
			'N' => out.push_str(&local.weekday().number_from_monday().to_string()),
			'S' => out.push_str(ordinal_suffix(local.day())),
			'w' => out.push_str(&local.weekday().num_days_from_sunday().to_string()),
			'z' => out.push_str(&local.ordinal0().to_string()),

			// week
			'W' => out.push_str(&format!("{:02}", local.iso_week().week())),

			// month
			'F' => out.push_str(meta.month(local.month()).unwrap_or_default()),
			'm' => out.push_str(&format!("{:02}", local.month())),
			'M' => out.push_str(meta.month_abbrev(local.month()).unwrap_or_default()),
			'n' => out.push_str(&local.month().to_string()),
			't' => out.push_str(&days_in_month(local.year(), local.month()).to_string()),

			// year
			'L' => out.push_str(if is_leap_year(local.year()) { "1" } else { "0" }),
			'o' => out.push_str(&local.iso_week().year().to_string()),
			'Y' => out.push_str(&format!("{:04}", local.year())),
			'y' => out.push_str(&format!("{:02}", local.year().rem_euclid(100))),

			// time
			'a' => out.push_str(meta.meridiem(local.hour() >= 12, false)),
			'A' => out.push_str(meta.meridiem(local.hour() >= 12, true)),
			'B' => out.push_str(&format!("{:03}", swatch_beat(time))),
			'g' => out.push_str(&hour12(local.hour()).to_string()),
			'G' => out.push_str(&local.hour().to_string()),
			'h' => out.push_str(&format!("{:02}", hour12(local.hour()))),
			'H' => out.push_str(&format!("{:02}", local.hour())),
			'i' => out.push_str(&format!("{:02}", local.minute())),
			's' => out.push_str(&format!("{:02}", local.second())),
			'u' => out.push_str("000000"),
			'v' => out.push_str("000"),

			// timezone
			'e' => out.push_str(&time.identifier),
			'I' => out.push_str(if time.dst { "1" } else { "0" }),
			'O' => out.push_str(&offset_string(time.offset_seconds, false)),
			'P' => out.push_str(&offset_string(time.offset_seconds, true)),
			'p' if time.offset_seconds == 0 => out.push('Z'),
			'p' => out.push_str(&offset_string(time.offset_seconds, true)),
			'T' => out.push_str(&time.abbreviation),
			'Z' => out.push_str(&time.offset_seconds.to_string()),

			// full date/time, never localized
			'c' => out.push_str(&format_date(ISO8601, time, LocaleMetadata::english())),
			'r' => out.push_str(&format_date(RFC2822, time, LocaleMetadata::english())),
			'U' => out.push_str(&time.timestamp.to_string()),

			other => out.push(other),
		}
	}

	out
}

fn ordinal_suffix(day: u32) -> &'static str {
	match day {
		1 | 21 | 31 => "st",
		2 | 22 => "nd",
		3 | 23 => "rd",
		_ => "th",
	}
}

fn hour12(hour: u32) -> u32 {
	match hour % 12 {
		0 => 12,
		h => h,
	}
}

fn is_leap_year(year: i32) -> bool {
	NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
	let (next_year, next_month) = if month == 12 {
		(year + 1, 1)
	} else {
		(year, month + 1)
	};
	NaiveDate::from_ymd_opt(next_year, next_month, 1)
		.and_then(|first| first.pred_opt())
		.map(|last| last.day())
		.unwrap_or(31)
}

/// Swatch Internet time, measured against UTC+1.
fn swatch_beat(time: &ZonedTime) -> i64 {
	let utc = Utc.from_utc_datetime(&time.local).timestamp() - i64::from(time.offset_seconds);
	(utc + 3600).rem_euclid(86_400) * 1000 / 86_400
}

fn offset_string(seconds: i32, colon: bool) -> String {
	let sign = if seconds < 0 { '-' } else { '+' };
	let minutes = seconds.unsigned_abs() / 60;
	let (hours, minutes) = (minutes / 60, minutes % 60);
	if colon {
		format!("{sign}{hours:02}:{minutes:02}")
	} else {
		format!("{sign}{hours:02}{minutes:02}")
	}
}
