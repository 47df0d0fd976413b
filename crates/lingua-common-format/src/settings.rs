// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site time settings resolved for formatting.

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use lingua_common_config::TimeConfig;
use tracing::warn;

use crate::pattern::{naive_from_timestamp, ZonedTime};

const HOUR_IN_SECONDS: f64 = 3600.0;

/// Timezone and calendar preferences.
///
/// A named timezone wins over the fixed `gmt_offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSettings {
	pub timezone: Option<Tz>,
	/// Hours east of UTC.
	pub gmt_offset: f64,
	/// 0 = Sunday ... 6 = Saturday.
	pub start_of_week: u32,
	pub date_format: String,
	pub time_format: String,
}

impl DateSettings {
	pub fn from_config(config: &TimeConfig) -> Self {
		let timezone = config
			.timezone_string
			.as_deref()
			.filter(|name| !name.is_empty())
			.and_then(|name| match name.parse::<Tz>() {
				Ok(tz) => Some(tz),
				Err(_) => {
					warn!(timezone = name, "unknown timezone, using gmt_offset");
					None
				}
			});

		Self {
			timezone,
			gmt_offset: config.gmt_offset,
			start_of_week: config.start_of_week,
			date_format: config.date_format.clone(),
			time_format: config.time_format.clone(),
		}
	}

	/// Seconds to add to UTC to get site time at `instant`.
	pub fn offset_seconds_at(&self, instant: DateTime<Utc>) -> i64 {
		match self.timezone {
			Some(tz) => i64::from(instant.with_timezone(&tz).offset().fix().local_minus_utc()),
			None => self.fixed_offset_seconds(),
		}
	}

	fn fixed_offset_seconds(&self) -> i64 {
		(self.gmt_offset * HOUR_IN_SECONDS).round() as i64
	}

	/// The UTC instant of a site wall-clock time.
	///
	/// Ambiguous times resolve to the earlier instant. Times skipped by a DST
	/// jump are read as UTC. `None` when the shift leaves chrono's range.
	pub fn to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
		let offset = match self.timezone {
			Some(tz) => tz
				.offset_from_local_datetime(&local)
				.earliest()
				.map_or(0, |offset| i64::from(offset.fix().local_minus_utc())),
			None => self.fixed_offset_seconds(),
		};

		local
			.checked_sub_signed(TimeDelta::seconds(offset))
			.map(|utc| Utc.from_utc_datetime(&utc))
	}

	/// A timestamp already shifted to site time, ready for formatting.
	///
	/// Timezone characters report the named zone when one is set, and UTC
	/// otherwise.
	pub fn wall_clock(&self, timestamp: i64) -> ZonedTime {
		let Some(tz) = self.timezone else {
			return ZonedTime::utc(timestamp);
		};

		let local = naive_from_timestamp(timestamp);
		match self.to_utc(local) {
			Some(instant) => ZonedTime::in_zone(instant, tz).with_wall_clock(local, timestamp),
			None => ZonedTime::utc(timestamp),
		}
	}
}

impl Default for DateSettings {
	fn default() -> Self {
		Self::from_config(&TimeConfig::default())
	}
}
