// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use serde::Deserialize;
use std::path::PathBuf;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub i18n: Option<I18nLayer>,
	#[serde(default)]
	pub time: Option<TimeLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nLayer {
	#[serde(default)]
	pub locale: Option<String>,
	#[serde(default)]
	pub languages_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeLayer {
	#[serde(default)]
	pub timezone_string: Option<String>,
	#[serde(default)]
	pub gmt_offset: Option<f64>,
	#[serde(default)]
	pub start_of_week: Option<u32>,
	#[serde(default)]
	pub date_format: Option<String>,
	#[serde(default)]
	pub time_format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub file: Option<PathBuf>,
	#[serde(default)]
	pub format: Option<String>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.i18n, other.i18n, I18nLayer::merge);
		merge_option(&mut self.time, other.time, TimeLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

impl I18nLayer {
	fn merge(&mut self, other: I18nLayer) {
		if other.locale.is_some() {
			self.locale = other.locale;
		}
		if other.languages_dir.is_some() {
			self.languages_dir = other.languages_dir;
		}
	}
}

impl TimeLayer {
	fn merge(&mut self, other: TimeLayer) {
		if other.timezone_string.is_some() {
			self.timezone_string = other.timezone_string;
		}
		if other.gmt_offset.is_some() {
			self.gmt_offset = other.gmt_offset;
		}
		if other.start_of_week.is_some() {
			self.start_of_week = other.start_of_week;
		}
		if other.date_format.is_some() {
			self.date_format = other.date_format;
		}
		if other.time_format.is_some() {
			self.time_format = other.time_format;
		}
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.file.is_some() {
			self.file = other.file;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}
