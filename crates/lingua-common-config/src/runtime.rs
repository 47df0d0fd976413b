// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layer::*;
use crate::paths::PathsConfig;

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en_US";

/// The final, validated configuration for Lingua.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinguaConfig {
	pub i18n: I18nConfig,
	pub time: TimeConfig,
	pub logging: LoggingConfig,

	/// Resolved XDG paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
	/// Base locale for the process.
	pub locale: String,
	/// Directory holding `<locale>.mo` and `plugins/<domain>-<locale>.mo`.
	pub languages_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
	/// IANA zone name; takes priority over `gmt_offset` when set.
	pub timezone_string: Option<String>,
	/// Offset from UTC in hours.
	pub gmt_offset: f64,
	/// 0 = Sunday ... 6 = Saturday.
	pub start_of_week: u32,
	pub date_format: String,
	pub time_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub file: Option<PathBuf>,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			locale: DEFAULT_LOCALE.to_string(),
			languages_dir: PathsConfig::default().languages_dir(),
		}
	}
}

impl Default for TimeConfig {
	fn default() -> Self {
		Self {
			timezone_string: None,
			gmt_offset: 0.0,
			start_of_week: 1,
			date_format: "F j, Y".to_string(),
			time_format: "g:i a".to_string(),
		}
	}
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: LogLevel::Info,
			file: None,
			format: LogFormat::Pretty,
		}
	}
}

impl LinguaConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Self {
		let i18n = build_i18n_config(layer.i18n, &paths);
		let time = build_time_config(layer.time);
		let logging = build_logging_config(layer.logging);

		Self {
			i18n,
			time,
			logging,
			paths,
		}
	}
}

fn build_i18n_config(layer: Option<I18nLayer>, paths: &PathsConfig) -> I18nConfig {
	let layer = layer.unwrap_or_default();
	I18nConfig {
		locale: layer.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
		languages_dir: layer
			.languages_dir
			.unwrap_or_else(|| paths.languages_dir()),
	}
}

fn build_time_config(layer: Option<TimeLayer>) -> TimeConfig {
	let layer = layer.unwrap_or_default();
	let defaults = TimeConfig::default();
	TimeConfig {
		timezone_string: layer.timezone_string.filter(|tz| !tz.is_empty()),
		gmt_offset: layer.gmt_offset.unwrap_or(defaults.gmt_offset),
		start_of_week: layer.start_of_week.unwrap_or(defaults.start_of_week),
		date_format: layer.date_format.unwrap_or(defaults.date_format),
		time_format: layer.time_format.unwrap_or(defaults.time_format),
	}
}

fn build_logging_config(layer: Option<LoggingLayer>) -> LoggingConfig {
	let layer = layer.unwrap_or_default();
	LoggingConfig {
		level: parse_log_level(layer.level.as_deref()),
		file: layer.file,
		format: parse_log_format(layer.format.as_deref()),
	}
}

fn parse_log_level(s: Option<&str>) -> LogLevel {
	match s {
		Some("error") => LogLevel::Error,
		Some("warn") => LogLevel::Warn,
		Some("info") => LogLevel::Info,
		Some("debug") => LogLevel::Debug,
		Some("trace") => LogLevel::Trace,
		_ => LogLevel::Info,
	}
}

fn parse_log_format(s: Option<&str>) -> LogFormat {
	match s {
		Some("json") => LogFormat::Json,
		Some("compact") => LogFormat::Compact,
		Some("pretty") => LogFormat::Pretty,
		_ => LogFormat::Pretty,
	}
}
