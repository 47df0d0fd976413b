// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use chrono_tz::Tz;
use tracing::warn;

use crate::runtime::LinguaConfig;
use crate::ConfigError;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or ConfigError::InvalidValue with details.
pub fn validate_config(config: &LinguaConfig) -> Result<(), ConfigError> {
	validate_i18n(config)?;
	validate_time(config)?;

	Ok(())
}

/// Checks the `ll`, `lll`, `ll_CC` or `ll_CC_variant` shape of a locale code.
pub fn is_valid_locale_code(locale: &str) -> bool {
	let mut parts = locale.split('_');

	let language = parts.next().unwrap_or_default();
	if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_lowercase()) {
		return false;
	}

	if let Some(region) = parts.next() {
		if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
			return false;
		}
	}

	if let Some(variant) = parts.next() {
		if variant.is_empty()
			|| !variant
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
		{
			return false;
		}
	}

	parts.next().is_none()
}

fn validate_i18n(config: &LinguaConfig) -> Result<(), ConfigError> {
	if !is_valid_locale_code(&config.i18n.locale) {
		return Err(ConfigError::invalid_value(
			"i18n.locale",
			format!("'{}' is not a locale code like en_US", config.i18n.locale),
		));
	}

	if !config.i18n.languages_dir.exists() {
		// Not fatal: a missing directory means only the built-in locale is available
		warn!(
				languages_dir = %config.i18n.languages_dir.display(),
				"languages directory does not exist"
		);
	}

	Ok(())
}

fn validate_time(config: &LinguaConfig) -> Result<(), ConfigError> {
	let time = &config.time;

	if let Some(ref tz) = time.timezone_string {
		if tz.parse::<Tz>().is_err() {
			return Err(ConfigError::invalid_value(
				"time.timezone_string",
				format!("'{tz}' is not a known IANA timezone"),
			));
		}
	}

	if !(-12.0..=14.0).contains(&time.gmt_offset) {
		return Err(ConfigError::invalid_value(
			"time.gmt_offset",
			"must be between -12 and 14 hours",
		));
	}

	if time.start_of_week > 6 {
		return Err(ConfigError::invalid_value(
			"time.start_of_week",
			"must be between 0 (Sunday) and 6 (Saturday)",
		));
	}

	if time.date_format.is_empty() {
		return Err(ConfigError::invalid_value(
			"time.date_format",
			"cannot be empty",
		));
	}

	Ok(())
}
