// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Known locales and their text direction.

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
	/// Left-to-right (e.g., English, Spanish)
	#[default]
	Ltr,
	/// Right-to-left (e.g., Arabic, Hebrew)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Metadata about a known locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// Locale code as used for catalog file names (e.g., "en_US", "ca")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	/// Text direction
	pub direction: Direction,
}

/// Locale every installation supports without a catalog.
pub const DEFAULT_LOCALE: &str = lingua_common_config::DEFAULT_LOCALE;

/// Locales with known names and directions.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en_US",
		name: "English (United States)",
		native_name: "English (United States)",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "en_GB",
		name: "English (UK)",
		native_name: "English (UK)",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "es_ES",
		name: "Spanish (Spain)",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fr_FR",
		name: "French (France)",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "de_DE",
		name: "German",
		native_name: "Deutsch",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ca",
		name: "Catalan",
		native_name: "Català",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "pl_PL",
		name: "Polish",
		native_name: "Polski",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "hr",
		name: "Croatian",
		native_name: "Hrvatski",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "pt_BR",
		name: "Portuguese (Brazil)",
		native_name: "Português do Brasil",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "it_IT",
		name: "Italian",
		native_name: "Italiano",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ru_RU",
		name: "Russian",
		native_name: "Русский",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ja",
		name: "Japanese",
		native_name: "日本語",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "he_IL",
		name: "Hebrew",
		native_name: "עִבְרִית",
		direction: Direction::Rtl,
	},
];

/// Get metadata for a locale.
///
/// Returns `None` if the locale is not in the table.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Check if a locale uses right-to-left text direction.
///
/// Returns `false` for unknown locales.
pub fn is_rtl(locale: &str) -> bool {
	locale_info(locale).is_some_and(|info| info.direction == Direction::Rtl)
}

pub fn is_known_locale(locale: &str) -> bool {
	LOCALES.iter().any(|l| l.code == locale)
}
