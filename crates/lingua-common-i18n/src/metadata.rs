// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-specific formatting data derived from the active catalogs.
//!
//! Every string is looked up in the `default` domain, so a locale without a
//! core catalog yields the English names.

use once_cell::sync::Lazy;

use crate::locale::{locale_info, Direction, DEFAULT_LOCALE};
use crate::registry::{CatalogRegistry, DEFAULT_DOMAIN};

const WEEKDAYS: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

const MONTH_ABBREVS: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const THOUSANDS_SEP_MSGID: &str = "number_format_thousands_sep";
const DECIMAL_POINT_MSGID: &str = "number_format_decimal_point";

static ENGLISH: Lazy<LocaleMetadata> =
	Lazy::new(|| LocaleMetadata::from_lookup(DEFAULT_LOCALE, |_, msgid| msgid.to_string()));

/// am/pm labels in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meridiem {
	pub am: String,
	pub pm: String,
	pub upper_am: String,
	pub upper_pm: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
	pub thousands_sep: String,
	pub decimal_point: String,
}

impl Default for NumberFormat {
	fn default() -> Self {
		Self {
			thousands_sep: ",".to_string(),
			decimal_point: ".".to_string(),
		}
	}
}

/// Names and separators used when formatting dates and numbers.
///
/// Weekdays are indexed from Sunday (0), months from January (0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMetadata {
	pub locale: String,
	pub weekday: [String; 7],
	pub weekday_initial: [String; 7],
	pub weekday_abbrev: [String; 7],
	pub month: [String; 12],
	pub month_genitive: [String; 12],
	pub month_abbrev: [String; 12],
	pub meridiem: Meridiem,
	pub number_format: NumberFormat,
	pub text_direction: Direction,
	/// Whether month names are declined into the genitive inside dates.
	pub decline_months: bool,
}

impl LocaleMetadata {
	/// Build metadata for `locale` from the registry's `default` domain.
	pub fn build(locale: &str, registry: &CatalogRegistry) -> Self {
		let catalog = registry.translations_for_domain(DEFAULT_DOMAIN);
		Self::from_lookup(locale, |context, msgid| match context {
			Some(context) => catalog.pgettext(context, msgid).to_string(),
			None => catalog.gettext(msgid).to_string(),
		})
	}

	/// Untranslated metadata.
	pub fn english() -> &'static LocaleMetadata {
		&ENGLISH
	}

	fn from_lookup<F>(locale: &str, lookup: F) -> Self
	where
		F: Fn(Option<&str>, &str) -> String,
	{
		let weekday = WEEKDAYS.map(|day| lookup(None, day));
		let weekday_initial: [String; 7] = std::array::from_fn(|i| {
			lookup(
				Some(format!("{} initial", WEEKDAYS[i]).as_str()),
				WEEKDAY_INITIALS[i],
			)
		});
		let weekday_abbrev = WEEKDAY_ABBREVS.map(|day| lookup(None, day));

		let month = MONTHS.map(|name| lookup(None, name));
		let month_genitive = MONTHS.map(|name| lookup(Some("genitive"), name));
		let month_abbrev: [String; 12] = std::array::from_fn(|i| {
			lookup(
				Some(format!("{} abbreviation", MONTHS[i]).as_str()),
				MONTH_ABBREVS[i],
			)
		});

		let meridiem = Meridiem {
			am: lookup(None, "am"),
			pm: lookup(None, "pm"),
			upper_am: lookup(None, "AM"),
			upper_pm: lookup(None, "PM"),
		};

		let defaults = NumberFormat::default();
		let thousands_sep = lookup(None, THOUSANDS_SEP_MSGID);
		let decimal_point = lookup(None, DECIMAL_POINT_MSGID);
		let number_format = NumberFormat {
			thousands_sep: if thousands_sep == THOUSANDS_SEP_MSGID {
				defaults.thousands_sep
			} else {
				thousands_sep
			},
			decimal_point: if decimal_point == DECIMAL_POINT_MSGID {
				defaults.decimal_point
			} else {
				decimal_point
			},
		};

		let text_direction = match lookup(Some("text direction"), "ltr").as_str() {
			"rtl" => Direction::Rtl,
			"ltr" => locale_info(locale)
				.map(|info| info.direction)
				.unwrap_or_default(),
			_ => Direction::Ltr,
		};

		let decline_months = lookup(Some("decline months names: on or off"), "off") == "on";

		Self {
			locale: locale.to_string(),
			weekday,
			weekday_initial,
			weekday_abbrev,
			month,
			month_genitive,
			month_abbrev,
			meridiem,
			number_format,
			text_direction,
			decline_months,
		}
	}

	/// Weekday name, 0 = Sunday.
	pub fn weekday(&self, index: usize) -> Option<&str> {
		self.weekday.get(index).map(String::as_str)
	}

	pub fn weekday_abbrev(&self, index: usize) -> Option<&str> {
		self.weekday_abbrev.get(index).map(String::as_str)
	}

	/// Month name for a 1-based month number.
	pub fn month(&self, number: u32) -> Option<&str> {
		let index = (number as usize).checked_sub(1)?;
		self.month.get(index).map(String::as_str)
	}

	pub fn month_abbrev(&self, number: u32) -> Option<&str> {
		let index = (number as usize).checked_sub(1)?;
		self.month_abbrev.get(index).map(String::as_str)
	}

	pub fn meridiem(&self, pm: bool, upper: bool) -> &str {
		match (pm, upper) {
			(false, false) => &self.meridiem.am,
			(true, false) => &self.meridiem.pm,
			(false, true) => &self.meridiem.upper_am,
			(true, true) => &self.meridiem.upper_pm,
		}
	}

	pub fn is_rtl(&self) -> bool {
		self.text_direction == Direction::Rtl
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lingua_i18n_testing::{LanguageDirFixture, MoBuilder};

	#[test]
	fn test_english_defaults() {
		let meta = LocaleMetadata::english();
		assert_eq!(meta.locale, "en_US");
		assert_eq!(meta.weekday(0), Some("Sunday"));
		assert_eq!(meta.weekday_initial[4], "T");
		assert_eq!(meta.weekday_abbrev(6), Some("Sat"));
		assert_eq!(meta.month(1), Some("January"));
		assert_eq!(meta.month(12), Some("December"));
		assert_eq!(meta.month(0), None);
		assert_eq!(meta.month(13), None);
		assert_eq!(meta.month_genitive[6], "July");
		assert_eq!(meta.month_abbrev(5), Some("May"));
		assert_eq!(meta.meridiem(true, true), "PM");
		assert_eq!(meta.number_format, NumberFormat::default());
		assert!(!meta.is_rtl());
		assert!(!meta.decline_months);
	}

	#[test]
	fn test_build_from_catalog() {
		let fixture = LanguageDirFixture::new();
		let path = fixture.write_core(
			"pl_PL",
			&MoBuilder::new()
				.message("January", "Styczeń")
				.with_context("genitive", "January", "stycznia")
				.with_context("January abbreviation", "Jan", "sty")
				.with_context("Monday initial", "M", "P")
				.message("Sunday", "niedziela")
				.message("number_format_thousands_sep", " ")
				.message("number_format_decimal_point", ",")
				.with_context("decline months names: on or off", "off", "on"),
		);

		let mut registry = CatalogRegistry::default();
		assert!(registry.load_textdomain(DEFAULT_DOMAIN, &path));

		let meta = LocaleMetadata::build("pl_PL", &registry);
		assert_eq!(meta.month(1), Some("Styczeń"));
		assert_eq!(meta.month_genitive[0], "stycznia");
		assert_eq!(meta.month_abbrev(1), Some("sty"));
		assert_eq!(meta.weekday_initial[1], "P");
		assert_eq!(meta.weekday(0), Some("niedziela"));
		// untranslated entries stay English
		assert_eq!(meta.month(2), Some("February"));
		assert_eq!(meta.number_format.thousands_sep, " ");
		assert_eq!(meta.number_format.decimal_point, ",");
		assert!(meta.decline_months);
	}

	#[test]
	fn test_text_direction_from_catalog() {
		let fixture = LanguageDirFixture::new();
		let path = fixture.write_core(
			"fa_IR",
			&MoBuilder::new().with_context("text direction", "ltr", "rtl"),
		);
		let mut registry = CatalogRegistry::default();
		registry.load_textdomain(DEFAULT_DOMAIN, &path);

		assert!(LocaleMetadata::build("fa_IR", &registry).is_rtl());
	}

	#[test]
	fn test_text_direction_falls_back_to_locale_table() {
		let registry = CatalogRegistry::default();
		assert!(LocaleMetadata::build("ar", &registry).is_rtl());
		assert!(!LocaleMetadata::build("es_ES", &registry).is_rtl());
	}
}
