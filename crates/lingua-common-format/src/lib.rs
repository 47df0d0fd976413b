// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware formatting for Lingua.
//!
//! Dates and numbers are rendered with the names and separators of a
//! [`LocaleMetadata`], typically the one published by the i18n runtime for
//! the current locale. Time settings come from [`DateSettings`].
//!
//! ```
//! use lingua_common_format::{date_i18n, number_format_i18n, DateSettings};
//! use lingua_common_i18n::LocaleMetadata;
//!
//! let meta = LocaleMetadata::english();
//! let settings = DateSettings::default();
//!
//! assert_eq!(number_format_i18n(1234.5, 2, meta), "1,234.50");
//! assert_eq!(
//!     date_i18n("F j, Y", Some(1_356_825_600), false, &settings, meta),
//!     "December 30, 2012"
//! );
//! ```

pub use lingua_common_i18n::LocaleMetadata;

mod date;
mod decline;
mod gmt;
mod number;
mod numeric;
mod pattern;
mod settings;
mod week;

pub use date::{current_time, current_time_at, date_i18n, mysql2date, parse_datetime, CurrentTime};
pub use decline::wp_maybe_decline_date;
pub use gmt::{get_date_from_gmt, get_gmt_from_date, DEFAULT_FORMAT};
pub use number::{number_format, number_format_i18n, number_format_i18n_str};
pub use numeric::{absint, absint_str, floatval, intval};
pub use pattern::{format_date, ZonedTime};
pub use settings::DateSettings;
pub use week::{get_weekstartend, WeekBounds};
