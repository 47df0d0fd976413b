// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Lingua.
//!
//! This crate loads GNU gettext catalogs per text domain and lets callers
//! temporarily switch the whole process to another locale.
//!
//! # Switching
//!
//! [`LocaleSwitcher`] keeps a stack of locales on top of an [`I18nContext`]:
//!
//! - the [`LocaleResolver`] answers the current locale, with a single
//!   override slot holding the stack top
//! - the [`CatalogRegistry`] maps text domains to loaded catalogs
//! - [`LocaleMetadata`] (month names, separators, direction) is rebuilt after
//!   every switch and restore
//!
//! Catalogs are cached per locale the first time the switcher sees them, so
//! switching back and forth does not touch the disk again.
//!
//! # Example
//!
//! ```no_run
//! use lingua_common_config::I18nConfig;
//! use lingua_common_i18n::I18n;
//!
//! let mut i18n = I18n::from_config(&I18nConfig::default());
//!
//! i18n.switch_to_locale("es_ES").ok();
//! let month = i18n.metadata().month(1).map(str::to_string);
//! i18n.restore_current_locale().ok();
//! ```

mod catalog;
mod context;
mod error;
mod languages;
mod locale;
mod metadata;
mod registry;
mod resolver;
mod runtime;
mod switcher;

pub use catalog::{relocalize_path, Catalog, CatalogHandle, CatalogLoader, MoFileLoader};
pub use context::I18nContext;
pub use error::{I18nError, I18nResult, SwitchError, SwitchResult};
pub use languages::{LanguageDirectory, LanguageSource};
pub use locale::{is_known_locale, is_rtl, locale_info, Direction, LocaleInfo};
pub use metadata::{LocaleMetadata, Meridiem, NumberFormat};
pub use registry::{CatalogRegistry, DEFAULT_DOMAIN};
pub use resolver::{LocaleOverride, LocaleResolver};
pub use runtime::I18n;
pub use switcher::LocaleSwitcher;

pub use locale::{DEFAULT_LOCALE, LOCALES};
