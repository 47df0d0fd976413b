// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The localization runtime: one context and its switcher.

use std::path::Path;
use std::sync::Arc;

use lingua_common_config::I18nConfig;
use tracing::{info, warn};

use crate::catalog::{CatalogLoader, MoFileLoader};
use crate::context::I18nContext;
use crate::error::SwitchResult;
use crate::languages::{LanguageDirectory, LanguageSource};
use crate::locale::DEFAULT_LOCALE;
use crate::metadata::LocaleMetadata;
use crate::registry::CatalogRegistry;
use crate::resolver::LocaleResolver;
use crate::switcher::LocaleSwitcher;

/// Entry point for translation and locale switching.
///
/// # Example
///
/// ```no_run
/// use lingua_common_config::I18nConfig;
/// use lingua_common_i18n::I18n;
///
/// let mut i18n = I18n::from_config(&I18nConfig::default());
/// if i18n.switch_to_locale("es_ES").is_ok() {
///     let greeting = i18n.translate("Hello", "default");
///     i18n.restore_previous_locale().ok();
/// }
/// ```
pub struct I18n {
	context: I18nContext,
	switcher: LocaleSwitcher,
}

impl I18n {
	/// Bootstrap from configuration, reading catalogs from `languages_dir`.
	pub fn from_config(config: &I18nConfig) -> Self {
		Self::bootstrap(
			&config.locale,
			Arc::new(LanguageDirectory::new(&config.languages_dir)),
			Arc::new(MoFileLoader),
		)
	}

	/// Resolve the base locale and load its core catalog.
	///
	/// A configured locale that is not installed falls back to `en_US`.
	pub fn bootstrap(
		locale: &str,
		languages: Arc<dyn LanguageSource>,
		loader: Arc<dyn CatalogLoader>,
	) -> Self {
		let available = languages.available_locales();

		let base_locale = if locale == DEFAULT_LOCALE || available.contains(locale) {
			locale
		} else {
			warn!(
				locale,
				fallback = DEFAULT_LOCALE,
				"configured locale is not installed"
			);
			DEFAULT_LOCALE
		};

		let mut catalogs = CatalogRegistry::new(loader);
		if available.contains(base_locale) {
			catalogs.load_default_textdomain(base_locale, languages.as_ref());
		}

		let context = I18nContext::new(LocaleResolver::new(base_locale), catalogs, languages);
		let switcher = LocaleSwitcher::new(&context);

		info!(
			locale = base_locale,
			installed = available.len(),
			"i18n runtime ready"
		);

		Self { context, switcher }
	}

	pub fn current_locale(&self) -> &str {
		self.context.current_locale()
	}

	pub fn switch_to_locale(&mut self, locale: &str) -> SwitchResult<String> {
		self.switcher.switch_to(&mut self.context, locale)
	}

	/// Undo the most recent switch.
	pub fn restore_previous_locale(&mut self) -> SwitchResult<String> {
		self.switcher.restore(&mut self.context, false)
	}

	/// Undo every switch at once.
	pub fn restore_current_locale(&mut self) -> SwitchResult<String> {
		self.switcher.restore(&mut self.context, true)
	}

	pub fn is_locale_switched(&self) -> bool {
		self.switcher.is_switched()
	}

	pub fn load_textdomain(&mut self, domain: &str, path: &Path) -> bool {
		self.context.catalogs_mut().load_textdomain(domain, path)
	}

	pub fn unload_textdomain(&mut self, domain: &str) -> bool {
		self.context.catalogs_mut().unload_textdomain(domain)
	}

	pub fn translate(&self, text: &str, domain: &str) -> String {
		self.context.catalogs().translate(text, domain)
	}

	pub fn translate_with_context(&self, text: &str, context: &str, domain: &str) -> String {
		self
			.context
			.catalogs()
			.translate_with_context(text, context, domain)
	}

	pub fn translate_plural(&self, single: &str, plural: &str, n: u64, domain: &str) -> String {
		self
			.context
			.catalogs()
			.translate_plural(single, plural, n, domain)
	}

	/// Metadata for the current locale.
	pub fn metadata(&self) -> Arc<LocaleMetadata> {
		self.context.metadata()
	}

	pub fn context(&self) -> &I18nContext {
		&self.context
	}

	pub fn switcher(&self) -> &LocaleSwitcher {
		&self.switcher
	}
}
