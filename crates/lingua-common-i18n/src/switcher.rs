// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Temporary locale switching with cached translations.
//!
//! The switcher keeps a stack of locales. Each switch pushes, each restore
//! pops, and the stack top is the only override registered with the
//! resolver. The catalogs live when a locale is first left or entered are
//! snapshotted per locale and reinstalled on return, so a locale's catalogs
//! are read from disk at most once.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{relocalize_path, Catalog, CatalogHandle};
use crate::context::I18nContext;
use crate::error::{SwitchError, SwitchResult};
use crate::registry::DEFAULT_DOMAIN;
use crate::resolver::LocaleOverride;

type Snapshot = HashMap<String, CatalogHandle>;

pub struct LocaleSwitcher {
	original_locale: String,
	locales: Vec<String>,
	overrides: HashMap<String, LocaleOverride>,
	translations: HashMap<String, Snapshot>,
}

impl LocaleSwitcher {
	/// Captures the context's current locale as the original locale.
	pub fn new(ctx: &I18nContext) -> Self {
		Self {
			original_locale: ctx.current_locale().to_string(),
			locales: Vec::new(),
			overrides: HashMap::new(),
			translations: HashMap::new(),
		}
	}

	pub fn original_locale(&self) -> &str {
		&self.original_locale
	}

	pub fn is_switched(&self) -> bool {
		!self.locales.is_empty()
	}

	pub fn depth(&self) -> usize {
		self.locales.len()
	}

	/// Switched locales, innermost last.
	pub fn stack(&self) -> &[String] {
		&self.locales
	}

	/// Switch translations and the current locale to `locale`.
	///
	/// Switching to the current locale succeeds without pushing. Refusals
	/// leave the switcher and the context untouched.
	pub fn switch_to(&mut self, ctx: &mut I18nContext, locale: &str) -> SwitchResult<String> {
		let current = ctx.resolver.current_locale().to_string();
		if current == locale {
			debug!(locale, "already using requested locale");
			return Ok(current);
		}

		if !ctx.languages.is_available(locale) {
			debug!(locale, "refusing switch to unavailable locale");
			return Err(SwitchError::UnavailableLocale(locale.to_string()));
		}

		if !ctx.catalogs.is_active() {
			debug!(locale, "refusing switch without active translations");
			return Err(SwitchError::NoActiveTranslations);
		}

		self.locales.push(locale.to_string());

		let domains = ctx.catalogs.domains();

		if !self.has_translations_for(&current) {
			let snapshot = domains
				.iter()
				.map(|domain| (domain.clone(), ctx.catalogs.translations_for_domain(domain)))
				.collect();
			self.translations.insert(current.clone(), snapshot);
		}

		ctx.resolver.deregister_override();
		let locale_override = self
			.overrides
			.entry(locale.to_string())
			.or_insert_with(|| LocaleOverride::new(locale))
			.clone();
		ctx.resolver.register_override(locale_override);

		if let Some(cached) = self.translations.get(locale).filter(|t| !t.is_empty()) {
			debug!(locale, domains = domains.len(), "installing cached translations");
			install_cached(ctx, &domains, cached);
		} else {
			let loaded = load_translations(ctx, &domains, locale);
			self.translations.insert(locale.to_string(), loaded);
		}

		ctx.publish_metadata();

		info!(from = %current, to = locale, depth = self.locales.len(), "switched locale");
		Ok(locale.to_string())
	}

	/// Return to the previous locale, or to the original one when `reset`.
	///
	/// A reset clears the whole stack.
	pub fn restore(&mut self, ctx: &mut I18nContext, reset: bool) -> SwitchResult<String> {
		let Some(left) = self.locales.pop() else {
			return Err(SwitchError::EmptyStack);
		};

		ctx.resolver.deregister_override();

		let previous = if reset {
			None
		} else {
			self.locales.last().cloned()
		};

		let target = match previous {
			Some(previous) => {
				if let Some(locale_override) = self.overrides.get(&previous) {
					ctx.resolver.register_override(locale_override.clone());
				}
				previous
			}
			None => {
				self.locales.clear();
				self.original_locale.clone()
			}
		};

		if let Some(cached) = self.translations.get(&target) {
			let domains = ctx.catalogs.domains();
			install_cached(ctx, &domains, cached);
		}

		ctx.publish_metadata();

		info!(from = %left, to = %target, reset, depth = self.locales.len(), "restored locale");
		Ok(target)
	}

	fn has_translations_for(&self, locale: &str) -> bool {
		self
			.translations
			.get(locale)
			.is_some_and(|snapshot| !snapshot.is_empty())
	}
}

/// Live domains missing from the snapshot keep their current catalog.
fn install_cached(ctx: &mut I18nContext, domains: &[String], cached: &Snapshot) {
	for domain in domains {
		if let Some(catalog) = cached.get(domain) {
			ctx.catalogs.install(domain, Arc::clone(catalog));
		}
	}
}

/// Reload every live domain for `locale`.
///
/// A domain whose catalog cannot be loaded stays live with a no-op catalog
/// remembering the attempted path.
fn load_translations(ctx: &mut I18nContext, domains: &[String], locale: &str) -> Snapshot {
	let mut loaded = Snapshot::new();

	for domain in domains {
		if domain == DEFAULT_DOMAIN {
			let languages = Arc::clone(&ctx.languages);
			if !ctx
				.catalogs
				.load_default_textdomain(locale, languages.as_ref())
			{
				let path = languages.default_catalog_path(locale);
				ctx.catalogs
					.install(domain, Arc::new(Catalog::unresolved(domain, &path)));
			}
		} else {
			let source = ctx
				.catalogs
				.get(domain)
				.and_then(|catalog| catalog.source_path().map(Path::to_path_buf));

			ctx.catalogs.unload_textdomain(domain);

			let placeholder = match source {
				Some(source) => {
					let path = relocalize_path(&source, domain, locale);
					if ctx.catalogs.load_textdomain(domain, &path) {
						None
					} else {
						Some(Catalog::unresolved(domain, &path))
					}
				}
				None => Some(Catalog::empty(domain)),
			};

			if let Some(placeholder) = placeholder {
				ctx.catalogs.install(domain, Arc::new(placeholder));
			}
		}

		loaded.insert(domain.clone(), ctx.catalogs.translations_for_domain(domain));
	}

	debug!(locale, domains = loaded.len(), "loaded translations");
	loaded
}
