// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The live domain → catalog mapping.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogHandle, CatalogLoader, MoFileLoader};
use crate::languages::LanguageSource;

/// Text domain holding core strings.
pub const DEFAULT_DOMAIN: &str = "default";

static NOOP: Lazy<CatalogHandle> = Lazy::new(|| Arc::new(Catalog::empty(DEFAULT_DOMAIN)));

/// Registry of loaded catalogs keyed by text domain.
///
/// Starts out unset. The first successful load (or install) activates it, and
/// it stays active even if every domain is later unloaded.
pub struct CatalogRegistry {
	domains: Option<BTreeMap<String, CatalogHandle>>,
	loader: Arc<dyn CatalogLoader>,
}

impl CatalogRegistry {
	pub fn new(loader: Arc<dyn CatalogLoader>) -> Self {
		Self {
			domains: None,
			loader,
		}
	}

	/// Whether any catalog has ever been loaded.
	pub fn is_active(&self) -> bool {
		self.domains.is_some()
	}

	/// Loaded domain names in sorted order.
	pub fn domains(&self) -> Vec<String> {
		self
			.domains
			.as_ref()
			.map(|domains| domains.keys().cloned().collect())
			.unwrap_or_default()
	}

	pub fn get(&self, domain: &str) -> Option<CatalogHandle> {
		self.domains.as_ref()?.get(domain).cloned()
	}

	/// The catalog for `domain`, or a no-op catalog when nothing is loaded.
	pub fn translations_for_domain(&self, domain: &str) -> CatalogHandle {
		self.get(domain).unwrap_or_else(|| Arc::clone(&NOOP))
	}

	/// Make `catalog` the live catalog for `domain`.
	pub fn install(&mut self, domain: &str, catalog: CatalogHandle) {
		self
			.domains
			.get_or_insert_with(BTreeMap::new)
			.insert(domain.to_string(), catalog);
	}

	/// Load `path` as the catalog for `domain`, replacing any loaded one.
	///
	/// Failures are logged and leave the registry untouched.
	pub fn load_textdomain(&mut self, domain: &str, path: &Path) -> bool {
		match self.loader.load(domain, path) {
			Ok(catalog) => {
				debug!(domain, path = %path.display(), "loaded text domain");
				self.install(domain, Arc::new(catalog));
				true
			}
			Err(e) => {
				warn!(domain, path = %path.display(), error = %e, "failed to load text domain");
				false
			}
		}
	}

	/// Returns whether a catalog was loaded for `domain`.
	pub fn unload_textdomain(&mut self, domain: &str) -> bool {
		let removed = self
			.domains
			.as_mut()
			.and_then(|domains| domains.remove(domain))
			.is_some();
		if removed {
			debug!(domain, "unloaded text domain");
		}
		removed
	}

	/// Replace the `default` domain with the core catalog for `locale`.
	pub fn load_default_textdomain(&mut self, locale: &str, languages: &dyn LanguageSource) -> bool {
		self.unload_textdomain(DEFAULT_DOMAIN);
		let path = languages.default_catalog_path(locale);
		self.load_textdomain(DEFAULT_DOMAIN, &path)
	}

	/// Drop every catalog and return to the unset state.
	pub fn reset(&mut self) {
		self.domains = None;
	}

	pub fn translate(&self, text: &str, domain: &str) -> String {
		self.translations_for_domain(domain).gettext(text).to_string()
	}

	pub fn translate_with_context(&self, text: &str, context: &str, domain: &str) -> String {
		self
			.translations_for_domain(domain)
			.pgettext(context, text)
			.to_string()
	}

	pub fn translate_plural(&self, single: &str, plural: &str, n: u64, domain: &str) -> String {
		self
			.translations_for_domain(domain)
			.ngettext(single, plural, n)
			.to_string()
	}
}

impl Default for CatalogRegistry {
	fn default() -> Self {
		Self::new(Arc::new(MoFileLoader))
	}
}
