// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared localization state mutated by the locale switcher.

use std::sync::Arc;

use tracing::trace;

use crate::languages::LanguageSource;
use crate::metadata::LocaleMetadata;
use crate::registry::CatalogRegistry;
use crate::resolver::LocaleResolver;

/// The resolver, the live catalogs and the metadata derived from them.
///
/// After every switch or restore the resolver's locale, the catalogs and the
/// published metadata all describe the same locale.
pub struct I18nContext {
	pub(crate) resolver: LocaleResolver,
	pub(crate) catalogs: CatalogRegistry,
	pub(crate) languages: Arc<dyn LanguageSource>,
	metadata: Arc<LocaleMetadata>,
}

impl I18nContext {
	pub fn new(
		resolver: LocaleResolver,
		catalogs: CatalogRegistry,
		languages: Arc<dyn LanguageSource>,
	) -> Self {
		let metadata = Arc::new(LocaleMetadata::build(resolver.current_locale(), &catalogs));
		Self {
			resolver,
			catalogs,
			languages,
			metadata,
		}
	}

	pub fn current_locale(&self) -> &str {
		self.resolver.current_locale()
	}

	pub fn resolver(&self) -> &LocaleResolver {
		&self.resolver
	}

	pub fn catalogs(&self) -> &CatalogRegistry {
		&self.catalogs
	}

	pub fn catalogs_mut(&mut self) -> &mut CatalogRegistry {
		&mut self.catalogs
	}

	pub fn languages(&self) -> &dyn LanguageSource {
		self.languages.as_ref()
	}

	/// The most recently published metadata.
	pub fn metadata(&self) -> Arc<LocaleMetadata> {
		Arc::clone(&self.metadata)
	}

	/// Rebuild metadata for the current locale and catalogs.
	pub fn publish_metadata(&mut self) {
		let locale = self.resolver.current_locale();
		trace!(locale, "publishing locale metadata");
		self.metadata = Arc::new(LocaleMetadata::build(locale, &self.catalogs));
	}
}
