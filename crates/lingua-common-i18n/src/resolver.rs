// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution with a single override slot.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

/// A registered answer to "what is the current locale".
///
/// Created once per locale and re-registered on every return to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleOverride(Arc<str>);

impl LocaleOverride {
	pub fn new(locale: &str) -> Self {
		Self(Arc::from(locale))
	}

	pub fn locale(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LocaleOverride {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Resolves the current locale.
///
/// Answers the base locale unless an override is registered. There is only
/// one slot: registering replaces whatever was there.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
	base_locale: String,
	active: Option<LocaleOverride>,
}

impl LocaleResolver {
	pub fn new(base_locale: impl Into<String>) -> Self {
		Self {
			base_locale: base_locale.into(),
			active: None,
		}
	}

	pub fn base_locale(&self) -> &str {
		&self.base_locale
	}

	pub fn current_locale(&self) -> &str {
		match self.active {
			Some(ref locale) => locale.locale(),
			None => &self.base_locale,
		}
	}

	/// Install `locale` as the answer, returning the override it replaced.
	pub fn register_override(&mut self, locale: LocaleOverride) -> Option<LocaleOverride> {
		trace!(locale = %locale, "registering locale override");
		self.active.replace(locale)
	}

	pub fn deregister_override(&mut self) -> Option<LocaleOverride> {
		let removed = self.active.take();
		if let Some(ref locale) = removed {
			trace!(locale = %locale, "deregistered locale override");
		}
		removed
	}

	pub fn active_override(&self) -> Option<&LocaleOverride> {
		self.active.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_base_locale_without_override() {
		let resolver = LocaleResolver::new("en_US");
		assert_eq!(resolver.current_locale(), "en_US");
		assert!(resolver.active_override().is_none());
	}

	#[test]
	fn test_override_wins_until_deregistered() {
		let mut resolver = LocaleResolver::new("en_US");
		resolver.register_override(LocaleOverride::new("es_ES"));
		assert_eq!(resolver.current_locale(), "es_ES");

		let removed = resolver.deregister_override();
		assert_eq!(removed.as_ref().map(LocaleOverride::locale), Some("es_ES"));
		assert_eq!(resolver.current_locale(), "en_US");
	}

	#[test]
	fn test_register_replaces_previous() {
		let mut resolver = LocaleResolver::new("en_US");
		resolver.register_override(LocaleOverride::new("es_ES"));
		let replaced = resolver.register_override(LocaleOverride::new("en_GB"));
		assert_eq!(replaced, Some(LocaleOverride::new("es_ES")));
		assert_eq!(resolver.current_locale(), "en_GB");
	}

	#[test]
	fn test_deregister_without_override_is_noop() {
		let mut resolver = LocaleResolver::new("en_US");
		assert!(resolver.deregister_override().is_none());
		assert_eq!(resolver.current_locale(), "en_US");
	}

	proptest! {
		/// The resolver always answers the most recently registered override.
		#[test]
		fn last_registration_wins(locales in proptest::collection::vec("[a-z]{2}_[A-Z]{2}", 1..10)) {
			let mut resolver = LocaleResolver::new("en_US");
			for locale in &locales {
				resolver.register_override(LocaleOverride::new(locale));
			}
			prop_assert_eq!(resolver.current_locale(), locales.last().unwrap().as_str());
		}
	}
}
