// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end locale switching against on-disk catalogs.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lingua_common_config::I18nConfig;
use lingua_common_i18n::{
	Catalog, CatalogLoader, I18n, I18nResult, LanguageDirectory, MoFileLoader, SwitchError,
	DEFAULT_DOMAIN,
};
use lingua_i18n_testing::{LanguageDirFixture, MoBuilder};
use proptest::prelude::*;

#[derive(Default)]
struct CountingLoader {
	loads: AtomicUsize,
}

impl CountingLoader {
	fn loads(&self) -> usize {
		self.loads.load(Ordering::SeqCst)
	}
}

impl CatalogLoader for CountingLoader {
	fn load(&self, domain: &str, path: &Path) -> I18nResult<Catalog> {
		self.loads.fetch_add(1, Ordering::SeqCst);
		MoFileLoader.load(domain, path)
	}
}

fn installed_languages() -> LanguageDirFixture {
	let fixture = LanguageDirFixture::new();
	fixture.write_core(
		"es_ES",
		&MoBuilder::new()
			.message("Hello", "Hola")
			.message("January", "enero")
			.message("number_format_thousands_sep", ".")
			.message("number_format_decimal_point", ","),
	);
	fixture.write_core(
		"en_GB",
		&MoBuilder::new()
			.message("Hello", "Hello, mate")
			.message("January", "January"),
	);
	fixture.write_core("de_DE", &MoBuilder::new().message("Hello", "Hallo"));
	fixture.write_domain("shop", "en_US", &MoBuilder::new().message("Cart", "Basket"));
	fixture.write_domain("shop", "es_ES", &MoBuilder::new().message("Cart", "Carrito"));
	fixture.write_domain("shop", "en_GB", &MoBuilder::new().message("Cart", "Trolley"));
	// English core strings, kept out of the scanned root
	fixture.write_raw("base/en_US.mo", &MoBuilder::new().build());
	fixture
}

/// Load the English core catalog and the `shop` domain.
fn activate(i18n: &mut I18n, fixture: &LanguageDirFixture) {
	assert!(i18n.load_textdomain(DEFAULT_DOMAIN, &fixture.path().join("base/en_US.mo")));
	assert!(i18n.load_textdomain("shop", &fixture.path().join("plugins/shop-en_US.mo")));
}

fn runtime(fixture: &LanguageDirFixture, loader: Arc<dyn CatalogLoader>) -> I18n {
	I18n::bootstrap(
		"en_US",
		Arc::new(LanguageDirectory::new(fixture.path())),
		loader,
	)
}

#[test]
fn switches_to_when_no_translations_loaded() {
	let fixture = installed_languages();
	let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));

	assert_eq!(
		i18n.switch_to_locale("es_ES"),
		Err(SwitchError::NoActiveTranslations)
	);
	assert_eq!(
		i18n.switch_to_locale("en_GB"),
		Err(SwitchError::NoActiveTranslations)
	);
	assert!(!i18n.is_locale_switched());
	assert_eq!(i18n.current_locale(), "en_US");
}

#[test]
fn switch_and_restore_sequence() {
	let fixture = installed_languages();
	let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
	activate(&mut i18n, &fixture);

	assert_eq!(i18n.switch_to_locale("es_ES").unwrap(), "es_ES");
	assert_eq!(i18n.current_locale(), "es_ES");

	assert_eq!(i18n.switch_to_locale("en_GB").unwrap(), "en_GB");
	assert_eq!(i18n.current_locale(), "en_GB");

	// switching to the current locale returns early
	assert_eq!(i18n.switch_to_locale("en_GB").unwrap(), "en_GB");
	assert_eq!(i18n.switcher().depth(), 2);

	assert_eq!(i18n.restore_previous_locale().unwrap(), "es_ES");
	assert_eq!(i18n.current_locale(), "es_ES");

	assert_eq!(i18n.restore_current_locale().unwrap(), "en_US");
	assert_eq!(i18n.current_locale(), "en_US");
	assert!(!i18n.is_locale_switched());

	assert_eq!(
		i18n.restore_previous_locale(),
		Err(SwitchError::EmptyStack)
	);
}

#[test]
fn domains_loaded_after_caching_keep_their_catalog() {
	let fixture = installed_languages();
	fixture.write_domain("blog", "en_US", &MoBuilder::new().message("Post", "Entry"));
	fixture.write_domain("blog", "es_ES", &MoBuilder::new().message("Post", "Entrada"));

	let loader = Arc::new(CountingLoader::default());
	let mut i18n = runtime(&fixture, loader.clone());
	activate(&mut i18n, &fixture);

	i18n.switch_to_locale("es_ES").unwrap();
	i18n.restore_previous_locale().unwrap();

	assert!(i18n.load_textdomain("blog", &fixture.path().join("plugins/blog-en_US.mo")));
	let loads = loader.loads();

	// es_ES comes from its cached snapshot, which predates `blog`
	i18n.switch_to_locale("es_ES").unwrap();
	assert_eq!(loader.loads(), loads);
	assert_eq!(i18n.translate("Cart", "shop"), "Carrito");
	assert_eq!(i18n.translate("Post", "blog"), "Entry");

	i18n.restore_previous_locale().unwrap();
	assert_eq!(i18n.translate("Cart", "shop"), "Basket");
	assert_eq!(i18n.translate("Post", "blog"), "Entry");
}

#[test]
fn catalogs_follow_the_current_locale() {
	let fixture = installed_languages();
	let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
	activate(&mut i18n, &fixture);
	assert_eq!(i18n.translate("Cart", "shop"), "Basket");

	i18n.switch_to_locale("es_ES").unwrap();
	assert_eq!(i18n.translate("Cart", "shop"), "Carrito");

	i18n.switch_to_locale("en_GB").unwrap();
	assert_eq!(i18n.translate("Cart", "shop"), "Trolley");

	i18n.restore_previous_locale().unwrap();
	assert_eq!(i18n.translate("Cart", "shop"), "Carrito");

	i18n.restore_previous_locale().unwrap();
	assert_eq!(i18n.translate("Cart", "shop"), "Basket");
}

#[test]
fn metadata_is_republished() {
	let fixture = installed_languages();
	let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
	activate(&mut i18n, &fixture);
	assert_eq!(i18n.metadata().locale, "en_US");

	i18n.switch_to_locale("es_ES").unwrap();
	let meta = i18n.metadata();
	assert_eq!(meta.locale, "es_ES");
	assert_eq!(meta.month(1), Some("enero"));
	assert_eq!(meta.number_format.decimal_point, ",");
	assert_eq!(i18n.translate("Hello", DEFAULT_DOMAIN), "Hola");

	i18n.restore_previous_locale().unwrap();
	let meta = i18n.metadata();
	assert_eq!(meta.locale, "en_US");
	assert_eq!(meta.month(1), Some("January"));
	assert_eq!(meta.number_format.decimal_point, ".");
}

#[test]
fn returning_to_a_locale_reuses_cached_catalogs() {
	let fixture = installed_languages();
	let loader = Arc::new(CountingLoader::default());
	let mut i18n = runtime(&fixture, loader.clone());
	activate(&mut i18n, &fixture);
	assert_eq!(loader.loads(), 2);

	i18n.switch_to_locale("es_ES").unwrap();
	let after_first_visit = loader.loads();
	assert_eq!(after_first_visit, 4);

	i18n.restore_previous_locale().unwrap();
	i18n.switch_to_locale("es_ES").unwrap();
	assert_eq!(loader.loads(), after_first_visit);
	assert_eq!(i18n.translate("Cart", "shop"), "Carrito");
}

#[test]
fn unavailable_locale_changes_nothing() {
	let fixture = installed_languages();
	let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
	activate(&mut i18n, &fixture);
	i18n.switch_to_locale("es_ES").unwrap();

	assert_eq!(
		i18n.switch_to_locale("xx_XX"),
		Err(SwitchError::UnavailableLocale("xx_XX".to_string()))
	);
	assert_eq!(i18n.switcher().depth(), 1);
	assert_eq!(i18n.current_locale(), "es_ES");
	assert_eq!(
		i18n.context()
			.resolver()
			.active_override()
			.map(|o| o.locale()),
		Some("es_ES")
	);
}

#[test]
fn missing_domain_catalog_for_locale_is_tolerated() {
	let fixture = installed_languages();
	let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
	activate(&mut i18n, &fixture);

	// no shop-de_DE.mo exists
	assert_eq!(i18n.switch_to_locale("de_DE").unwrap(), "de_DE");
	assert_eq!(i18n.translate("Cart", "shop"), "Cart");
	assert_eq!(i18n.translate("Hello", DEFAULT_DOMAIN), "Hallo");

	i18n.restore_previous_locale().unwrap();
	assert_eq!(i18n.translate("Cart", "shop"), "Basket");
}

#[test]
fn from_config_falls_back_when_locale_missing() {
	let fixture = installed_languages();
	let config = I18nConfig {
		locale: "fr_FR".to_string(),
		languages_dir: fixture.path().to_path_buf(),
	};

	let i18n = I18n::from_config(&config);
	assert_eq!(i18n.current_locale(), "en_US");
	assert!(!i18n.context().catalogs().is_active());
}

#[test]
fn from_config_loads_installed_base_locale() {
	let fixture = installed_languages();
	let config = I18nConfig {
		locale: "es_ES".to_string(),
		languages_dir: fixture.path().to_path_buf(),
	};

	let mut i18n = I18n::from_config(&config);
	assert_eq!(i18n.current_locale(), "es_ES");
	assert_eq!(i18n.translate("Hello", DEFAULT_DOMAIN), "Hola");

	assert_eq!(i18n.switch_to_locale("en_GB").unwrap(), "en_GB");
	assert_eq!(i18n.translate("Hello", DEFAULT_DOMAIN), "Hello, mate");
	assert_eq!(i18n.restore_current_locale().unwrap(), "es_ES");
	assert_eq!(i18n.translate("Hello", DEFAULT_DOMAIN), "Hola");
}

#[derive(Debug, Clone)]
enum Op {
	Switch(&'static str),
	Restore,
	Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
	prop_oneof![
		prop::sample::select(vec!["en_US", "es_ES", "en_GB", "de_DE", "xx_XX"]).prop_map(Op::Switch),
		Just(Op::Restore),
		Just(Op::Reset),
	]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// The registered override always mirrors the top of the stack.
	#[test]
	fn override_tracks_stack_top(ops in proptest::collection::vec(op_strategy(), 0..24)) {
		let fixture = installed_languages();
		let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
		activate(&mut i18n, &fixture);

		for op in ops {
			let _ = match op {
				Op::Switch(locale) => i18n.switch_to_locale(locale),
				Op::Restore => i18n.restore_previous_locale(),
				Op::Reset => i18n.restore_current_locale(),
			};

			let top = i18n.switcher().stack().last().cloned();
			let active = i18n
				.context()
				.resolver()
				.active_override()
				.map(|o| o.locale().to_string());
			prop_assert_eq!(&active, &top);

			let expected = top.unwrap_or_else(|| "en_US".to_string());
			prop_assert_eq!(i18n.current_locale(), expected.as_str());
			let meta = i18n.metadata();
			prop_assert_eq!(meta.locale.as_str(), expected.as_str());
		}
	}

	/// n switches followed by n restores end where they started.
	#[test]
	fn restores_mirror_switches(locales in proptest::collection::vec(
		prop::sample::select(vec!["es_ES", "en_GB", "de_DE"]), 1..8)
	) {
		let fixture = installed_languages();
		let mut i18n = runtime(&fixture, Arc::new(MoFileLoader));
		activate(&mut i18n, &fixture);

		let mut pushed = 0;
		for locale in &locales {
			let before = i18n.switcher().depth();
			i18n.switch_to_locale(locale).unwrap();
			pushed += i18n.switcher().depth() - before;
		}

		for _ in 0..pushed {
			prop_assert!(i18n.restore_previous_locale().is_ok());
		}

		prop_assert_eq!(i18n.current_locale(), "en_US");
		prop_assert_eq!(i18n.translate("Cart", "shop"), "Basket");
		prop_assert!(!i18n.is_locale_switched());
	}
}
