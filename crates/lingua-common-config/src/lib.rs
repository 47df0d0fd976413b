// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site configuration for Lingua: the base locale, where catalogs live, the
//! site timezone and calendar, and log output.
//!
//! Settings are merged from built-in defaults, `/etc/lingua/config.toml`, the
//! user's `config.toml`, `LINGUA_*` environment variables and finally values
//! passed in by the embedding application. Later sources win field by field.
//!
//! ```no_run
//! let config = lingua_common_config::load_config()?;
//! lingua_common_config::init_logging(&config.logging)?;
//! # Ok::<(), lingua_common_config::ConfigError>(())
//! ```

pub mod defaults;
pub mod error;
pub mod layer;
pub mod logging;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use defaults::{ensure_default_config, DEFAULT_CONFIG_TEMPLATE};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use logging::init_logging;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{
	I18nConfig, LinguaConfig, LogFormat, LogLevel, LoggingConfig, TimeConfig, DEFAULT_LOCALE,
};
pub use sources::{ConfigOverrides, ConfigSource, Precedence};
pub use validation::is_valid_locale_code;

/// Load configuration from all sources with default precedence.
///
/// If no user config file exists, a default one is created at
/// `~/.config/lingua/config.toml`.
pub fn load_config() -> Result<LinguaConfig, ConfigError> {
	load_config_with_overrides(ConfigOverrides::default())
}

/// Load configuration with explicit overrides from the embedding application.
pub fn load_config_with_overrides(overrides: ConfigOverrides) -> Result<LinguaConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	defaults::ensure_default_config(&paths.user_config_file)?;

	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::FileSource::system(&paths)));
	registry.register(Box::new(sources::FileSource::user(&paths)));
	registry.register(Box::new(sources::EnvSource));
	registry.register(Box::new(sources::OverrideSource::new(overrides)));

	registry.load(paths)
}
