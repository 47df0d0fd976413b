// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, explicit overrides, defaults.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	Environment = 50,
	Overrides = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Return empty layer - defaults applied during finalization
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
}

impl FileSource {
	/// System config: /etc/lingua/config.toml
	pub fn system(paths: &PathsConfig) -> Self {
		Self {
			path: paths.system_config_file.clone(),
			precedence: Precedence::SystemFile,
			name: "system-config",
		}
	}

	/// User config: ~/.config/lingua/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
		}
	}

	/// Custom file path with specified precedence
	pub fn custom(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Recognized variables: `LINGUA_LOCALE`, `LINGUA_LANGUAGES_DIR`,
/// `LINGUA_TIMEZONE`, `LINGUA_GMT_OFFSET`, `LINGUA_START_OF_WEEK`,
/// `LINGUA_LOG_LEVEL`, `LINGUA_LOG_FORMAT`.
pub struct EnvSource;

impl EnvSource {
	/// Build a layer from an explicit set of variables.
	pub fn layer_from_vars<I>(vars: I) -> ConfigLayer
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut layer = ConfigLayer::default();

		for (key, value) in vars {
			if !key.starts_with("LINGUA_") {
				continue;
			}

			let value = value.trim().to_string();
			if value.is_empty() {
				continue;
			}

			trace!(key = %key, "processing env var");

			match key.as_str() {
				"LINGUA_LOCALE" => {
					layer.i18n.get_or_insert_with(I18nLayer::default).locale = Some(value);
				}
				"LINGUA_LANGUAGES_DIR" => {
					layer
						.i18n
						.get_or_insert_with(I18nLayer::default)
						.languages_dir = Some(PathBuf::from(value));
				}
				"LINGUA_TIMEZONE" => {
					layer
						.time
						.get_or_insert_with(TimeLayer::default)
						.timezone_string = Some(value);
				}
				"LINGUA_GMT_OFFSET" => match value.parse() {
					Ok(v) => {
						layer.time.get_or_insert_with(TimeLayer::default).gmt_offset = Some(v);
					}
					Err(_) => debug!(value = %value, "ignoring unparseable LINGUA_GMT_OFFSET"),
				},
				"LINGUA_START_OF_WEEK" => match value.parse() {
					Ok(v) => {
						layer
							.time
							.get_or_insert_with(TimeLayer::default)
							.start_of_week = Some(v);
					}
					Err(_) => debug!(value = %value, "ignoring unparseable LINGUA_START_OF_WEEK"),
				},
				"LINGUA_LOG_LEVEL" => {
					layer
						.logging
						.get_or_insert_with(LoggingLayer::default)
						.level = Some(value);
				}
				"LINGUA_LOG_FORMAT" => {
					layer
						.logging
						.get_or_insert_with(LoggingLayer::default)
						.format = Some(value);
				}
				_ => {
					// Unknown LINGUA_ variable, ignore
				}
			}
		}

		layer
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(Self::layer_from_vars(std::env::vars()))
	}
}

/// Overrides supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
	pub locale: Option<String>,
	pub languages_dir: Option<PathBuf>,
	pub timezone_string: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
}

/// Highest-precedence source built from [`ConfigOverrides`].
pub struct OverrideSource {
	overrides: ConfigOverrides,
}

impl OverrideSource {
	pub fn new(overrides: ConfigOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for OverrideSource {
	fn name(&self) -> &'static str {
		"overrides"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Overrides
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading explicit overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref locale) = self.overrides.locale {
			layer.i18n.get_or_insert_with(I18nLayer::default).locale = Some(locale.clone());
		}

		if let Some(ref dir) = self.overrides.languages_dir {
			layer
				.i18n
				.get_or_insert_with(I18nLayer::default)
				.languages_dir = Some(dir.clone());
		}

		if let Some(ref tz) = self.overrides.timezone_string {
			layer
				.time
				.get_or_insert_with(TimeLayer::default)
				.timezone_string = Some(tz.clone());
		}

		if let Some(ref level) = self.overrides.log_level {
			layer
				.logging
				.get_or_insert_with(LoggingLayer::default)
				.level = Some(level.clone());
		}

		if let Some(ref format) = self.overrides.log_format {
			layer
				.logging
				.get_or_insert_with(LoggingLayer::default)
				.format = Some(format.clone());
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Overrides > Precedence::Environment);
		assert!(Precedence::Environment > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.i18n.is_none());
		assert!(layer.time.is_none());
	}

	#[test]
	fn test_file_source_missing_file_returns_empty() {
		let source = FileSource::custom(
			PathBuf::from("/nonexistent/config.toml"),
			Precedence::UserFile,
			"test",
		);
		let layer = source.load().unwrap();
		assert!(layer.i18n.is_none());
	}

	#[test]
	fn test_file_source_reports_parse_errors_with_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(&path, "[i18n\nlocale = ").unwrap();

		let source = FileSource::custom(path.clone(), Precedence::UserFile, "test");
		let err = source.load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
		assert!(err.to_string().contains("config.toml"));
	}

	#[test]
	fn test_env_layer_reads_known_variables() {
		let layer = EnvSource::layer_from_vars(vars(&[
			("LINGUA_LOCALE", "de_DE"),
			("LINGUA_GMT_OFFSET", "5.5"),
			("LINGUA_START_OF_WEEK", "0"),
			("LINGUA_LOG_LEVEL", "debug"),
			("PATH", "/usr/bin"),
		]));

		assert_eq!(layer.i18n.unwrap().locale.as_deref(), Some("de_DE"));
		let time = layer.time.unwrap();
		assert_eq!(time.gmt_offset, Some(5.5));
		assert_eq!(time.start_of_week, Some(0));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
	}

	#[test]
	fn test_env_layer_skips_blank_and_unparseable_values() {
		let layer = EnvSource::layer_from_vars(vars(&[
			("LINGUA_LOCALE", "   "),
			("LINGUA_GMT_OFFSET", "east"),
		]));

		assert!(layer.i18n.is_none());
		assert!(layer.time.is_none());
	}

	#[test]
	fn test_override_source_sets_fields() {
		let source = OverrideSource::new(ConfigOverrides {
			locale: Some("fr_FR".to_string()),
			timezone_string: Some("Europe/Paris".to_string()),
			..Default::default()
		});
		let layer = source.load().unwrap();
		assert_eq!(layer.i18n.unwrap().locale.as_deref(), Some("fr_FR"));
		assert_eq!(
			layer.time.unwrap().timezone_string.as_deref(),
			Some("Europe/Paris")
		);
	}
}
