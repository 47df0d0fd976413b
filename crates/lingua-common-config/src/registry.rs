// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::LinguaConfig;
use crate::sources::ConfigSource;
use crate::validation::validate_config;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Register a configuration source.
	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are sorted by precedence (lowest first) and merged
	/// so higher precedence sources override lower ones.
	pub fn load(&self, paths: PathsConfig) -> Result<LinguaConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		info!(
			source_count = sorted_sources.len(),
			"loading configuration from sources"
		);

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			match source.load() {
				Ok(layer) => {
					debug!(source = source.name(), "merging config layer");
					merged.merge(layer);
				}
				Err(e) => {
					// Log error but continue - a broken file should not block startup
					debug!(source = source.name(), error = %e, "failed to load source, skipping");
				}
			}
		}

		let config = LinguaConfig::from_layer(merged, paths);

		validate_config(&config)?;

		info!(
				locale = %config.i18n.locale,
				languages_dir = %config.i18n.languages_dir.display(),
				timezone = ?config.time.timezone_string,
				log_level = ?config.logging.level,
				"configuration loaded successfully"
		);

		Ok(config)
	}

	/// Get the number of registered sources.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::I18nLayer;
	use crate::sources::{DefaultsSource, FileSource, Precedence};

	fn test_paths() -> PathsConfig {
		PathsConfig {
			user_config_file: "/tmp/lingua-test/config.toml".into(),
			system_config_file: "/etc/lingua/config.toml".into(),
			data_dir: "/tmp/lingua-test/data".into(),
		}
	}

	struct MockSource {
		name: &'static str,
		precedence: Precedence,
		locale: String,
	}

	impl ConfigSource for MockSource {
		fn name(&self) -> &'static str {
			self.name
		}
		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ConfigLayer, ConfigError> {
			Ok(ConfigLayer {
				i18n: Some(I18nLayer {
					locale: Some(self.locale.clone()),
					..Default::default()
				}),
				..Default::default()
			})
		}
	}

	#[test]
	fn test_registry_registers_sources() {
		let mut registry = ConfigRegistry::new();
		assert_eq!(registry.source_count(), 0);

		registry.register(Box::new(DefaultsSource));
		assert_eq!(registry.source_count(), 1);
	}

	#[test]
	fn test_registry_loads_with_defaults() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));

		let config = registry.load(test_paths()).unwrap();
		assert_eq!(config.i18n.locale, "en_US");
		assert_eq!(
			config.i18n.languages_dir,
			std::path::PathBuf::from("/tmp/lingua-test/data/languages")
		);
	}

	#[test]
	fn test_precedence_merge_order() {
		let mut registry = ConfigRegistry::new();

		// Add in wrong order - registry should sort
		registry.register(Box::new(MockSource {
			name: "overrides",
			precedence: Precedence::Overrides,
			locale: "es_ES".to_string(),
		}));
		registry.register(Box::new(MockSource {
			name: "user",
			precedence: Precedence::UserFile,
			locale: "fr_FR".to_string(),
		}));

		let config = registry.load(test_paths()).unwrap();
		assert_eq!(config.i18n.locale, "es_ES");
	}

	#[test]
	fn test_file_layer_is_merged() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(
			&path,
			"[time]\nstart_of_week = 0\ntimezone_string = \"Europe/Warsaw\"\n",
		)
		.unwrap();

		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));
		registry.register(Box::new(FileSource::custom(
			path,
			Precedence::UserFile,
			"user-config",
		)));

		let config = registry.load(test_paths()).unwrap();
		assert_eq!(config.time.start_of_week, 0);
		assert_eq!(config.time.timezone_string.as_deref(), Some("Europe/Warsaw"));
	}

	#[test]
	fn test_invalid_merged_config_is_rejected() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(MockSource {
			name: "user",
			precedence: Precedence::UserFile,
			locale: "not a locale".to_string(),
		}));

		assert!(registry.load(test_paths()).is_err());
	}
}
