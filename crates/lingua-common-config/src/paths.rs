// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where Lingua looks for its configuration and installed catalogs.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ConfigError;

const APP_DIR: &str = "lingua";
const SYSTEM_CONFIG_FILE: &str = "/etc/lingua/config.toml";

/// Config file locations and the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	pub user_config_file: PathBuf,
	pub system_config_file: PathBuf,
	/// Parent of the default `languages/` directory.
	pub data_dir: PathBuf,
}

impl PathsConfig {
	/// Default location of installed `.mo` catalogs.
	pub fn languages_dir(&self) -> PathBuf {
		self.data_dir.join("languages")
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self::under(Path::new("~/.config"), Path::new("~/.local/share"))
	}
}

impl PathsConfig {
	fn under(config_home: &Path, data_home: &Path) -> Self {
		Self {
			user_config_file: config_home.join(APP_DIR).join("config.toml"),
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
			data_dir: data_home.join(APP_DIR),
		}
	}
}

/// Resolve paths from the process environment.
///
/// `LINGUA_CONFIG` names the user config file outright. Otherwise
/// `XDG_CONFIG_HOME` and `XDG_DATA_HOME` apply, falling back to `~/.config`
/// and `~/.local/share`.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
	let paths = resolve_with(&home, |name| std::env::var_os(name));

	tracing::debug!(
		user_config = %paths.user_config_file.display(),
		data_dir = %paths.data_dir.display(),
		"resolved config paths"
	);

	Ok(paths)
}

fn resolve_with<F>(home: &Path, var: F) -> PathsConfig
where
	F: Fn(&str) -> Option<OsString>,
{
	let dir = |name: &str, fallback: &str| {
		var(name)
			.filter(|value| !value.is_empty())
			.map(PathBuf::from)
			.unwrap_or_else(|| home.join(fallback))
	};

	let mut paths = PathsConfig::under(
		&dir("XDG_CONFIG_HOME", ".config"),
		&dir("XDG_DATA_HOME", ".local/share"),
	);

	if let Some(file) = var("LINGUA_CONFIG").filter(|value| !value.is_empty()) {
		paths.user_config_file = PathBuf::from(file);
	}

	paths
}
