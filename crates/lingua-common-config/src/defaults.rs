// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default configuration file generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ConfigError;

/// Default configuration file template.
///
/// Written to ~/.config/lingua/config.toml when no user config exists.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"#
# Lingua Configuration File
# Location: ~/.config/lingua/config.toml
#
# This file was auto-generated with sensible defaults.
#

# =============================================================================
# Localization
# =============================================================================

[i18n]
# Base locale. Must be installed in languages_dir unless it is en_US.
locale = "en_US"

# Directory holding <locale>.mo core catalogs and plugins/<domain>-<locale>.mo
# languages_dir = "~/.local/share/lingua/languages"

# =============================================================================
# Dates and Times
# =============================================================================

[time]
# IANA timezone; when set it takes priority over gmt_offset
# timezone_string = "Europe/Madrid"

# Offset from UTC in hours
gmt_offset = 0.0

# First day of the week: 0 = Sunday, 1 = Monday
start_of_week = 1

date_format = "F j, Y"
time_format = "g:i a"

# =============================================================================
# Logging Configuration
# =============================================================================

[logging]
# Log level: error, warn, info, debug, trace
level = "info"

# Log format: pretty, json, compact
format = "pretty"
"#;

/// Ensure the config directory exists and create a default config file if none exists.
///
/// Returns `true` if a new config file was created, `false` if one already existed.
pub fn ensure_default_config(config_file_path: &Path) -> Result<bool, ConfigError> {
	if config_file_path.exists() {
		debug!(path = %config_file_path.display(), "config file already exists");
		return Ok(false);
	}

	if let Some(parent) = config_file_path.parent() {
		if !parent.exists() {
			debug!(path = %parent.display(), "creating config directory");
			fs::create_dir_all(parent)?;
		}
	}

	info!(path = %config_file_path.display(), "creating default config file");
	fs::write(config_file_path, DEFAULT_CONFIG_TEMPLATE)?;

	Ok(true)
}
