// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Failures while loading, validating or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// A setting parsed but is out of range or malformed.
	#[error("Invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },

	#[error("Could not determine home directory")]
	HomeDirNotFound,

	/// The tracing subscriber could not be installed.
	#[error("Logging setup failed: {0}")]
	Logging(String),
}

impl ConfigError {
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_value_message() {
		let err = ConfigError::invalid_value("time.start_of_week", "must be between 0 and 6");
		assert_eq!(
			err.to_string(),
			"Invalid value for time.start_of_week: must be between 0 and 6"
		);
	}

	#[test]
	fn test_io_errors_convert() {
		let err: ConfigError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
		assert!(matches!(err, ConfigError::Io(_)));
	}
}
