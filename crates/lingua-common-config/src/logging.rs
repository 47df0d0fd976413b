// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup driven by [`LoggingConfig`].

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::runtime::{LogFormat, LoggingConfig};
use crate::ConfigError;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to the configured
/// file (appended) or stderr. Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

	let writer = match config.file {
		Some(ref path) => {
			let file = OpenOptions::new().create(true).append(true).open(path)?;
			BoxMakeWriter::new(Mutex::new(file))
		}
		None => BoxMakeWriter::new(std::io::stderr),
	};

	let registry = tracing_subscriber::registry().with(filter);
	let result = match config.format {
		LogFormat::Json => registry
			.with(tracing_subscriber::fmt::layer().json().with_writer(writer))
			.try_init(),
		LogFormat::Compact => registry
			.with(tracing_subscriber::fmt::layer().compact().with_writer(writer))
			.try_init(),
		LogFormat::Pretty => registry
			.with(tracing_subscriber::fmt::layer().pretty().with_writer(writer))
			.try_init(),
	};

	result.map_err(|e| ConfigError::Logging(e.to_string()))
}
