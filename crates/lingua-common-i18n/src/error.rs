// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog loading and locale switching.

use std::path::PathBuf;

/// Errors raised while loading a translation catalog.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse catalog {path}: {source}")]
	CatalogParse {
		path: PathBuf,
		#[source]
		source: gettext::Error,
	},

	#[error("catalog not found: {0}")]
	CatalogNotFound(PathBuf),
}

/// Reasons a locale switch or restore was refused.
///
/// A refused operation never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwitchError {
	/// The requested locale is not installed.
	#[error("locale '{0}' is not available")]
	UnavailableLocale(String),

	/// No catalog has been loaded yet, so there is nothing to switch.
	#[error("no translations are active")]
	NoActiveTranslations,

	/// `restore` was called without a preceding switch.
	#[error("no locale switch to restore")]
	EmptyStack,
}

pub type I18nResult<T> = Result<T, I18nError>;
pub type SwitchResult<T> = Result<T, SwitchError>;
