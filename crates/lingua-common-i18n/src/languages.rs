// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Installed languages.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Core catalogs that are not languages of their own.
const EXCLUDED_PREFIXES: &[&str] = &["continents-cities", "ms-", "admin-"];

/// Answers which locales are installed and where their core catalog lives.
pub trait LanguageSource: Send + Sync {
	fn available_locales(&self) -> BTreeSet<String>;

	/// Location of the `default` domain catalog for `locale`.
	fn default_catalog_path(&self, locale: &str) -> PathBuf;

	fn is_available(&self, locale: &str) -> bool {
		self.available_locales().contains(locale)
	}
}

/// A directory of `<locale>.mo` core catalogs.
///
/// Domain catalogs conventionally live under `plugins/` and are not scanned.
#[derive(Debug, Clone)]
pub struct LanguageDirectory {
	root: PathBuf,
}

impl LanguageDirectory {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}
}

impl LanguageSource for LanguageDirectory {
	/// Rescans the directory on every call so newly installed catalogs show up.
	fn available_locales(&self) -> BTreeSet<String> {
		let entries = match fs::read_dir(&self.root) {
			Ok(entries) => entries,
			Err(e) => {
				debug!(root = %self.root.display(), error = %e, "languages directory unreadable");
				return BTreeSet::new();
			}
		};

		entries
			.filter_map(Result::ok)
			.map(|entry| entry.path())
			.filter(|path| path.is_file())
			.filter(|path| path.extension().is_some_and(|ext| ext == "mo"))
			.filter_map(|path| {
				path
					.file_stem()
					.and_then(|stem| stem.to_str())
					.map(str::to_string)
			})
			.filter(|stem| !EXCLUDED_PREFIXES.iter().any(|p| stem.starts_with(p)))
			.collect()
	}

	fn default_catalog_path(&self, locale: &str) -> PathBuf {
		self.root.join(format!("{locale}.mo"))
	}
}
