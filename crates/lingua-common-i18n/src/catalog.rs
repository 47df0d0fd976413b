// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gettext catalog loading.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{I18nError, I18nResult};

/// Translations for one text domain in one locale.
///
/// A no-op catalog returns every msgid unchanged. It may still remember the
/// file it was meant to be read from.
pub struct Catalog {
	domain: String,
	source: Option<PathBuf>,
	inner: gettext::Catalog,
	noop: bool,
}

/// Shared handle to a loaded catalog.
///
/// Handles are cheap to clone, which is what lets the switcher snapshot the
/// live registry without copying translations.
pub type CatalogHandle = Arc<Catalog>;

impl Catalog {
	/// A catalog that translates nothing.
	pub fn empty(domain: &str) -> Self {
		Self {
			domain: domain.to_string(),
			source: None,
			inner: gettext::Catalog::empty(),
			noop: true,
		}
	}

	/// A no-op catalog standing in for `path`, which could not be loaded.
	pub fn unresolved(domain: &str, path: &Path) -> Self {
		Self {
			source: Some(path.to_path_buf()),
			..Self::empty(domain)
		}
	}

	/// Parse a GNU `.mo` stream.
	pub fn parse<R: Read>(
		domain: &str,
		source: Option<PathBuf>,
		reader: R,
	) -> Result<Self, gettext::Error> {
		Ok(Self {
			domain: domain.to_string(),
			source,
			inner: gettext::Catalog::parse(reader)?,
			noop: false,
		})
	}

	/// Load a `.mo` file from disk.
	pub fn from_file(domain: &str, path: &Path) -> I18nResult<Self> {
		if !path.is_file() {
			return Err(I18nError::CatalogNotFound(path.to_path_buf()));
		}

		let file = File::open(path)?;
		Self::parse(domain, Some(path.to_path_buf()), BufReader::new(file)).map_err(|source| {
			I18nError::CatalogParse {
				path: path.to_path_buf(),
				source,
			}
		})
	}

	pub fn domain(&self) -> &str {
		&self.domain
	}

	/// The file this catalog was (or should have been) read from.
	pub fn source_path(&self) -> Option<&Path> {
		self.source.as_deref()
	}

	pub fn is_noop(&self) -> bool {
		self.noop
	}

	pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
		self.inner.gettext(msgid)
	}

	pub fn pgettext<'a>(&'a self, context: &'a str, msgid: &'a str) -> &'a str {
		self.inner.pgettext(context, msgid)
	}

	pub fn ngettext<'a>(&'a self, msgid: &'a str, msgid_plural: &'a str, n: u64) -> &'a str {
		self.inner.ngettext(msgid, msgid_plural, n)
	}
}

impl fmt::Debug for Catalog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Catalog")
			.field("domain", &self.domain)
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

/// Loads catalogs from their backing storage.
pub trait CatalogLoader: Send + Sync {
	fn load(&self, domain: &str, path: &Path) -> I18nResult<Catalog>;
}

/// Loader reading GNU `.mo` files from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoFileLoader;

impl CatalogLoader for MoFileLoader {
	fn load(&self, domain: &str, path: &Path) -> I18nResult<Catalog> {
		debug!(domain, path = %path.display(), "loading catalog");
		Catalog::from_file(domain, path)
	}
}

/// Path of the same domain catalog for another locale.
///
/// `shop-es_ES.mo` becomes `shop-fr_FR.mo` in the same directory. Files not
/// named after their domain are returned unchanged.
pub fn relocalize_path(path: &Path, domain: &str, to: &str) -> PathBuf {
	let prefix = format!("{domain}-");
	let named_after_domain = path
		.file_stem()
		.and_then(|stem| stem.to_str())
		.is_some_and(|stem| stem.starts_with(&prefix));

	if !named_after_domain {
		return path.to_path_buf();
	}

	let extension = path
		.extension()
		.and_then(|ext| ext.to_str())
		.unwrap_or("mo");
	path.with_file_name(format!("{domain}-{to}.{extension}"))
}
