// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test harness for translation catalogs.
//!
//! Builds binary GNU `.mo` catalogs in memory and lays them out on disk the
//! way a language directory expects, so tests never depend on `msgfmt`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const MO_MAGIC: u32 = 0x9504_12de;
const MO_HEADER_LEN: u32 = 28;
const CONTEXT_SEPARATOR: char = '\u{4}';

const DEFAULT_HEADER: &str = "Content-Type: text/plain; charset=UTF-8\n\
	Plural-Forms: nplurals=2; plural=(n != 1);\n";

/// In-memory builder for a `.mo` catalog.
#[derive(Debug, Clone, Default)]
pub struct MoBuilder {
	entries: Vec<(String, String)>,
}

impl MoBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a plain `msgid` → `msgstr` pair.
	pub fn message(mut self, msgid: &str, msgstr: &str) -> Self {
		self.entries.push((msgid.to_string(), msgstr.to_string()));
		self
	}

	/// Adds a message scoped by `msgctxt`.
	pub fn with_context(mut self, context: &str, msgid: &str, msgstr: &str) -> Self {
		self
			.entries
			.push((format!("{context}{CONTEXT_SEPARATOR}{msgid}"), msgstr.to_string()));
		self
	}

	/// Adds a plural message; `forms` are the translated plural forms in order.
	pub fn plural(mut self, msgid: &str, msgid_plural: &str, forms: &[&str]) -> Self {
		self
			.entries
			.push((format!("{msgid}\0{msgid_plural}"), forms.join("\0")));
		self
	}

	/// Serializes the catalog (little endian, no hash table).
	pub fn build(&self) -> Vec<u8> {
		let mut entries: Vec<(String, String)> = Vec::with_capacity(self.entries.len() + 1);
		entries.push((String::new(), DEFAULT_HEADER.to_string()));
		entries.extend(self.entries.iter().cloned());
		entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
		entries.dedup_by(|a, b| a.0 == b.0);

		let count = entries.len() as u32;
		let originals_offset = MO_HEADER_LEN;
		let translations_offset = originals_offset + count * 8;
		let mut string_offset = translations_offset + count * 8;

		let mut originals_table = Vec::new();
		let mut translations_table = Vec::new();
		let mut strings = Vec::new();

		for (msgid, _) in &entries {
			originals_table.extend_from_slice(&(msgid.len() as u32).to_le_bytes());
			originals_table.extend_from_slice(&string_offset.to_le_bytes());
			strings.extend_from_slice(msgid.as_bytes());
			strings.push(0);
			string_offset += msgid.len() as u32 + 1;
		}
		for (_, msgstr) in &entries {
			translations_table.extend_from_slice(&(msgstr.len() as u32).to_le_bytes());
			translations_table.extend_from_slice(&string_offset.to_le_bytes());
			strings.extend_from_slice(msgstr.as_bytes());
			strings.push(0);
			string_offset += msgstr.len() as u32 + 1;
		}

		let mut out = Vec::with_capacity(string_offset as usize);
		for word in [
			MO_MAGIC,
			0,
			count,
			originals_offset,
			translations_offset,
			0,
			string_offset,
		] {
			out.extend_from_slice(&word.to_le_bytes());
		}
		out.extend_from_slice(&originals_table);
		out.extend_from_slice(&translations_table);
		out.extend_from_slice(&strings);
		out
	}
}

/// A temporary language directory.
///
/// Core catalogs live at `<root>/<locale>.mo`, domain catalogs at
/// `<root>/plugins/<domain>-<locale>.mo`.
pub struct LanguageDirFixture {
	dir: TempDir,
}

impl LanguageDirFixture {
	pub fn new() -> Self {
		Self {
			dir: TempDir::new().expect("failed to create temp language dir"),
		}
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	/// Writes the core catalog for `locale`.
	pub fn write_core(&self, locale: &str, catalog: &MoBuilder) -> PathBuf {
		self.write_raw(&format!("{locale}.mo"), &catalog.build())
	}

	/// Writes a domain catalog for `locale` under `plugins/`.
	pub fn write_domain(&self, domain: &str, locale: &str, catalog: &MoBuilder) -> PathBuf {
		self.write_raw(&format!("plugins/{domain}-{locale}.mo"), &catalog.build())
	}

	/// Writes arbitrary bytes relative to the directory root.
	pub fn write_raw(&self, relative: &str, bytes: &[u8]) -> PathBuf {
		let path = self.dir.path().join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("failed to create fixture directory");
		}
		fs::write(&path, bytes).expect("failed to write fixture file");
		path
	}
}

impl Default for LanguageDirFixture {
	fn default() -> Self {
		Self::new()
	}
}
