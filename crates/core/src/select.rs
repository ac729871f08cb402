//! Format selection: binds a user-chosen key to the registry.
//!
//! This is the boundary the hosts (CLI, extension popup) call into. An
//! unknown key is reported as [`CodecError::UnknownFormat`] before any text
//! is produced, so callers never write a partial file or clipboard entry.

use cj_protocol::CookieRecord;
use url::Url;

use crate::error::{CodecError, Result};
use crate::format::{self, DEFAULT_FORMAT, Format, MalformedFieldWarning};

/// Serialized cookies and the format that produced them.
#[derive(Debug)]
pub struct Export {
	pub text: String,
	pub format: &'static Format,
	/// Fields the format could not represent faithfully
	pub warnings: Vec<MalformedFieldWarning>,
}

impl Export {
	/// File name for this export: `<basename><ext>`.
	pub fn filename(&self, basename: &str) -> String {
		format!("{basename}{}", self.format.ext)
	}
}

/// Looks up `key`, failing with [`CodecError::UnknownFormat`].
pub fn format(key: &str) -> Result<&'static Format> {
	format::lookup(key).ok_or_else(|| CodecError::UnknownFormat(key.to_string()))
}

/// Serializes `cookies` with the format registered as `key`.
pub fn export(key: &str, cookies: &[CookieRecord]) -> Result<Export> {
	let format = format(key)?;

	let warnings = format.check(cookies);
	for warning in &warnings {
		tracing::warn!(target = "cookiejar", "{warning}");
	}

	let text = format.serialize(cookies);
	tracing::debug!(target = "cookiejar", format = format.key, count = cookies.len(), bytes = text.len(), "serialized cookies");

	Ok(Export { text, format, warnings })
}

/// Parses `text` with the format registered as `key`.
pub fn import(key: &str, text: &str) -> Result<Vec<CookieRecord>> {
	let format = format(key)?;
	let cookies = format
		.deserialize(text)
		.ok_or(CodecError::WriteOnly(format.key))??;
	tracing::debug!(target = "cookiejar", format = format.key, count = cookies.len(), "parsed cookies");
	Ok(cookies)
}

/// Picks the format key: an explicit choice, then the stored preference,
/// then [`DEFAULT_FORMAT`]. The result is not validated here; pass it to
/// [`export`] or [`format`].
pub fn resolve_key<'a>(explicit: Option<&'a str>, stored: Option<&'a str>) -> &'a str {
	explicit.or(stored).unwrap_or(DEFAULT_FORMAT)
}

/// Download base name: `<host>_cookies` for a tab, `cookies` for everything.
pub fn basename(url: Option<&Url>) -> String {
	match url.and_then(Url::host_str) {
		Some(host) => format!("{host}_cookies"),
		None => "cookies".to_string(),
	}
}
