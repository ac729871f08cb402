//! Format registry.
//!
//! The set of formats is closed: every [`Format`] is declared once in
//! [`REGISTRY`] and looked up by key. A format bundles its file metadata
//! with a serializer and, for formats that can be imported, a deserializer.
//!
//! | Key | Extension | Import |
//! |-----|-----------|--------|
//! | `netscape` | `.txt` | yes |
//! | `json` | `.json` | yes |
//! | `header` | `.txt` | no |
//! | `set-cookie` | `.txt` | no |

pub mod header;
pub mod json;
pub mod netscape;
pub mod set_cookie;

#[cfg(test)]
mod tests;

use cj_protocol::CookieRecord;

use crate::error::FormatError;

/// Serializes a cookie list. Total for well-formed input.
pub type Serializer = fn(&[CookieRecord]) -> String;

/// Parses text back into cookie records, all-or-nothing.
pub type Deserializer = fn(&str) -> Result<Vec<CookieRecord>, FormatError>;

/// Key used when neither the caller nor the stored preference names one.
pub const DEFAULT_FORMAT: &str = "netscape";

/// A registered conversion pair.
#[derive(Debug)]
pub struct Format {
	/// Identifier, matches the option value in a format picker
	pub key: &'static str,
	/// Human-readable label
	pub label: &'static str,
	/// File extension including the leading dot
	pub ext: &'static str,
	/// MIME type for downloads
	pub mime_type: &'static str,
	pub serializer: Serializer,
	/// Present only for formats that support import
	pub deserializer: Option<Deserializer>,
	/// Characters the format has no way to escape inside a name or value
	pub unescapable: &'static [char],
}

impl Format {
	/// Serializes `cookies` with this format.
	pub fn serialize(&self, cookies: &[CookieRecord]) -> String {
		(self.serializer)(cookies)
	}

	/// Parses `text`, or [`None`] if the format is write-only.
	pub fn deserialize(&self, text: &str) -> Option<Result<Vec<CookieRecord>, FormatError>> {
		self.deserializer.map(|parse| parse(text))
	}

	pub fn is_importable(&self) -> bool {
		self.deserializer.is_some()
	}

	/// Finds names and values this format cannot represent faithfully.
	///
	/// Output is still produced for such cookies; the result only reports
	/// which lines will be ambiguous.
	pub fn check(&self, cookies: &[CookieRecord]) -> Vec<MalformedFieldWarning> {
		if self.unescapable.is_empty() {
			return Vec::new();
		}

		cookies
			.iter()
			.enumerate()
			.flat_map(|(index, cookie)| {
				[(Field::Name, &cookie.name), (Field::Value, &cookie.value)]
					.into_iter()
					.filter_map(move |(field, text)| {
						text.chars()
							.find(|c| self.unescapable.contains(c))
							.map(|separator| MalformedFieldWarning {
								format: self.key,
								index,
								cookie: cookie.name.clone(),
								field,
								separator,
							})
					})
			})
			.collect()
	}
}

/// Cookie field named in a [`MalformedFieldWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Name,
	Value,
}

impl std::fmt::Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Field::Name => write!(f, "name"),
			Field::Value => write!(f, "value"),
		}
	}
}

/// A name or value containing a separator the target format cannot escape.
///
/// Non-fatal: the export goes ahead and the affected line is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedFieldWarning {
	pub format: &'static str,
	/// Position of the cookie in the exported list
	pub index: usize,
	/// Cookie name, for display
	pub cookie: String,
	pub field: Field,
	pub separator: char,
}

impl std::fmt::Display for MalformedFieldWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"cookie[{}] {:?}: {} contains {:?}, which the {} format cannot escape",
			self.index, self.cookie, self.field, self.separator, self.format
		)
	}
}

/// All formats, in presentation order.
pub static REGISTRY: [Format; 4] = [
	Format {
		key: "netscape",
		label: "Netscape HTTP Cookie File",
		ext: ".txt",
		mime_type: "text/plain",
		serializer: netscape::serialize,
		deserializer: Some(netscape::deserialize),
		unescapable: &['\t', '\n', '\r'],
	},
	Format {
		key: "json",
		label: "JSON",
		ext: ".json",
		mime_type: "application/json",
		serializer: json::serialize,
		deserializer: Some(json::deserialize),
		unescapable: &[],
	},
	Format {
		key: "header",
		label: "Cookie header",
		ext: ".txt",
		mime_type: "text/plain",
		serializer: header::serialize,
		deserializer: None,
		unescapable: &[';', '\n', '\r'],
	},
	Format {
		key: "set-cookie",
		label: "Set-Cookie headers",
		ext: ".txt",
		mime_type: "text/plain",
		serializer: set_cookie::serialize,
		deserializer: None,
		unescapable: &[';', '\n', '\r'],
	},
];

/// Returns the format registered under `key`.
pub fn lookup(key: &str) -> Option<&'static Format> {
	REGISTRY.iter().find(|format| format.key == key)
}

/// Returns every format in registration order.
pub fn list() -> &'static [Format] {
	&REGISTRY
}
