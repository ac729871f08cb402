//! Netscape cookie-jar format (`cookies.txt`), as read by curl and wget.
//!
//! Each cookie is one line of seven tab-separated fields:
//! `domain\tinclude_subdomains\tpath\tsecure\texpiry\tname\tvalue`.
//!
//! The format has no escape mechanism. A tab or newline inside a name or
//! value produces a malformed line; see [`Format::check`](super::Format::check).
//!
//! [`row`] is the single place the seven fields are derived. The text
//! serializer and the table display ([`rows`]) both go through it.

use cj_protocol::{CookieRecord, SameSite};

use crate::error::FormatError;

/// Comment block written before the first cookie line.
pub const FILE_HEADER: &str = "# Netscape HTTP Cookie File\n\
	# https://curl.haxx.se/rfc/cookie_spec.html\n\
	# This is a generated file! Do not edit.\n\n";

/// Marker curl puts in front of the domain of HTTP-only cookies.
pub const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// Column titles, in field order.
pub const COLUMNS: [&str; 7] = [
	"domain",
	"includeSubdomains",
	"path",
	"secure",
	"expiration",
	"name",
	"value",
];

/// One cookie rendered as its seven display strings.
pub type NetscapeRow = [String; 7];

/// Derives the seven Netscape fields of `cookie`.
pub fn row(cookie: &CookieRecord) -> NetscapeRow {
	[
		cookie.domain.clone(),
		flag(cookie.includes_subdomains()).to_string(),
		cookie.path.clone(),
		flag(cookie.secure).to_string(),
		expiration(cookie),
		cookie.name.clone(),
		cookie.value.clone(),
	]
}

/// Rows for table display, one per cookie, in input order.
pub fn rows(cookies: &[CookieRecord]) -> Vec<NetscapeRow> {
	cookies.iter().map(row).collect()
}

/// Renders a cookie-jar file. Empty input yields an empty string.
pub fn serialize(cookies: &[CookieRecord]) -> String {
	if cookies.is_empty() {
		return String::new();
	}

	let mut out = String::from(FILE_HEADER);
	for cookie in cookies {
		out.push_str(&row(cookie).join("\t"));
		out.push('\n');
	}
	out
}

/// Parses a cookie-jar file.
///
/// Blank lines and `#` comments are skipped, except for the `#HttpOnly_`
/// domain prefix which marks the cookie HTTP-only. An expiry of `0` is a
/// session cookie. Netscape files carry no SameSite information, so every
/// imported cookie is [`SameSite::Unspecified`].
pub fn deserialize(text: &str) -> Result<Vec<CookieRecord>, FormatError> {
	let mut cookies = Vec::new();

	for (idx, raw) in text.lines().enumerate() {
		let line = raw.strip_suffix('\r').unwrap_or(raw);
		if line.trim().is_empty() {
			continue;
		}

		let (line, http_only) = match line.strip_prefix(HTTP_ONLY_PREFIX) {
			Some(rest) => (rest, true),
			None if line.starts_with('#') => continue,
			None => (line, false),
		};

		let cookie = parse_line(line, http_only).map_err(|reason| FormatError::Line {
			line: idx + 1,
			reason,
		})?;
		cookies.push(cookie);
	}

	Ok(cookies)
}

fn parse_line(line: &str, http_only: bool) -> Result<CookieRecord, String> {
	let fields: Vec<&str> = line.split('\t').collect();
	let [domain, include_subdomains, path, secure, expiry, name, value] = fields[..] else {
		return Err(format!("expected 7 tab-separated fields, found {}", fields.len()));
	};

	if domain.is_empty() {
		return Err("empty domain".into());
	}
	if name.is_empty() {
		return Err("empty cookie name".into());
	}

	let include_subdomains = parse_flag("includeSubdomains", include_subdomains)?;
	let domain = if include_subdomains && !domain.starts_with('.') {
		format!(".{domain}")
	} else {
		domain.to_string()
	};

	let expiry: i64 = expiry
		.trim()
		.parse()
		.map_err(|_| format!("invalid expiration '{expiry}'"))?;

	Ok(CookieRecord {
		name: name.to_string(),
		value: value.to_string(),
		domain,
		path: if path.is_empty() { "/".to_string() } else { path.to_string() },
		secure: parse_flag("secure", secure)?,
		http_only,
		session: expiry == 0,
		expiration_date: (expiry != 0).then_some(expiry as f64),
		same_site: SameSite::Unspecified,
		store_id: None,
		partition_key: None,
	})
}

fn flag(value: bool) -> &'static str {
	if value { "TRUE" } else { "FALSE" }
}

fn parse_flag(field: &str, value: &str) -> Result<bool, String> {
	if value.eq_ignore_ascii_case("TRUE") {
		Ok(true)
	} else if value.eq_ignore_ascii_case("FALSE") {
		Ok(false)
	} else {
		Err(format!("{field} must be TRUE or FALSE, got '{value}'"))
	}
}

/// Whole seconds, `0` for session cookies.
fn expiration(cookie: &CookieRecord) -> String {
	match cookie.expiration_date {
		Some(ts) if !cookie.session => (ts.floor() as i64).to_string(),
		_ => "0".to_string(),
	}
}
