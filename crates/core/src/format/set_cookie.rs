//! `Set-Cookie` response header values, one per line.
//!
//! Write-only. Each line carries the attributes a server would send to
//! recreate the cookie: `Domain`, `Path`, `Expires`, `Secure`, `HttpOnly`
//! and `SameSite`.

use cj_protocol::{CookieRecord, SameSite};
use cookie::Cookie;
use time::OffsetDateTime;

/// One header value per cookie, newline-terminated. Empty input yields an
/// empty string.
pub fn serialize(cookies: &[CookieRecord]) -> String {
	let mut out = String::new();
	for record in cookies {
		out.push_str(&line(record));
		out.push('\n');
	}
	out
}

/// Renders a single `Set-Cookie` value (without the header name).
pub fn line(record: &CookieRecord) -> String {
	let mut builder = Cookie::build((record.name.as_str(), record.value.as_str()))
		.domain(record.domain.as_str())
		.path(record.path.as_str())
		.secure(record.secure)
		.http_only(record.http_only);

	if let Some(expires) = expires(record) {
		builder = builder.expires(expires);
	}
	if let Some(same_site) = same_site(record.same_site) {
		builder = builder.same_site(same_site);
	}

	builder.build().to_string()
}

fn expires(record: &CookieRecord) -> Option<OffsetDateTime> {
	if record.session {
		return None;
	}
	let secs = record.expiration_date?.floor() as i64;
	match OffsetDateTime::from_unix_timestamp(secs) {
		Ok(at) => Some(at),
		Err(err) => {
			tracing::warn!(target = "cookiejar", cookie = %record.name, secs, error = %err, "expiry out of range, writing without Expires");
			None
		}
	}
}

fn same_site(same_site: SameSite) -> Option<cookie::SameSite> {
	match same_site {
		SameSite::NoRestriction => Some(cookie::SameSite::None),
		SameSite::Lax => Some(cookie::SameSite::Lax),
		SameSite::Strict => Some(cookie::SameSite::Strict),
		SameSite::Unspecified => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_all_attributes() {
		let record = CookieRecord::new("sid", "abc", ".example.com")
			.path("/app")
			.secure(true)
			.http_only(true)
			.same_site(SameSite::Strict)
			.expires(1_700_000_000.9);

		let line = line(&record);
		assert!(line.starts_with("sid=abc"), "{line}");
		assert!(line.contains("Domain=example.com"), "{line}");
		assert!(line.contains("Path=/app"), "{line}");
		assert!(line.contains("Secure"), "{line}");
		assert!(line.contains("HttpOnly"), "{line}");
		assert!(line.contains("SameSite=Strict"), "{line}");
		assert!(line.contains("Expires=Tue, 14 Nov 2023 22:13:20 GMT"), "{line}");
	}

	#[test]
	fn session_cookie_has_no_expires() {
		let line = line(&CookieRecord::new("a", "1", "example.com"));
		assert!(!line.contains("Expires"), "{line}");
		assert!(!line.contains("SameSite"), "{line}");
		assert!(!line.contains("Secure"), "{line}");
	}

	#[test]
	fn no_restriction_maps_to_none_without_forcing_secure() {
		let record = CookieRecord::new("ad", "1", ".ads.example").same_site(SameSite::NoRestriction);

		let line = line(&record);
		assert!(line.contains("SameSite=None"), "{line}");
		assert!(!line.contains("Secure"), "{line}");
	}

	#[test]
	fn lax_is_written() {
		let record = CookieRecord::new("pref", "dark", "example.com")
			.secure(true)
			.same_site(SameSite::Lax);

		let line = line(&record);
		assert!(line.contains("SameSite=Lax"), "{line}");
		assert!(line.contains("Secure"), "{line}");
	}

	#[test]
	fn one_line_per_cookie() {
		let cookies = [
			CookieRecord::new("a", "1", "example.com"),
			CookieRecord::new("b", "2", "example.com"),
		];
		let text = serialize(&cookies);
		assert_eq!(text.lines().count(), 2);
		assert!(text.ends_with('\n'));
	}

	#[test]
	fn empty_is_empty() {
		assert_eq!(serialize(&[]), "");
	}
}
