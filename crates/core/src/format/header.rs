//! `Cookie:` request header value.
//!
//! Write-only: domain, path, flags and expiry are dropped, so the text
//! cannot be turned back into records. Names and values are written as-is;
//! a `;` inside either makes the header ambiguous.

use cj_protocol::CookieRecord;

/// Joins cookies as `name1=value1; name2=value2` in input order.
pub fn serialize(cookies: &[CookieRecord]) -> String {
	cookies
		.iter()
		.map(|cookie| format!("{}={}", cookie.name, cookie.value))
		.collect::<Vec<_>>()
		.join("; ")
}
