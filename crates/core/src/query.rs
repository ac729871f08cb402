//! Cookie selection for a [`CookieQuery`].
//!
//! Applies the same rules the browser uses for `cookies.getAll`, so a full
//! cookie dump can be narrowed to "the cookies of this tab" without asking
//! the browser again.

use cj_protocol::{CookieQuery, CookieRecord, PartitionKey};
use url::Url;

use crate::error::QueryError;

/// Builds the query for the cookies visible to a tab at `url`.
///
/// Includes the tab's own CHIPS partition, keyed by the URL's origin.
pub fn for_tab(url: &Url) -> CookieQuery {
	CookieQuery::url(url.as_str())
		.partition_key(PartitionKey::top_level_site(url.origin().ascii_serialization()))
}

/// A [`CookieQuery`] with its URL parsed once.
#[derive(Debug, Clone)]
pub struct CookieFilter {
	url: Option<Url>,
	partition_key: Option<PartitionKey>,
	store_id: Option<String>,
}

impl CookieFilter {
	pub fn new(query: &CookieQuery) -> Result<Self, QueryError> {
		let url = query
			.url
			.as_deref()
			.map(|raw| {
				Url::parse(raw).map_err(|source| QueryError::InvalidUrl {
					url: raw.to_string(),
					source,
				})
			})
			.transpose()?;

		Ok(Self {
			url,
			partition_key: query.partition_key.clone(),
			store_id: query.store_id.clone(),
		})
	}

	/// Whether `cookie` is part of the query result.
	pub fn matches(&self, cookie: &CookieRecord) -> bool {
		if let Some(ref store_id) = self.store_id {
			if cookie.store_id.as_ref() != Some(store_id) {
				return false;
			}
		}

		if !self.partition_matches(cookie.partition_key.as_ref()) {
			return false;
		}

		match self.url {
			Some(ref url) => url_matches(url, cookie),
			None => true,
		}
	}

	/// Keeps matching cookies, preserving order.
	pub fn apply(&self, cookies: &[CookieRecord]) -> Vec<CookieRecord> {
		cookies.iter().filter(|c| self.matches(c)).cloned().collect()
	}

	fn partition_matches(&self, cookie: Option<&PartitionKey>) -> bool {
		match (&self.partition_key, cookie) {
			(None, None) => true,
			(None, Some(_)) => false,
			(Some(query), _) if query.top_level_site.is_none() => true,
			(Some(_), None) => true,
			(Some(query), Some(cookie)) => query.top_level_site == cookie.top_level_site,
		}
	}
}

/// Filters `cookies` by `query`.
pub fn select(cookies: &[CookieRecord], query: &CookieQuery) -> Result<Vec<CookieRecord>, QueryError> {
	let filter = CookieFilter::new(query)?;
	let selected = filter.apply(cookies);
	tracing::debug!(
		target = "cookiejar",
		url = ?query.url,
		total = cookies.len(),
		selected = selected.len(),
		"filtered cookies"
	);
	Ok(selected)
}

fn url_matches(url: &Url, cookie: &CookieRecord) -> bool {
	let Some(host) = url.host_str() else {
		return false;
	};

	if cookie.secure && !matches!(url.scheme(), "https" | "wss") {
		return false;
	}

	domain_matches(&cookie.domain, host) && path_matches(&cookie.path, url.path())
}

/// Host-only cookies need an exact host; domain cookies also match subdomains.
fn domain_matches(cookie_domain: &str, host: &str) -> bool {
	let host = host.trim_end_matches('.');
	match cookie_domain.strip_prefix('.') {
		Some(domain) => {
			host.eq_ignore_ascii_case(domain)
				|| (host.len() > domain.len()
					&& host.as_bytes()[host.len() - domain.len() - 1] == b'.'
					&& host[host.len() - domain.len()..].eq_ignore_ascii_case(domain))
		}
		None => host.eq_ignore_ascii_case(cookie_domain),
	}
}

/// RFC 6265 section 5.1.4 path-match.
fn path_matches(cookie_path: &str, request_path: &str) -> bool {
	if cookie_path == request_path {
		return true;
	}
	request_path.starts_with(cookie_path)
		&& (cookie_path.ends_with('/') || request_path.as_bytes().get(cookie_path.len()) == Some(&b'/'))
}
