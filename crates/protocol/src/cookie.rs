//! Cookie record as exposed by the browser's cookie store.

use serde::{Deserialize, Serialize};

/// SameSite cookie attribute, using the `chrome.cookies.SameSiteStatus` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameSite {
	/// Cookie is sent with same-site and cross-site requests (`SameSite=None`)
	NoRestriction,
	/// Cookie is sent with same-site requests and cross-site top-level navigations
	Lax,
	/// Cookie is only sent with same-site requests
	Strict,
	/// No SameSite attribute was set
	#[default]
	Unspecified,
}

impl SameSite {
	/// Platform name of this status (`"no_restriction"`, `"lax"`, ...).
	pub fn as_str(&self) -> &'static str {
		match self {
			SameSite::NoRestriction => "no_restriction",
			SameSite::Lax => "lax",
			SameSite::Strict => "strict",
			SameSite::Unspecified => "unspecified",
		}
	}
}

impl std::fmt::Display for SameSite {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Partition a cookie belongs to (CHIPS).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionKey {
	/// Top-level site the partitioned cookie is available to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub top_level_site: Option<String>,
	/// Whether the cookie was set in a cross-site frame tree.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub has_cross_site_ancestor: Option<bool>,
}

impl PartitionKey {
	/// Partition key scoped to `site` (an origin such as `https://example.com`).
	pub fn top_level_site(site: impl Into<String>) -> Self {
		Self {
			top_level_site: Some(site.into()),
			has_cross_site_ancestor: None,
		}
	}
}

/// A browser cookie.
///
/// Matches `chrome.cookies.Cookie`. `store_id` and `partition_key` are read
/// from platform input for query scoping but never written back out: no
/// exported format carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
	/// Cookie name
	pub name: String,

	/// Cookie value (may be empty)
	pub value: String,

	/// Host or domain; a leading `.` means the cookie is sent to subdomains
	pub domain: String,

	/// URL path the cookie is valid for
	pub path: String,

	/// Whether the cookie requires HTTPS
	pub secure: bool,

	/// Whether the cookie is inaccessible to JavaScript
	pub http_only: bool,

	/// True iff `expiration_date` is absent
	pub session: bool,

	/// Unix timestamp in seconds, fractional part allowed
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expiration_date: Option<f64>,

	/// SameSite status
	pub same_site: SameSite,

	/// Cookie store the record was read from
	#[serde(default, skip_serializing)]
	pub store_id: Option<String>,

	/// CHIPS partition, if the cookie is partitioned
	#[serde(default, skip_serializing)]
	pub partition_key: Option<PartitionKey>,
}

impl CookieRecord {
	/// Creates a session cookie on path `/` with all flags cleared.
	pub fn new(
		name: impl Into<String>,
		value: impl Into<String>,
		domain: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			domain: domain.into(),
			path: "/".to_string(),
			secure: false,
			http_only: false,
			session: true,
			expiration_date: None,
			same_site: SameSite::Unspecified,
			store_id: None,
			partition_key: None,
		}
	}

	/// Sets the path.
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	/// Sets the expiration timestamp, which also makes this a persistent cookie.
	pub fn expires(mut self, expiration_date: f64) -> Self {
		self.expiration_date = Some(expiration_date);
		self.session = false;
		self
	}

	/// Sets whether the cookie requires HTTPS.
	pub fn secure(mut self, secure: bool) -> Self {
		self.secure = secure;
		self
	}

	/// Sets whether the cookie is HTTP-only.
	pub fn http_only(mut self, http_only: bool) -> Self {
		self.http_only = http_only;
		self
	}

	/// Sets the SameSite status.
	pub fn same_site(mut self, same_site: SameSite) -> Self {
		self.same_site = same_site;
		self
	}

	/// Sets the cookie store id.
	pub fn store_id(mut self, store_id: impl Into<String>) -> Self {
		self.store_id = Some(store_id.into());
		self
	}

	/// Sets the partition key.
	pub fn partition_key(mut self, partition_key: PartitionKey) -> Self {
		self.partition_key = Some(partition_key);
		self
	}

	/// Whether the domain is domain-scoped (leading `.`).
	pub fn includes_subdomains(&self) -> bool {
		self.domain.starts_with('.')
	}

	/// Domain without the leading `.`.
	pub fn host(&self) -> &str {
		self.domain.trim_start_matches('.')
	}
}
