//! Lossless JSON format.
//!
//! Cookies are written as a JSON array using the `chrome.cookies` field
//! names. `expirationDate` keeps its fractional seconds. `storeId` and
//! `partitionKey` are not written.

use cj_protocol::{CookieRecord, PartitionKey, SameSite};
use serde::Deserialize;
use serde_json::Value;

use crate::error::FormatError;

/// Compact JSON array. Empty input yields `[]`.
pub fn serialize(cookies: &[CookieRecord]) -> String {
	match serde_json::to_string(cookies) {
		Ok(text) => text,
		Err(err) => {
			tracing::error!(target = "cookiejar", error = %err, "cookie list did not serialize to JSON");
			String::from("[]")
		}
	}
}

/// Parses a JSON array of cookie objects.
///
/// `name` and `domain` are required. Other fields fall back to the values a
/// fresh cookie would have; `session` is derived from `expirationDate`
/// when absent and must agree with it when present.
pub fn deserialize(text: &str) -> Result<Vec<CookieRecord>, FormatError> {
	let document: Value =
		serde_json::from_str(text).map_err(|e| FormatError::Structure(e.to_string()))?;

	let items = match document {
		Value::Array(items) => items,
		other => {
			return Err(FormatError::Structure(format!("top level is {}", kind(&other))));
		}
	};

	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			let record = |reason: String| FormatError::Record { index, reason };

			if !item.is_object() {
				return Err(record(format!("expected an object, found {}", kind(&item))));
			}

			let raw: RawCookie = serde_json::from_value(item).map_err(|e| record(e.to_string()))?;
			raw.into_record().map_err(record)
		})
		.collect()
}

/// Lenient input shape; only `name` and `domain` are mandatory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCookie {
	name: String,
	domain: String,
	#[serde(default)]
	value: String,
	#[serde(default)]
	path: Option<String>,
	#[serde(default)]
	secure: bool,
	#[serde(default)]
	http_only: bool,
	#[serde(default)]
	session: Option<bool>,
	#[serde(default)]
	expiration_date: Option<f64>,
	#[serde(default)]
	same_site: SameSite,
	#[serde(default)]
	store_id: Option<String>,
	#[serde(default)]
	partition_key: Option<PartitionKey>,
}

impl RawCookie {
	fn into_record(self) -> Result<CookieRecord, String> {
		if self.name.is_empty() {
			return Err("empty cookie name".into());
		}
		if self.domain.is_empty() {
			return Err("empty domain".into());
		}

		let session = self.expiration_date.is_none();
		if self.session.is_some_and(|declared| declared != session) {
			return Err(format!(
				"session is {} but expirationDate is {}",
				self.session.unwrap_or(session),
				if session { "absent" } else { "present" }
			));
		}

		Ok(CookieRecord {
			name: self.name,
			value: self.value,
			domain: self.domain,
			path: self.path.unwrap_or_else(|| "/".to_string()),
			secure: self.secure,
			http_only: self.http_only,
			session,
			expiration_date: self.expiration_date,
			same_site: self.same_site,
			store_id: self.store_id,
			partition_key: self.partition_key,
		})
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
