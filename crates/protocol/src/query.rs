//! Query details for the browser's "get all cookies" call.

use serde::{Deserialize, Serialize};

use crate::cookie::PartitionKey;

/// Filter passed to `chrome.cookies.getAll`.
///
/// `partition_key` is tri-state: [`None`] asks for unpartitioned cookies
/// only, an empty [`PartitionKey`] asks for every partition, and a key with
/// a `top_level_site` asks for unpartitioned cookies plus that site's
/// partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieQuery {
	/// Restrict to cookies that would be sent to this URL
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,

	/// Partition scope
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub partition_key: Option<PartitionKey>,

	/// Restrict to one cookie store
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub store_id: Option<String>,
}

impl CookieQuery {
	/// Every cookie in every partition.
	pub fn all() -> Self {
		Self {
			url: None,
			partition_key: Some(PartitionKey::default()),
			store_id: None,
		}
	}

	/// Unpartitioned cookies sent to `url`.
	pub fn url(url: impl Into<String>) -> Self {
		Self {
			url: Some(url.into()),
			..Default::default()
		}
	}

	/// Sets the partition scope.
	pub fn partition_key(mut self, partition_key: PartitionKey) -> Self {
		self.partition_key = Some(partition_key);
		self
	}

	/// Restricts to one cookie store.
	pub fn store_id(mut self, store_id: impl Into<String>) -> Self {
		self.store_id = Some(store_id.into());
		self
	}
}
