//! Preference file contents: [`Prefs`].

use serde::{Deserialize, Serialize};

/// Schema version for the preference file.
pub const SCHEMA_VERSION: u32 = 1;

/// Durable user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prefs {
	#[serde(default)]
	pub schema: u32,
	/// Last format key chosen with `--cookie-format`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub selected_format: Option<String>,
}

impl Prefs {
	/// Creates prefs with current [`SCHEMA_VERSION`].
	pub fn new() -> Self {
		Self {
			schema: SCHEMA_VERSION,
			..Default::default()
		}
	}
}
