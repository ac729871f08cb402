//! Persistent user preferences across invocations.
//!
//! The only preference today is the selected cookie format, the CLI
//! counterpart of the popup's remembered `<select>` value.

use std::path::Path;

use cookiejar::select;

use crate::error::Result;

pub mod storage;
pub mod types;


pub use storage::PrefsPaths;
pub use types::Prefs;

/// Loaded preferences plus where they live.
///
/// Changes are kept in memory until [`PrefsState::persist`] and only
/// written when something changed.
#[derive(Debug)]
pub struct PrefsState {
	prefs: Prefs,
	paths: PrefsPaths,
	dirty: bool,
}

impl PrefsState {
	pub fn load(config_dir: Option<&Path>) -> Self {
		let paths = PrefsPaths::new(config_dir);
		let prefs = storage::load(&paths);
		Self {
			prefs,
			paths,
			dirty: false,
		}
	}

	#[cfg(test)]
	pub(crate) fn test_new(prefs: Prefs, paths: PrefsPaths) -> Self {
		Self {
			prefs,
			paths,
			dirty: false,
		}
	}

	pub fn paths(&self) -> &PrefsPaths {
		&self.paths
	}

	pub fn selected_format(&self) -> Option<&str> {
		self.prefs.selected_format.as_deref()
	}

	/// Format key for this invocation: `explicit`, then the stored one, then the default.
	pub fn resolve_format<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
		select::resolve_key(explicit, self.selected_format())
	}

	pub fn set_selected_format(&mut self, key: impl Into<String>) {
		let key = key.into();
		if self.prefs.selected_format.as_deref() != Some(key.as_str()) {
			self.prefs.selected_format = Some(key);
			self.dirty = true;
		}
	}

	pub fn clear(&mut self) {
		if self.prefs.selected_format.take().is_some() {
			self.dirty = true;
		}
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Writes the file if anything changed.
	pub fn persist(&mut self) -> Result<()> {
		if !self.dirty {
			return Ok(());
		}
		self.prefs.schema = types::SCHEMA_VERSION;
		storage::save(&self.paths, &self.prefs)?;
		tracing::debug!(target = "cookiejar", path = %self.paths.file.display(), "saved preferences");
		self.dirty = false;
		Ok(())
	}
}
