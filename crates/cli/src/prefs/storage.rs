//! File storage for [`Prefs`].

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Prefs;
use crate::error::Result;

const APP_DIR: &str = "cookiejar";
const PREFS_FILE: &str = "prefs.json";

/// Location of the preference file.
///
/// Resolves to `$XDG_CONFIG_HOME/cookiejar/prefs.json`, then the platform
/// config dir, unless `--config-dir` overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefsPaths {
	pub dir: PathBuf,
	pub file: PathBuf,
}

impl PrefsPaths {
	pub fn new(override_dir: Option<&Path>) -> Self {
		let dir = match override_dir {
			Some(dir) => dir.to_path_buf(),
			None => std::env::var_os("XDG_CONFIG_HOME")
				.filter(|v| !v.is_empty())
				.map(PathBuf::from)
				.or_else(dirs::config_dir)
				.unwrap_or_else(|| PathBuf::from("."))
				.join(APP_DIR),
		};

		Self {
			file: dir.join(PREFS_FILE),
			dir,
		}
	}
}

/// Reads prefs, falling back to defaults when the file is missing or unreadable.
pub fn load(paths: &PrefsPaths) -> Prefs {
	match load_json::<Prefs>(&paths.file) {
		Some(prefs) => prefs,
		None => {
			tracing::debug!(target = "cookiejar", path = %paths.file.display(), "no stored preferences");
			Prefs::new()
		}
	}
}

pub fn save(paths: &PrefsPaths, prefs: &Prefs) -> Result<()> {
	save_json(&paths.file, prefs)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
	fs::read_to_string(path)
		.ok()
		.and_then(|content| serde_json::from_str(&content).ok())
}

fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	fs::write(path, serde_json::to_string_pretty(data)?)?;
	Ok(())
}
