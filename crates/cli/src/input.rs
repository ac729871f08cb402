//! Reading the cookie dump and narrowing it to the requested cookies.

use std::io::Read;
use std::path::Path;

use cookiejar::format::json;
use cookiejar::{CookieQuery, CookieRecord, query, select};
use url::Url;

use crate::cli::SourceArgs;
use crate::error::{CjError, Result};
use crate::output::CommandInputs;

const STDIN: &str = "-";

/// Cookies picked out of a dump for one command.
#[derive(Debug)]
pub struct Selection {
	pub cookies: Vec<CookieRecord>,
	/// Tab URL, absent for `--all`
	pub url: Option<Url>,
	/// File name of the dump, or `-` for stdin
	pub source_name: String,
}

impl Selection {
	/// `<host>_cookies` or `cookies`.
	pub fn basename(&self) -> String {
		select::basename(self.url.as_ref())
	}

	/// Traceability inputs for the output envelope.
	pub fn inputs(&self, cookie_format: Option<&str>) -> CommandInputs {
		CommandInputs {
			url: self.url.as_ref().map(Url::to_string),
			input: Some(self.source_name.clone()),
			cookie_format: cookie_format.map(str::to_string),
		}
	}
}

/// Reads `path`, or stdin when `path` is absent or `-`.
///
/// Returns the display name of the source with its contents.
pub fn read_text(path: Option<&Path>) -> Result<(String, String)> {
	match path {
		Some(path) if path != Path::new(STDIN) => {
			let text = std::fs::read_to_string(path).map_err(|err| {
				CjError::Anyhow(anyhow::Error::new(err).context(format!("failed to read {}", path.display())))
			})?;
			Ok((path.display().to_string(), text))
		}
		_ => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text)?;
			Ok((STDIN.to_string(), text))
		}
	}
}

/// Builds the query for `args`: the tab query for a URL, everything for `--all`.
pub fn build_query(args: &SourceArgs) -> Result<(Option<Url>, CookieQuery)> {
	let url = args
		.url
		.as_deref()
		.map(|raw| {
			Url::parse(raw).map_err(|source| CjError::Url {
				url: raw.to_string(),
				source,
			})
		})
		.transpose()?;

	let mut query = match url {
		Some(ref url) => query::for_tab(url),
		None => CookieQuery::all(),
	};
	if let Some(ref store_id) = args.store_id {
		query = query.store_id(store_id.clone());
	}

	Ok((url, query))
}

/// Reads the dump named by `args` and keeps the cookies its query selects.
pub fn load(args: &SourceArgs) -> Result<Selection> {
	let (url, query) = build_query(args)?;
	let (source_name, text) = read_text(args.input.as_deref())?;

	let dump = json::deserialize(&text).map_err(|source| CjError::Input {
		source_name: source_name.clone(),
		source,
	})?;
	let cookies = query::select(&dump, &query)?;

	tracing::info!(
		target = "cookiejar",
		input = %source_name,
		total = dump.len(),
		selected = cookies.len(),
		"loaded cookies"
	);

	Ok(Selection {
		cookies,
		url,
		source_name,
	})
}
