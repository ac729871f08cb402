//! Import command: parses a Netscape or JSON cookie file.

use std::path::Path;

use cookiejar::select;
use tracing::info;

use crate::cli::ImportArgs;
use crate::error::Result;
use crate::input;
use crate::output::{CommandInputs, ImportData, OutputFormat, ResultBuilder, print_result};

pub fn execute(args: &ImportArgs, format: OutputFormat) -> Result<()> {
	let (source_name, text) = input::read_text(Some(&args.file))?;
	let key = match args.cookie_format {
		Some(ref key) => key.as_str(),
		None => guess_format(&args.file, &text),
	};

	let cookies = select::import(key, &text)?;
	info!(target = "cookiejar", input = %source_name, format = key, count = cookies.len(), "imported cookies");

	let result = ResultBuilder::new("import")
		.inputs(CommandInputs {
			input: Some(source_name),
			cookie_format: Some(key.to_string()),
			..Default::default()
		})
		.data(ImportData {
			format: key.to_string(),
			count: cookies.len(),
			cookies,
		})
		.build();
	print_result(&result, format);
	Ok(())
}

/// `.json` files and text starting with `[` are JSON; anything else is Netscape.
fn guess_format(path: &Path, text: &str) -> &'static str {
	let json_ext = path
		.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
	if json_ext || text.trim_start().starts_with('[') {
		"json"
	} else {
		"netscape"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn guesses_from_extension_then_content() {
		assert_eq!(guess_format(Path::new("c.JSON"), ""), "json");
		assert_eq!(guess_format(Path::new("cookies.txt"), "# Netscape"), "netscape");
		assert_eq!(guess_format(Path::new("-"), "  [{\"name\":\"a\"}]"), "json");
		assert_eq!(guess_format(Path::new("-"), ".example.com\tTRUE"), "netscape");
	}
}
