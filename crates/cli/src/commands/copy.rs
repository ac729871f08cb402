//! Copy command: serialized cookies straight to stdout.
//!
//! No envelope is printed so the output can be piped into `pbcopy`,
//! `wl-copy` or `xclip` unchanged. Malformed-field warnings still reach
//! stderr through the log.

use std::io::Write;

use cookiejar::select;

use crate::cli::CopyArgs;
use crate::error::Result;
use crate::input;
use crate::prefs::PrefsState;

pub fn execute(args: &CopyArgs, prefs: &mut PrefsState) -> Result<()> {
	let key = prefs.resolve_format(args.cookie_format.as_deref()).to_string();
	select::format(&key)?;

	let selection = input::load(&args.source)?;
	let export = select::export(&key, &selection.cookies)?;

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(export.text.as_bytes())?;
	stdout.flush()?;

	if let Some(ref explicit) = args.cookie_format {
		prefs.set_selected_format(explicit.clone());
	}
	Ok(())
}
