mod copy;
mod export;
mod formats;
mod import;
mod prefs;
mod table;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::prefs::PrefsState;

pub fn dispatch(cli: Cli) -> Result<()> {
	let mut prefs = PrefsState::load(cli.config_dir.as_deref());
	let format = cli.format;

	let result = match cli.command {
		Commands::Export(ref args) => export::execute(args, &mut prefs, format),
		Commands::Copy(ref args) => copy::execute(args, &mut prefs),
		Commands::Table(ref args) => table::execute(args, format),
		Commands::Import(ref args) => import::execute(args, format),
		Commands::Formats => formats::execute(&prefs, format),
		Commands::Prefs(ref args) => prefs::execute(args.action.as_ref(), &mut prefs, format),
	};

	// A format given on the command line is only remembered once it worked
	if result.is_ok() {
		prefs.persist()?;
	}

	result
}
