#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use cookiejar::format::netscape;

use crate::output::OutputFormat;
use crate::styles::cli_styles;

/// Root CLI for cookiejar.
#[derive(Parser, Debug)]
#[command(name = "cookiejar")]
#[command(about = "Export browser cookies as cookies.txt, JSON or header strings")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: toon (default), json, ndjson, or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "toon")]
	pub format: OutputFormat,

	/// Directory holding prefs.json
	#[arg(long, global = true, value_name = "DIR")]
	pub config_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Write the selected cookies to a file.
	Export(ExportArgs),
	/// Print the serialized cookies to stdout, for piping into a clipboard tool.
	Copy(CopyArgs),
	/// Show the selected cookies as Netscape rows.
	Table(TableArgs),
	/// Parse a Netscape or JSON cookie file into cookie records.
	Import(ImportArgs),
	/// List the registered cookie formats.
	Formats,
	/// Show or change the stored format preference.
	Prefs(PrefsArgs),
}

impl Commands {
	/// Command name as reported in the output envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Export(_) => "export",
			Commands::Copy(_) => "copy",
			Commands::Table(_) => "table",
			Commands::Import(_) => "import",
			Commands::Formats => "formats",
			Commands::Prefs(_) => "prefs",
		}
	}
}

/// Where cookies come from and which of them to keep.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
	/// Tab URL; keeps the cookies the browser would send to it
	#[arg(value_name = "URL", required_unless_present = "all", conflicts_with = "all")]
	pub url: Option<String>,

	/// Keep every cookie in every partition
	#[arg(long)]
	pub all: bool,

	/// JSON dump of `chrome.cookies.getAll` results (`-` or omitted for stdin)
	#[arg(short, long, value_name = "FILE")]
	pub input: Option<PathBuf>,

	/// Restrict to one cookie store
	#[arg(long, value_name = "ID")]
	pub store_id: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
	#[command(flatten)]
	pub source: SourceArgs,

	/// Format key (remembered for later runs)
	#[arg(short = 'F', long, value_name = "KEY")]
	pub cookie_format: Option<String>,

	/// Directory for `<host>_cookies<ext>`
	#[arg(short, long, value_name = "DIR", default_value = ".")]
	pub out_dir: PathBuf,

	/// Exact output path, overriding the generated file name
	#[arg(long, value_name = "PATH")]
	pub save_as: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
	#[command(flatten)]
	pub source: SourceArgs,

	/// Format key (remembered for later runs)
	#[arg(short = 'F', long, value_name = "KEY")]
	pub cookie_format: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
	#[command(flatten)]
	pub source: SourceArgs,

	/// Print a single cell, e.g. `2:value` or `1:6`
	#[arg(long, value_name = "ROW:COL")]
	pub cell: Option<CellRef>,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
	/// Cookie file to parse (`-` for stdin)
	#[arg(value_name = "FILE")]
	pub file: PathBuf,

	/// Format key; guessed from the file extension when omitted
	#[arg(short = 'F', long, value_name = "KEY")]
	pub cookie_format: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PrefsArgs {
	#[command(subcommand)]
	pub action: Option<PrefsAction>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PrefsAction {
	/// Show stored preferences (default).
	Show,
	/// Store the format used when `--cookie-format` is omitted.
	SetFormat {
		#[arg(value_name = "KEY")]
		key: String,
	},
	/// Forget the stored format.
	Clear,
}

/// One cell of the cookie table, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
	pub row: usize,
	pub col: usize,
}

impl FromStr for CellRef {
	type Err = String;

	/// Parses `ROW:COL`. `COL` is a 1-based index or a column title.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (row, col) = s
			.split_once(':')
			.ok_or_else(|| format!("expected ROW:COL, got '{s}'"))?;

		let row = match row.trim().parse::<usize>() {
			Ok(row) if row > 0 => row,
			_ => return Err(format!("row must be a positive integer, got '{row}'")),
		};

		let col = col.trim();
		let col = match col.parse::<usize>() {
			Ok(n) if (1..=netscape::COLUMNS.len()).contains(&n) => n,
			Ok(n) => {
				return Err(format!("column must be 1..={}, got {n}", netscape::COLUMNS.len()));
			}
			Err(_) => netscape::COLUMNS
				.iter()
				.position(|title| title.eq_ignore_ascii_case(col))
				.map(|idx| idx + 1)
				.ok_or_else(|| {
					format!("unknown column '{col}' (expected one of: {})", netscape::COLUMNS.join(", "))
				})?,
		};

		Ok(Self { row, col })
	}
}
