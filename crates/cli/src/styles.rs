//! Terminal styling: clap help colors and the cookie table header.

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use colored::{ColoredString, Colorize};

/// Returns clap Styles configured to match cargo's help output colors.
///
/// Headers and usage are green and bold; literals, placeholders and valid
/// values are cyan.
pub fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
}

/// Column title cell of the cookie table, padded to `width`.
pub fn table_header(title: &str, width: usize) -> ColoredString {
	format!("{title:<width$}").green().bold()
}
