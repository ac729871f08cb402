//! Table command: the selected cookies as Netscape rows.
//!
//! Rows come from the same derivation the `netscape` export uses, so a
//! cell copied from here is byte-identical to the exported field.

use std::io::{self, Write};

use cookiejar::format::netscape::{self, NetscapeRow};

use crate::cli::{CellRef, TableArgs};
use crate::error::{CjError, Result};
use crate::input;
use crate::output::{OutputFormat, ResultBuilder, TableData, print_result};
use crate::styles;

pub fn execute(args: &TableArgs, format: OutputFormat) -> Result<()> {
	let selection = input::load(&args.source)?;
	let rows = netscape::rows(&selection.cookies);

	if let Some(cell) = args.cell {
		let text = cell_text(&rows, cell)?;
		let mut stdout = io::stdout().lock();
		writeln!(stdout, "{text}")?;
		return Ok(());
	}

	if format == OutputFormat::Text {
		let mut stdout = io::stdout().lock();
		render(&mut stdout, &rows)?;
		return Ok(());
	}

	let result = ResultBuilder::new("table")
		.inputs(selection.inputs(None))
		.data(TableData {
			columns: netscape::COLUMNS.iter().map(|c| c.to_string()).collect(),
			count: rows.len(),
			rows: rows.into_iter().map(Vec::from).collect(),
		})
		.build();
	print_result(&result, format);
	Ok(())
}

fn cell_text(rows: &[NetscapeRow], cell: CellRef) -> Result<&str> {
	let row = rows.get(cell.row - 1).ok_or_else(|| {
		CjError::InvalidInput(format!("row {} out of range, table has {} rows", cell.row, rows.len()))
	})?;
	// Column bounds are checked when the cell reference is parsed
	row.get(cell.col - 1)
		.map(String::as_str)
		.ok_or_else(|| CjError::InvalidInput(format!("column {} out of range", cell.col)))
}

/// Writes an aligned table with a styled header line.
fn render(out: &mut impl Write, rows: &[NetscapeRow]) -> io::Result<()> {
	let mut widths = netscape::COLUMNS.map(|title| title.chars().count());
	for row in rows {
		for (width, field) in widths.iter_mut().zip(row) {
			*width = (*width).max(field.chars().count());
		}
	}

	let header: Vec<String> = netscape::COLUMNS
		.iter()
		.zip(widths)
		.map(|(title, width)| styles::table_header(title, width).to_string())
		.collect();
	writeln!(out, "{}", header.join("  ").trim_end())?;

	for row in rows {
		let line: Vec<String> = row
			.iter()
			.zip(widths)
			.map(|(field, width)| pad(field, width))
			.collect();
		writeln!(out, "{}", line.join("  ").trim_end())?;
	}
	Ok(())
}

fn pad(field: &str, width: usize) -> String {
	let fill = width.saturating_sub(field.chars().count());
	format!("{field}{}", " ".repeat(fill))
}
