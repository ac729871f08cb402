//! Formats command: lists the registry.

use std::io::{self, Write};

use crate::error::Result;
use crate::output::{FormatInfo, FormatsData, OutputFormat, ResultBuilder, print_result};
use crate::prefs::PrefsState;

pub fn execute(prefs: &PrefsState, format: OutputFormat) -> Result<()> {
	let data = FormatsData {
		formats: cookiejar::list().iter().map(FormatInfo::from).collect(),
		selected: prefs.resolve_format(None).to_string(),
	};

	if format == OutputFormat::Text {
		let mut stdout = io::stdout().lock();
		for info in &data.formats {
			let marker = if info.key == data.selected { '*' } else { ' ' };
			let import = if info.importable { "import" } else { "" };
			writeln!(stdout, "{marker} {:<11}{:<5} {:<27}{import}", info.key, info.ext, info.label)?;
		}
		return Ok(());
	}

	let result = ResultBuilder::new("formats").data(data).build();
	print_result(&result, format);
	Ok(())
}
