//! Export command: writes the selected cookies to `<host>_cookies<ext>`.

use std::path::{Path, PathBuf};

use cookiejar::select;
use tracing::info;

use crate::cli::ExportArgs;
use crate::error::{CjError, Result};
use crate::input;
use crate::output::{
	Artifact, ArtifactType, DiagnosticLevel, ExportData, OutputFormat, ResultBuilder, print_result,
};
use crate::prefs::PrefsState;

pub fn execute(args: &ExportArgs, prefs: &mut PrefsState, format: OutputFormat) -> Result<()> {
	let key = prefs.resolve_format(args.cookie_format.as_deref()).to_string();
	// Reject the key before waiting on stdin
	select::format(&key)?;

	let selection = input::load(&args.source)?;
	let export = select::export(&key, &selection.cookies)?;

	let path = match args.save_as {
		Some(ref path) => path.clone(),
		None => args.out_dir.join(export.filename(&selection.basename())),
	};
	write_file(&path, &export.text)?;
	info!(target = "cookiejar", path = %path.display(), format = %key, count = selection.cookies.len(), "exported cookies");

	if let Some(ref explicit) = args.cookie_format {
		prefs.set_selected_format(explicit.clone());
	}

	let mut builder = ResultBuilder::new("export")
		.inputs(selection.inputs(Some(&key)))
		.data(ExportData {
			format: key.clone(),
			path: path.clone(),
			count: selection.cookies.len(),
			bytes: export.text.len(),
		})
		.artifact(Artifact {
			artifact_type: ArtifactType::Cookies,
			path,
			size_bytes: Some(export.text.len() as u64),
			mime_type: Some(export.format.mime_type.to_string()),
		})
		.warnings(&export.warnings);

	if selection.cookies.is_empty() {
		builder = builder.diagnostic(DiagnosticLevel::Info, "no cookies matched; wrote an empty file");
	}

	print_result(&builder.build(), format);
	Ok(())
}

fn write_file(path: &Path, text: &str) -> Result<()> {
	let write_err = |source| CjError::Write {
		path: PathBuf::from(path),
		source,
	};

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).map_err(write_err)?;
	}
	std::fs::write(path, text).map_err(write_err)
}
