//! Prefs command: shows or edits the stored format.

use cookiejar::select;

use crate::cli::PrefsAction;
use crate::error::Result;
use crate::output::{Artifact, ArtifactType, OutputFormat, PrefsData, ResultBuilder, print_result};
use crate::prefs::PrefsState;

pub fn execute(action: Option<&PrefsAction>, prefs: &mut PrefsState, format: OutputFormat) -> Result<()> {
	match action {
		None | Some(PrefsAction::Show) => {}
		Some(PrefsAction::SetFormat { key }) => {
			// Only registered keys are stored
			select::format(key)?;
			prefs.set_selected_format(key.clone());
		}
		Some(PrefsAction::Clear) => prefs.clear(),
	}

	let changed = prefs.is_dirty();
	let path = prefs.paths().file.clone();

	let mut builder = ResultBuilder::new("prefs").data(PrefsData {
		path: path.clone(),
		selected_format: prefs.selected_format().map(str::to_string),
		effective_format: prefs.resolve_format(None).to_string(),
	});
	if changed {
		builder = builder.artifact(Artifact {
			artifact_type: ArtifactType::Prefs,
			path,
			size_bytes: None,
			mime_type: Some("application/json".to_string()),
		});
	}

	print_result(&builder.build(), format);
	Ok(())
}
