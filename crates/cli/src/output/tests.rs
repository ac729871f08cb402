use cookiejar::Field;

use super::*;

fn export_data() -> ExportData {
	ExportData {
		format: "netscape".into(),
		path: "example.com_cookies.txt".into(),
		count: 2,
		bytes: 180,
	}
}

#[test]
fn result_builder_success() {
	let result: CommandResult<ExportData> = ResultBuilder::new("export")
		.inputs(CommandInputs {
			url: Some("https://example.com".into()),
			cookie_format: Some("netscape".into()),
			..Default::default()
		})
		.data(export_data())
		.build();

	assert!(result.ok);
	assert_eq!(result.command, "export");
	assert!(result.data.is_some());
	assert!(result.error.is_none());
	assert_eq!(result.schema_version, Some(SCHEMA_VERSION));
}

#[test]
fn result_builder_error() {
	let result: CommandResult<ExportData> = ResultBuilder::new("export")
		.error(ErrorCode::UnknownFormat, "Invalid format: 'yaml'")
		.build();

	assert!(!result.ok);
	assert!(result.data.is_none());
	assert_eq!(result.error.as_ref().unwrap().code, ErrorCode::UnknownFormat);
}

#[test]
fn error_code_display_matches_serde() {
	for code in [
		ErrorCode::UnknownFormat,
		ErrorCode::WriteOnlyFormat,
		ErrorCode::FormatError,
		ErrorCode::InvalidInput,
		ErrorCode::IoError,
		ErrorCode::InternalError,
	] {
		let json = serde_json::to_value(code).unwrap();
		assert_eq!(json, code.to_string());
	}
}

#[test]
fn build_records_elapsed_time() {
	let result: CommandResult<ExportData> = ResultBuilder::new("export").data(export_data()).build();

	let json = serde_json::to_value(&result).unwrap();
	assert!(json["timings"]["durationMs"].is_u64());
	assert!(json.get("inputs").is_none());
}

#[test]
fn serialize_uses_camel_case() {
	let result: CommandResult<PrefsData> = ResultBuilder::new("prefs")
		.data(PrefsData {
			path: "/tmp/prefs.json".into(),
			selected_format: Some("json".into()),
			effective_format: "json".into(),
		})
		.build();

	let json = serde_json::to_string(&result).unwrap();
	assert!(json.contains("\"ok\":true"));
	assert!(json.contains("\"schemaVersion\":1"));
	assert!(json.contains("\"selectedFormat\":\"json\""));
	assert!(json.contains("\"effectiveFormat\":\"json\""));
}

#[test]
fn artifacts_included() {
	let result: CommandResult<ExportData> = ResultBuilder::new("export")
		.data(export_data())
		.artifact(Artifact {
			artifact_type: ArtifactType::Cookies,
			path: "example.com_cookies.txt".into(),
			size_bytes: Some(180),
			mime_type: Some("text/plain".into()),
		})
		.build();

	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(json["artifacts"][0]["type"], "cookies");
	assert_eq!(json["artifacts"][0]["mimeType"], "text/plain");
}

#[test]
fn malformed_fields_become_warnings() {
	let warning = MalformedFieldWarning {
		format: "netscape",
		index: 0,
		cookie: "sid".into(),
		field: Field::Value,
		separator: '\t',
	};
	let result: CommandResult<ExportData> = ResultBuilder::new("export")
		.data(export_data())
		.warnings(&[warning])
		.build();

	assert_eq!(result.diagnostics.len(), 1);
	assert_eq!(result.diagnostics[0].level, DiagnosticLevel::Warning);
	assert_eq!(result.diagnostics[0].source.as_deref(), Some("netscape"));
	assert!(result.diagnostics[0].message.contains("sid"));
}

#[test]
fn text_trailer_lists_diagnostics_and_files() {
	let mut out = Vec::new();
	print_text_trailer(
		&mut out,
		&[Diagnostic {
			level: DiagnosticLevel::Warning,
			message: "value contains a tab".into(),
			source: Some("netscape".into()),
		}],
		&[Artifact {
			artifact_type: ArtifactType::Cookies,
			path: "cookies.txt".into(),
			size_bytes: None,
			mime_type: None,
		}],
	);

	let text = String::from_utf8(out).unwrap();
	assert_eq!(text, "[warning:netscape] value contains a tab\nSaved Cookies: cookies.txt\n");
}

#[test]
fn format_info_from_registry() {
	let info = FormatInfo::from(cookiejar::lookup("header").unwrap());
	assert_eq!(info.key, "header");
	assert!(!info.importable);
	assert_eq!(info.ext, ".txt");
}
