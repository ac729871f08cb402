//! Integration tests for export, copy, table and import.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use tempfile::TempDir;

const DUMP: &str = r#"[
	{"domain":".example.com","expirationDate":1700000000.9,"hostOnly":false,"httpOnly":true,
	 "name":"sid","path":"/","sameSite":"lax","secure":true,"session":false,"storeId":"0","value":"abc"},
	{"domain":"www.example.com","hostOnly":true,"httpOnly":false,"name":"theme","path":"/",
	 "sameSite":"unspecified","secure":false,"session":true,"storeId":"0","value":"dark"},
	{"domain":".other.org","hostOnly":false,"httpOnly":false,"name":"ad","path":"/",
	 "sameSite":"no_restriction","secure":true,"session":true,"storeId":"0","value":"1"}
]"#;

struct Workspace {
	dir: TempDir,
}

impl Workspace {
	fn new() -> Self {
		let dir = TempDir::new().unwrap();
		std::fs::write(dir.path().join("dump.json"), DUMP).unwrap();
		Self { dir }
	}

	fn path(&self) -> &Path {
		self.dir.path()
	}

	fn dump(&self) -> PathBuf {
		self.path().join("dump.json")
	}

	fn config_dir(&self) -> PathBuf {
		self.path().join("config")
	}

	fn command(&self) -> Command {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_cookiejar"));
		cmd.current_dir(self.path())
			.env_remove("RUST_LOG")
			.arg("--config-dir")
			.arg(self.config_dir());
		cmd
	}

	fn run(&self, args: &[&str]) -> Output {
		self.command().args(args).output().expect("failed to execute cookiejar")
	}

	fn run_json(&self, args: &[&str]) -> Value {
		let mut full = vec!["-f", "json"];
		full.extend_from_slice(args);
		let output = self.run(&full);
		let stdout = String::from_utf8_lossy(&output.stdout);
		serde_json::from_str(&stdout).unwrap_or_else(|_| json!({ "raw": stdout }))
	}
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn export_tab_writes_netscape_file() {
	let ws = Workspace::new();
	let dump = ws.dump();

	let result = ws.run_json(&["export", "https://www.example.com/", "-i", dump.to_str().unwrap()]);
	assert_eq!(result["ok"], true, "unexpected result: {result}");
	assert_eq!(result["data"]["format"], "netscape");
	assert_eq!(result["data"]["count"], 2);
	assert_eq!(result["artifacts"][0]["type"], "cookies");

	let text = std::fs::read_to_string(ws.path().join("www.example.com_cookies.txt")).unwrap();
	assert!(text.starts_with("# Netscape HTTP Cookie File\n"));
	assert!(text.contains(".example.com\tTRUE\t/\tTRUE\t1700000000\tsid\tabc\n"));
	assert!(text.contains("www.example.com\tFALSE\t/\tFALSE\t0\ttheme\tdark\n"));
	assert!(!text.contains("other.org"));
}

#[test]
fn export_all_uses_generic_name_and_remembers_format() {
	let ws = Workspace::new();
	let dump = ws.dump();

	let result = ws.run_json(&["export", "--all", "-i", dump.to_str().unwrap(), "-F", "json"]);
	assert_eq!(result["ok"], true, "unexpected result: {result}");

	let text = std::fs::read_to_string(ws.path().join("cookies.json")).unwrap();
	let exported: Value = serde_json::from_str(&text).unwrap();
	assert_eq!(exported.as_array().unwrap().len(), 3);
	assert_eq!(exported[0]["expirationDate"], 1700000000.9);

	let prefs = ws.run_json(&["prefs"]);
	assert_eq!(prefs["data"]["selectedFormat"], "json");

	// The remembered format applies when the flag is omitted
	let result = ws.run_json(&["export", "--all", "-i", dump.to_str().unwrap(), "--save-as", "again.json"]);
	assert_eq!(result["data"]["format"], "json");
	assert!(ws.path().join("again.json").exists());
}

#[test]
fn copy_prints_raw_header_text() {
	let ws = Workspace::new();
	let dump = ws.dump();

	let output = ws.run(&["copy", "https://www.example.com/", "-i", dump.to_str().unwrap(), "-F", "header"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "sid=abc; theme=dark");
}

#[test]
fn copy_reads_dump_from_stdin() {
	let ws = Workspace::new();

	let mut child = ws
		.command()
		.args(["copy", "--all", "-F", "header"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.spawn()
		.expect("failed to spawn cookiejar");
	child.stdin.take().unwrap().write_all(DUMP.as_bytes()).unwrap();
	let output = child.wait_with_output().unwrap();

	assert!(output.status.success());
	assert_eq!(stdout(&output), "sid=abc; theme=dark; ad=1");
}

#[test]
fn table_cell_matches_exported_field() {
	let ws = Workspace::new();
	let dump = ws.dump();

	let output = ws.run(&["table", "--all", "-i", dump.to_str().unwrap(), "--cell", "1:expiration"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "1700000000\n");

	let result = ws.run_json(&["table", "--all", "-i", dump.to_str().unwrap()]);
	assert_eq!(result["data"]["count"], 3);
	assert_eq!(result["data"]["columns"][1], "includeSubdomains");
	assert_eq!(result["data"]["rows"][2][0], ".other.org");
}

#[test]
fn import_round_trips_exported_file() {
	let ws = Workspace::new();
	let dump = ws.dump();

	let result = ws.run_json(&["export", "--all", "-i", dump.to_str().unwrap()]);
	assert_eq!(result["ok"], true);

	let result = ws.run_json(&["import", "cookies.txt"]);
	assert_eq!(result["ok"], true, "unexpected result: {result}");
	assert_eq!(result["data"]["format"], "netscape");
	assert_eq!(result["data"]["count"], 3);
	assert_eq!(result["data"]["cookies"][0]["name"], "sid");
	assert_eq!(result["data"]["cookies"][1]["session"], true);
}

#[test]
fn export_warns_about_unescapable_values() {
	let ws = Workspace::new();
	let dump = ws.path().join("tabbed.json");
	std::fs::write(&dump, r#"[{"name":"a","value":"x\ty","domain":"example.com"}]"#).unwrap();

	let result = ws.run_json(&["export", "--all", "-i", dump.to_str().unwrap()]);
	assert_eq!(result["ok"], true);
	assert_eq!(result["diagnostics"][0]["level"], "warning");
	assert_eq!(result["diagnostics"][0]["source"], "netscape");
}

#[test]
fn formats_lists_registry_in_order() {
	let ws = Workspace::new();

	let result = ws.run_json(&["formats"]);
	let keys: Vec<&str> = result["data"]["formats"]
		.as_array()
		.unwrap()
		.iter()
		.map(|f| f["key"].as_str().unwrap())
		.collect();
	assert_eq!(keys, ["netscape", "json", "header", "set-cookie"]);
	assert_eq!(result["data"]["selected"], "netscape");
	assert_eq!(result["data"]["formats"][1]["mimeType"], "application/json");
}

#[test]
fn prefs_set_and_clear() {
	let ws = Workspace::new();

	let result = ws.run_json(&["prefs", "set-format", "set-cookie"]);
	assert_eq!(result["data"]["effectiveFormat"], "set-cookie");
	assert!(ws.config_dir().join("prefs.json").exists());

	let result = ws.run_json(&["formats"]);
	assert_eq!(result["data"]["selected"], "set-cookie");

	let result = ws.run_json(&["prefs", "clear"]);
	assert_eq!(result["data"]["effectiveFormat"], "netscape");
	assert!(result["data"].get("selectedFormat").is_none());
}
