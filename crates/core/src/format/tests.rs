use cj_protocol::{CookieRecord, SameSite};

use super::*;

fn jar() -> Vec<CookieRecord> {
	vec![
		CookieRecord::new("sid", "abc", ".example.com")
			.secure(true)
			.http_only(true)
			.same_site(SameSite::Lax)
			.expires(1_800_000_000.5),
		CookieRecord::new("theme", "dark", "www.example.com").path("/docs"),
		CookieRecord::new("empty", "", "example.com").expires(1_700_000_000.0),
	]
}

#[test]
fn registry_order_is_stable() {
	let keys: Vec<&str> = list().iter().map(|f| f.key).collect();
	assert_eq!(keys, ["netscape", "json", "header", "set-cookie"]);

	let again: Vec<&str> = list().iter().map(|f| f.key).collect();
	assert_eq!(keys, again);
}

#[test]
fn every_format_has_metadata() {
	for format in list() {
		assert!(!format.key.is_empty());
		assert!(!format.label.is_empty());
		assert!(format.ext.starts_with('.') && format.ext.len() > 1, "{}", format.key);
		assert!(!format.mime_type.is_empty(), "{}", format.key);
	}
}

#[test]
fn lookup_finds_registered_keys() {
	assert_eq!(lookup("json").map(|f| f.ext), Some(".json"));
	assert_eq!(lookup("netscape").map(|f| f.mime_type), Some("text/plain"));
	assert!(lookup(DEFAULT_FORMAT).is_some());
}

#[test]
fn lookup_unknown_key_is_none() {
	assert!(lookup("nonexistent").is_none());
	assert!(lookup("").is_none());
	assert!(lookup("JSON").is_none());
}

#[test]
fn only_netscape_and_json_import() {
	let importable: Vec<&str> = list().iter().filter(|f| f.is_importable()).map(|f| f.key).collect();
	assert_eq!(importable, ["netscape", "json"]);
	assert!(lookup("header").unwrap().deserialize("a=1").is_none());
}

#[test]
fn empty_input_never_fails() {
	for format in list() {
		let text = format.serialize(&[]);
		match format.key {
			"json" => assert_eq!(text, "[]"),
			_ => assert_eq!(text, "", "{}", format.key),
		}
	}
}

#[test]
fn importable_formats_read_their_own_output() {
	let cookies = jar();
	for format in list().iter().filter(|f| f.is_importable()) {
		let parsed = format.deserialize(&format.serialize(&cookies)).unwrap().unwrap();
		assert_eq!(parsed.len(), cookies.len(), "{}", format.key);
		for (got, want) in parsed.iter().zip(&cookies) {
			assert_eq!(got.name, want.name);
			assert_eq!(got.value, want.value);
			assert_eq!(got.domain, want.domain);
			assert_eq!(got.path, want.path);
			assert_eq!(got.secure, want.secure);
			assert_eq!(got.session, want.session);
		}
	}
}

#[test]
fn table_rows_match_export_lines() {
	let cookies = jar();
	let text = netscape::serialize(&cookies);
	let lines: Vec<Vec<&str>> = text
		.lines()
		.filter(|l| !l.is_empty() && !l.starts_with('#'))
		.map(|l| l.split('\t').collect())
		.collect();
	let rows = netscape::rows(&cookies);

	assert_eq!(lines.len(), rows.len());
	for (line, row) in lines.iter().zip(&rows) {
		assert_eq!(line.as_slice(), row.as_slice());
	}
}

#[test]
fn check_flags_unescapable_separators() {
	let cookies = [
		CookieRecord::new("ok", "fine", "example.com"),
		CookieRecord::new("tabbed", "a\tb", "example.com"),
		CookieRecord::new("semi", "a;b", "example.com"),
	];

	let netscape = lookup("netscape").unwrap().check(&cookies);
	assert_eq!(
		netscape,
		[MalformedFieldWarning {
			format: "netscape",
			index: 1,
			cookie: "tabbed".into(),
			field: Field::Value,
			separator: '\t',
		}]
	);

	let header = lookup("header").unwrap().check(&cookies);
	assert_eq!(header.len(), 1);
	assert_eq!(header[0].index, 2);
	assert_eq!(header[0].separator, ';');

	assert!(lookup("json").unwrap().check(&cookies).is_empty());
}

#[test]
fn warning_display_names_cookie_and_field() {
	let warning = MalformedFieldWarning {
		format: "header",
		index: 2,
		cookie: "semi".into(),
		field: Field::Value,
		separator: ';',
	};
	assert_eq!(
		warning.to_string(),
		"cookie[2] \"semi\": value contains ';', which the header format cannot escape"
	);
}
