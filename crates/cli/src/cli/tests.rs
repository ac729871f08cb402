use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn parse_export_command() {
	let args = vec![
		"cookiejar",
		"export",
		"https://example.com",
		"-i",
		"dump.json",
		"-F",
		"json",
		"-o",
		"/tmp/out",
	];
	let cli = Cli::try_parse_from(args).unwrap();

	match cli.command {
		Commands::Export(args) => {
			assert_eq!(args.source.url.as_deref(), Some("https://example.com"));
			assert_eq!(args.source.input, Some(PathBuf::from("dump.json")));
			assert_eq!(args.cookie_format.as_deref(), Some("json"));
			assert_eq!(args.out_dir, PathBuf::from("/tmp/out"));
			assert_eq!(args.save_as, None);
		}
		_ => panic!("Expected Export command"),
	}
}

#[test]
fn parse_export_defaults() {
	let cli = Cli::try_parse_from(["cookiejar", "export", "--all"]).unwrap();

	assert_eq!(cli.format, OutputFormat::Toon);
	assert_eq!(cli.verbose, 0);
	match cli.command {
		Commands::Export(args) => {
			assert!(args.source.all);
			assert_eq!(args.source.url, None);
			assert_eq!(args.cookie_format, None);
			assert_eq!(args.out_dir, PathBuf::from("."));
		}
		_ => panic!("Expected Export command"),
	}
}

#[test]
fn source_requires_url_or_all() {
	assert!(Cli::try_parse_from(["cookiejar", "copy"]).is_err());
	assert!(Cli::try_parse_from(["cookiejar", "copy", "https://example.com", "--all"]).is_err());
	assert!(Cli::try_parse_from(["cookiejar", "copy", "--all"]).is_ok());
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::try_parse_from([
		"cookiejar",
		"formats",
		"-f",
		"json",
		"-vv",
		"--config-dir",
		"/tmp/cfg",
	])
	.unwrap();

	assert_eq!(cli.format, OutputFormat::Json);
	assert_eq!(cli.verbose, 2);
	assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/cfg")));
	assert_eq!(cli.command.name(), "formats");
}

#[test]
fn parse_table_cell() {
	let cli = Cli::try_parse_from(["cookiejar", "table", "--all", "--cell", "2:value"]).unwrap();

	match cli.command {
		Commands::Table(args) => {
			assert_eq!(args.cell, Some(CellRef { row: 2, col: 7 }));
		}
		_ => panic!("Expected Table command"),
	}
}

#[test]
fn cell_ref_accepts_index_or_title() {
	assert_eq!("1:1".parse::<CellRef>().unwrap(), CellRef { row: 1, col: 1 });
	assert_eq!("3:Domain".parse::<CellRef>().unwrap(), CellRef { row: 3, col: 1 });
	assert_eq!("1:expiration".parse::<CellRef>().unwrap(), CellRef { row: 1, col: 5 });
}

#[test]
fn cell_ref_rejects_out_of_range() {
	assert!("0:1".parse::<CellRef>().is_err());
	assert!("1:8".parse::<CellRef>().is_err());
	assert!("1:color".parse::<CellRef>().is_err());
	assert!("12".parse::<CellRef>().is_err());
}

#[test]
fn parse_import_command() {
	let cli = Cli::try_parse_from(["cookiejar", "import", "cookies.txt"]).unwrap();

	match cli.command {
		Commands::Import(args) => {
			assert_eq!(args.file, PathBuf::from("cookies.txt"));
			assert_eq!(args.cookie_format, None);
		}
		_ => panic!("Expected Import command"),
	}
}

#[test]
fn parse_prefs_actions() {
	let cli = Cli::try_parse_from(["cookiejar", "prefs"]).unwrap();
	match cli.command {
		Commands::Prefs(args) => assert_eq!(args.action, None),
		_ => panic!("Expected Prefs command"),
	}

	let cli = Cli::try_parse_from(["cookiejar", "prefs", "set-format", "header"]).unwrap();
	match cli.command {
		Commands::Prefs(args) => {
			assert_eq!(args.action, Some(PrefsAction::SetFormat { key: "header".into() }));
		}
		_ => panic!("Expected Prefs command"),
	}
}
