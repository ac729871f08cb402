use cj_cli::{
	cli::Cli,
	commands,
	error::CjError,
	logging,
	output::{self, OutputFormat, ResultBuilder},
};
use clap::Parser;

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli) {
		handle_error(command, err, format);
		std::process::exit(1);
	}
}

fn handle_error(command: &'static str, err: CjError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	// Also emit the envelope on stdout with ok=false for scripts
	if format != OutputFormat::Text {
		let builder = ResultBuilder::<()>::new(command);
		let result = match cmd_error.details {
			Some(details) => builder.error_with_details(cmd_error.code, cmd_error.message, details),
			None => builder.error(cmd_error.code, cmd_error.message),
		}
		.build();
		output::print_result(&result, format);
	}
}
