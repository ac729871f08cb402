use std::path::PathBuf;

use cookiejar::{CodecError, FormatError, QueryError};
use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CjError>;

#[derive(Debug, Error)]
pub enum CjError {
	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error(transparent)]
	Query(#[from] QueryError),

	/// The cookie dump given with `--input` (or stdin) is not a cookie list.
	#[error("invalid cookie input from {source_name}: {source}")]
	Input {
		source_name: String,
		#[source]
		source: FormatError,
	},

	#[error("invalid url '{url}': {source}")]
	Url {
		url: String,
		#[source]
		source: url::ParseError,
	},

	#[error("{0}")]
	InvalidInput(String),

	#[error("failed to write {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl CjError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			CjError::Codec(CodecError::UnknownFormat(key)) => (
				ErrorCode::UnknownFormat,
				self.to_string(),
				Some(serde_json::json!({
					"format": key,
					"available": cookiejar::list().iter().map(|f| f.key).collect::<Vec<_>>(),
				})),
			),
			CjError::Codec(CodecError::WriteOnly(key)) => (
				ErrorCode::WriteOnlyFormat,
				self.to_string(),
				Some(serde_json::json!({ "format": key })),
			),
			CjError::Codec(CodecError::Format(err)) => (ErrorCode::FormatError, err.to_string(), None),
			CjError::Input { source_name, .. } => (
				ErrorCode::FormatError,
				self.to_string(),
				Some(serde_json::json!({ "input": source_name })),
			),
			CjError::Query(err) => (ErrorCode::InvalidInput, err.to_string(), None),
			CjError::Url { url, .. } => (
				ErrorCode::InvalidInput,
				self.to_string(),
				Some(serde_json::json!({ "url": url })),
			),
			CjError::InvalidInput(msg) => (ErrorCode::InvalidInput, msg.clone(), None),
			CjError::Write { path, .. } => (
				ErrorCode::IoError,
				self.to_string(),
				Some(serde_json::json!({ "path": path })),
			),
			CjError::Io(err) => (ErrorCode::IoError, err.to_string(), None),
			CjError::Json(err) => (ErrorCode::InternalError, format!("JSON error: {err}"), None),
			CjError::Anyhow(err) => (ErrorCode::InternalError, format!("{err:#}"), None),
		};

		CommandError {
			code,
			message,
			details,
		}
	}
}
