//! Error types for cookie codecs.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Malformed input that cannot be mapped to cookie records.
///
/// Parsing is all-or-nothing: the first failure aborts the whole import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
	/// A Netscape cookie-jar line could not be parsed (1-based line number).
	#[error("line {line}: {reason}")]
	Line { line: usize, reason: String },

	/// A JSON array element could not be mapped to a cookie (0-based index).
	#[error("cookie[{index}]: {reason}")]
	Record { index: usize, reason: String },

	/// The JSON document is not an array of cookie objects.
	#[error("expected a JSON array of cookie objects: {0}")]
	Structure(String),
}

/// Errors surfaced by format selection and dispatch.
#[derive(Debug, Error)]
pub enum CodecError {
	/// No format is registered under the requested key.
	#[error("Invalid format: '{0}'")]
	UnknownFormat(String),

	/// The format only serializes; it cannot be imported.
	#[error("format '{0}' is write-only and cannot be imported")]
	WriteOnly(&'static str),

	/// Input text was rejected by the format's deserializer.
	#[error(transparent)]
	Format(#[from] FormatError),
}

/// Errors building a [`CookieFilter`](crate::CookieFilter).
#[derive(Debug, Error)]
pub enum QueryError {
	#[error("invalid cookie query url '{url}': {source}")]
	InvalidUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},
}
