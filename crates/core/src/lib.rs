//! Cookie format codecs.
//!
//! Converts browser [`CookieRecord`]s to and from the textual formats a
//! cookie export tool needs: the Netscape cookie-jar file understood by
//! curl and wget, lossless JSON, and HTTP header strings.
//!
//! # Main Types
//!
//! - [`Format`] - a registered format: key, file metadata, serializer and
//!   optional deserializer
//! - [`Export`] - serialized text plus the format that produced it
//! - [`CookieFilter`] - the "get all cookies" matching rules for a [`CookieQuery`]
//!
//! # Example
//!
//! ```ignore
//! use cookiejar::{CookieRecord, select};
//!
//! let cookies = vec![CookieRecord::new("sid", "abc", ".example.com")];
//! let export = select::export("netscape", &cookies)?;
//! std::fs::write(export.filename("example.com_cookies"), export.text)?;
//! ```
//!
//! Every codec is a pure function of its input; nothing here touches the
//! cookie store, the network or the filesystem.

pub mod error;
pub mod format;
pub mod query;
pub mod select;

pub use cj_protocol::{CookieQuery, CookieRecord, PartitionKey, SameSite};
pub use error::{CodecError, FormatError, QueryError, Result};
pub use format::{DEFAULT_FORMAT, Field, Format, MalformedFieldWarning, list, lookup};
pub use query::CookieFilter;
pub use select::Export;
