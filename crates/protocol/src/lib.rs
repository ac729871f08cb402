//! Wire types for browser cookie records.
//!
//! This crate contains the serde-serializable shapes exchanged with the host
//! browser's cookie store: the [`CookieRecord`] itself and the
//! [`CookieQuery`] used to ask for a set of them. They mirror the
//! `chrome.cookies` extension API field-for-field so a dump taken from the
//! browser deserializes without any adapter.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization and small accessors
//! - **1:1 with the platform**: Field names match `chrome.cookies.Cookie`
//! - **Stable**: Changes only when the platform shape changes
//!
//! Format conversion lives in `cj-core`.

pub mod cookie;
pub mod query;

pub use cookie::*;
pub use query::*;
