//! `cookiejar` command-line host for the cookie format codecs.
//!
//! Reads a cookie dump taken from the browser (the JSON shape of
//! `chrome.cookies.getAll`), narrows it to one site or keeps everything, and
//! hands it to a registered format for export, clipboard piping or table
//! display.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod prefs;
pub mod styles;
