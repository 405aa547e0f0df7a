//! # lnkinfo-core
//!
//! A library for decoding Windows Shell Link (`.lnk`) files.
//!
//! This crate provides the core functionality for:
//! - Validating the fixed Shell Link header and its class identifier
//! - Walking the flag-gated optional sections with strict bounds checking
//! - Rendering the decoded metadata as a human-readable report
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`reader`]: Bounds-checked cursor shared by every decoder
//! - [`format`]: One decoder per on-disk section
//! - [`parser`]: Runs the section decoders in order
//! - [`report`]: Text rendering of a decoded link
//! - [`time`]: FILETIME conversion
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use lnkinfo_core::{LnkParser, Report};
//! use std::fs;
//!
//! let data = fs::read("./Desktop/App.lnk")?;
//! let lnk = LnkParser::new().parse(&data)?;
//!
//! if let Some(args) = &lnk.strings.arguments {
//!     println!("arguments: {}", args);
//! }
//! print!("{}", Report::new(&lnk).render());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod format;
pub mod parser;
pub mod reader;
pub mod report;
pub mod time;

#[cfg(test)]
mod test_support;

// Re-export primary types for convenience
pub use error::{Error, Result, Section};
pub use format::{ExtraBlock, Header, LinkFlags, LinkInfo, StringField, StringFields};
pub use parser::{parse_file, parse_file_with_config, LnkFile, LnkParser, ParserConfig, TrailingData};
pub use reader::BoundedReader;
pub use report::{Report, ReportConfig};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
