//! Error types for the lnkinfo-core library.
//!
//! Every decoding failure is fatal: the parser never returns a partially
//! decoded link. Errors raised inside a decoding stage are wrapped in
//! [`Error::Section`] so callers can report which part of the file was bad.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lnkinfo operations
pub type Result<T> = std::result::Result<T, Error>;

/// The decoding stage an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The fixed-size ShellLinkHeader
    Header,
    /// The LinkTargetIDList block
    IdList,
    /// The LinkInfo block
    LinkInfo,
    /// The StringData fields
    StringData,
    /// The ExtraData block list
    ExtraData,
}

impl Section {
    /// Returns a human-readable stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::IdList => "link target ID list",
            Section::LinkInfo => "link info",
            Section::StringData => "string data",
            Section::ExtraData => "extra data",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comprehensive error type for all lnkinfo operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A read needed more bytes than the buffer holds
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Cursor position when the read was attempted
        offset: usize,
        /// Number of bytes the read required
        needed: usize,
        /// Number of bytes left in the buffer
        remaining: usize,
    },

    /// An absolute seek pointed past the end of the buffer
    #[error("seek to offset {position} is out of range (buffer is {len} bytes)")]
    SeekOutOfRange {
        /// Requested absolute position
        position: usize,
        /// Length of the buffer
        len: usize,
    },

    /// The header size field is not 0x4C
    #[error("invalid header size 0x{size:X} (expected 0x4C)")]
    InvalidHeaderSize {
        /// The size value found in the file
        size: u32,
    },

    /// The header class identifier does not match the Shell Link CLSID
    #[error("invalid class identifier {}", format_clsid(.found))]
    InvalidClassId {
        /// The 16 bytes found in the file
        found: [u8; 16],
    },

    /// The ID list does not end with a zero terminal item
    #[error("invalid ID list terminator in {size}-byte list at offset {offset}")]
    InvalidIdListTerminator {
        /// Offset of the ID list data
        offset: usize,
        /// Declared ID list size
        size: u16,
    },

    /// An extra data block declared a size too small to hold its own size field
    #[error("corrupt extra data block at offset {offset}: size {size} is smaller than 4")]
    CorruptExtraData {
        /// Offset of the block's size field
        offset: usize,
        /// The declared block size
        size: u32,
    },

    /// More extra data blocks than the configured limit
    #[error("more than {limit} extra data blocks")]
    TooManyExtraBlocks {
        /// The configured limit
        limit: usize,
    },

    /// Bytes follow the terminal extra data block
    #[error("{remaining} trailing bytes after terminal block at offset {offset}")]
    TrailingData {
        /// Position right after the terminal block
        offset: usize,
        /// Number of unread bytes
        remaining: usize,
    },

    /// An error raised while decoding a specific stage
    #[error("failed to decode {section}")]
    Section {
        /// The stage that failed
        section: Section,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

fn format_clsid(bytes: &[u8; 16]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new end-of-data error
    pub fn unexpected_eof(offset: usize, needed: usize, remaining: usize) -> Self {
        Self::UnexpectedEof {
            offset,
            needed,
            remaining,
        }
    }

    /// Creates a new seek error
    pub fn seek_out_of_range(position: usize, len: usize) -> Self {
        Self::SeekOutOfRange { position, len }
    }

    /// Wraps this error with the stage it was raised in.
    ///
    /// Already wrapped errors are returned unchanged so the innermost stage wins.
    pub fn in_section(self, section: Section) -> Self {
        match self {
            Self::Section { .. } => self,
            other => Self::Section {
                section,
                source: Box::new(other),
            },
        }
    }

    /// Returns the stage this error was raised in, if known
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Section { section, .. } => Some(*section),
            _ => None,
        }
    }

    /// Returns the underlying error, skipping any stage wrapper
    pub fn root(&self) -> &Error {
        match self {
            Self::Section { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns true if the input data itself is malformed (as opposed to I/O failure)
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self.root(), Self::FileRead { .. })
    }
}
