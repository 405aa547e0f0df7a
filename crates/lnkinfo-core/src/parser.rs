//! Shell Link decoding pipeline.
//!
//! [`LnkParser`] runs the section decoders from [`crate::format`] over one
//! [`BoundedReader`] in a fixed order:
//!
//! 1. Header (always)
//! 2. LinkTargetIDList, if flagged
//! 3. LinkInfo, if flagged
//! 4. StringData, each field if flagged
//! 5. ExtraData until the terminal block
//!
//! Each stage runs at most once. The first failure ends the decode with the
//! error tagged by its [`Section`]; no partial [`LnkFile`] is ever returned.

use crate::error::{Error, Result, Section};
use crate::format::{
    read_extra_data, read_header, read_id_list, read_link_info, read_string_data, ExtraBlock,
    Header, LinkFlags, LinkInfo, StringFields,
};
use crate::reader::BoundedReader;
use std::path::Path;
use tracing::debug;

/// What to do with bytes after the terminal extra data block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingData {
    /// Leave them unread
    #[default]
    Ignore,
    /// Fail with [`Error::TrailingData`]
    Reject,
}

/// Configuration for the parser
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Maximum number of extra data blocks before giving up (0 = unlimited)
    pub max_extra_blocks: usize,
    /// Handling of bytes after the terminal block
    pub trailing_data: TrailingData,
}

impl ParserConfig {
    /// Creates a new parser config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of extra data blocks
    pub fn max_extra_blocks(mut self, max: usize) -> Self {
        self.max_extra_blocks = max;
        self
    }

    /// Sets how trailing bytes are handled
    pub fn trailing_data(mut self, policy: TrailingData) -> Self {
        self.trailing_data = policy;
        self
    }
}

/// A fully decoded Shell Link file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LnkFile {
    /// The fixed header
    pub header: Header,
    /// Declared size of the ID list, if one was present
    pub id_list_size: Option<u16>,
    /// The LinkInfo block, if one was present
    pub link_info: Option<LinkInfo>,
    /// The StringData fields
    pub strings: StringFields,
    /// The skipped extra data blocks, terminal block excluded
    pub extra_blocks: Vec<ExtraBlock>,
}

impl LnkFile {
    /// Shortcut for the header flags
    pub fn flags(&self) -> LinkFlags {
        self.header.link_flags
    }
}

/// Decoder for Shell Link files
#[derive(Debug, Clone, Default)]
pub struct LnkParser {
    config: ParserConfig,
}

impl LnkParser {
    /// Creates a new parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decodes a complete `.lnk` file held in memory
    pub fn parse(&self, data: &[u8]) -> Result<LnkFile> {
        let mut r = BoundedReader::new(data);
        debug!("Decoding {} bytes", data.len());

        let header = read_header(&mut r).map_err(|e| e.in_section(Section::Header))?;
        let flags = header.link_flags;
        debug!("Header decoded, flags 0x{:08X}", flags.bits());

        let id_list_size = if flags.contains(LinkFlags::HAS_LINK_TARGET_ID_LIST) {
            let size = read_id_list(&mut r).map_err(|e| e.in_section(Section::IdList))?;
            debug!("ID list of {} bytes, next section at {}", size, r.position());
            Some(size)
        } else {
            None
        };

        let link_info = if flags.contains(LinkFlags::HAS_LINK_INFO) {
            let info = read_link_info(&mut r).map_err(|e| e.in_section(Section::LinkInfo))?;
            debug!("LinkInfo decoded, next section at {}", r.position());
            Some(info)
        } else {
            None
        };

        let strings =
            read_string_data(&mut r, flags).map_err(|e| e.in_section(Section::StringData))?;

        let extra_blocks = read_extra_data(&mut r, self.config.max_extra_blocks)
            .map_err(|e| e.in_section(Section::ExtraData))?;
        debug!(
            "{} extra data block(s), decoding ended at {}",
            extra_blocks.len(),
            r.position()
        );

        if self.config.trailing_data == TrailingData::Reject && r.remaining() > 0 {
            return Err(Error::TrailingData {
                offset: r.position(),
                remaining: r.remaining(),
            }
            .in_section(Section::ExtraData));
        }

        Ok(LnkFile {
            header,
            id_list_size,
            link_info,
            strings,
            extra_blocks,
        })
    }
}

/// Parse a `.lnk` file from disk
///
/// This is a convenience function that reads the file and parses it.
pub fn parse_file(path: impl AsRef<Path>) -> Result<LnkFile> {
    parse_file_with_config(path, ParserConfig::default())
}

/// Parse a `.lnk` file from disk with custom configuration
pub fn parse_file_with_config(path: impl AsRef<Path>, config: ParserConfig) -> Result<LnkFile> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
    LnkParser::with_config(config).parse(&data)
}
