//! `ShellLinkHeader` decoding.

use super::LinkFlags;
use crate::error::{Error, Result};
use crate::reader::BoundedReader;
use crate::time::filetime_to_datetime;
use chrono::{DateTime, Utc};
use tracing::trace;

/// Required value of the header size field
pub const HEADER_SIZE: u32 = 0x4C;

/// Shell Link class identifier `00021401-0000-0000-C000-000000000046`
pub const LINK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

/// Reserved bytes at the end of the header
const RESERVED_LEN: usize = 10;

/// Decoded header fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Flags that gate every optional section
    pub link_flags: LinkFlags,
    /// Target file attributes (`FILE_ATTRIBUTE_*`)
    pub file_attributes: u32,
    /// Target creation time
    pub creation_time: Option<DateTime<Utc>>,
    /// Target last access time
    pub access_time: Option<DateTime<Utc>>,
    /// Target last write time
    pub write_time: Option<DateTime<Utc>>,
    /// Low 32 bits of the target size
    pub file_size: u32,
    /// Icon index within the icon location
    pub icon_index: i32,
    /// Window state (`SW_*`) the target is launched with
    pub show_command: u32,
    /// Keyboard shortcut: low byte virtual key, high byte modifiers
    pub hot_key: u16,
}

/// Reads and validates the header.
///
/// The size field is checked before the class identifier is read, so a
/// truncated non-link file reports the size mismatch first.
pub fn read_header(r: &mut BoundedReader<'_>) -> Result<Header> {
    let size = r.read_u32()?;
    if size != HEADER_SIZE {
        return Err(Error::InvalidHeaderSize { size });
    }

    let clsid: [u8; 16] = r.read_array()?;
    if clsid != LINK_CLSID {
        return Err(Error::InvalidClassId { found: clsid });
    }

    let link_flags = LinkFlags::from_raw(r.read_u32()?);
    let file_attributes = r.read_u32()?;
    let creation_time = filetime_to_datetime(r.read_u64()?);
    let access_time = filetime_to_datetime(r.read_u64()?);
    let write_time = filetime_to_datetime(r.read_u64()?);
    let file_size = r.read_u32()?;
    let icon_index = r.read_i32()?;
    let show_command = r.read_u32()?;
    let hot_key = r.read_u16()?;
    r.skip(RESERVED_LEN)?;

    trace!("Header flags 0x{:08X}", link_flags.bits());

    Ok(Header {
        link_flags,
        file_attributes,
        creation_time,
        access_time,
        write_time,
        file_size,
        icon_index,
        show_command,
        hot_key,
    })
}
