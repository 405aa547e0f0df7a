//! `LinkInfo` block decoding.
//!
//! The block starts with seven `u32` fields. The path strings it carries are
//! addressed by offsets relative to the start of the block, so decoding jumps
//! around inside it and then always lands on `start + size`.

use crate::error::Result;
use crate::reader::BoundedReader;
use tracing::trace;

/// Size of the seven fixed `u32` fields at the start of the block
pub const LINK_INFO_FIXED_SIZE: usize = 28;

/// Decoded LinkInfo block.
///
/// `VolumeID` and `CommonNetworkRelativeLink` are not decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInfo {
    /// Declared size of the whole block
    pub size: u32,
    /// Declared size of the block header
    pub header_size: u32,
    /// `LinkInfoFlags` (volume ID / network link presence)
    pub flags: u32,
    /// Local path prefix of the target
    pub local_base_path: Option<String>,
    /// Path suffix appended to the base path or network share
    pub common_path_suffix: Option<String>,
}

impl LinkInfo {
    /// Returns true if at least one path string was decoded
    pub fn has_paths(&self) -> bool {
        self.local_base_path.is_some() || self.common_path_suffix.is_some()
    }
}

/// Reads the block at the cursor and leaves the cursor at `start + size`.
pub fn read_link_info(r: &mut BoundedReader<'_>) -> Result<LinkInfo> {
    let start = r.position();

    let size = r.read_u32()?;
    let header_size = r.read_u32()?;
    let flags = r.read_u32()?;
    let _volume_id_offset = r.read_u32()?;
    let local_base_path_offset = r.read_u32()?;
    let _network_link_offset = r.read_u32()?;
    let common_path_suffix_offset = r.read_u32()?;

    trace!(
        "LinkInfo at {}: size {}, header size {}, flags 0x{:X}",
        start,
        size,
        header_size,
        flags
    );

    let local_base_path = read_path_at(r, start, local_base_path_offset)?;
    let common_path_suffix = read_path_at(r, start, common_path_suffix_offset)?;

    r.seek_relative_to(start, size as usize)?;

    Ok(LinkInfo {
        size,
        header_size,
        flags,
        local_base_path,
        common_path_suffix,
    })
}

/// Reads a narrow C string at `start + offset`; a zero offset means absent.
fn read_path_at(r: &mut BoundedReader<'_>, start: usize, offset: u32) -> Result<Option<String>> {
    if offset == 0 {
        return Ok(None);
    }
    r.seek_relative_to(start, offset as usize)?;
    r.read_cstring().map(Some)
}
