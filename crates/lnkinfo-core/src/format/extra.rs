//! `ExtraData` block list.
//!
//! Blocks are size-prefixed and skipped without interpreting their content.
//! The list ends with a terminal block whose size field is zero.

use crate::error::{Error, Result};
use crate::reader::BoundedReader;
use tracing::trace;

/// Location and identity of one skipped extra data block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraBlock {
    /// Absolute offset of the block's size field
    pub offset: usize,
    /// Declared block size, including the size field
    pub size: u32,
    /// Block signature (e.g. `0xA0000003` for tracker data), if the block is large enough to hold one
    pub signature: Option<u32>,
}

/// Skips blocks up to and including the terminal block.
///
/// `max_blocks` of 0 means no limit.
pub fn read_extra_data(r: &mut BoundedReader<'_>, max_blocks: usize) -> Result<Vec<ExtraBlock>> {
    let mut blocks = Vec::new();

    loop {
        let offset = r.position();
        let size = r.read_u32()?;
        if size == 0 {
            break;
        }
        if size < 4 {
            return Err(Error::CorruptExtraData { offset, size });
        }
        if max_blocks > 0 && blocks.len() >= max_blocks {
            return Err(Error::TooManyExtraBlocks { limit: max_blocks });
        }

        let body = r.read_bytes(size as usize - 4)?;
        let signature = body
            .get(..4)
            .map(|sig| u32::from_le_bytes([sig[0], sig[1], sig[2], sig[3]]));

        trace!("Extra block at {}: size {}, signature {:X?}", offset, size, signature);
        blocks.push(ExtraBlock {
            offset,
            size,
            signature,
        });
    }

    Ok(blocks)
}
