//! `LinkTargetIDList` structural validation.
//!
//! The item IDs are shell-namespace specific and are not decoded; only the
//! size prefix and the zero-length terminal item are checked.

use crate::error::{Error, Result};
use crate::reader::BoundedReader;

/// Consumes the ID list and returns its declared size.
pub fn read_id_list(r: &mut BoundedReader<'_>) -> Result<u16> {
    let size = r.read_u16()?;
    let offset = r.position();
    let data = r.read_bytes(size as usize)?;

    if !data.ends_with(&[0x00, 0x00]) {
        return Err(Error::InvalidIdListTerminator { offset, size });
    }

    Ok(size)
}
