//! `StringData` decoding.
//!
//! Up to five counted strings follow the LinkInfo block, always in the same
//! order. Each one is present only if its header flag is set. The encoding is
//! chosen once for all of them by [`LinkFlags::IS_UNICODE`].

use super::LinkFlags;
use crate::error::Result;
use crate::reader::BoundedReader;
use tracing::trace;

/// A StringData field, in on-disk order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringField {
    /// `NAME_STRING`: description of the shortcut
    Name,
    /// `RELATIVE_PATH`: target path relative to the link
    RelativePath,
    /// `WORKING_DIR`: working directory of the target
    WorkingDirectory,
    /// `COMMAND_LINE_ARGUMENTS`
    Arguments,
    /// `ICON_LOCATION`: file holding the icon
    IconLocation,
}

impl StringField {
    /// All fields in the order they appear on disk
    pub const ALL: [StringField; 5] = [
        StringField::Name,
        StringField::RelativePath,
        StringField::WorkingDirectory,
        StringField::Arguments,
        StringField::IconLocation,
    ];

    /// The header flag that gates this field
    pub fn flag(&self) -> LinkFlags {
        match self {
            StringField::Name => LinkFlags::HAS_NAME,
            StringField::RelativePath => LinkFlags::HAS_RELATIVE_PATH,
            StringField::WorkingDirectory => LinkFlags::HAS_WORKING_DIR,
            StringField::Arguments => LinkFlags::HAS_ARGUMENTS,
            StringField::IconLocation => LinkFlags::HAS_ICON_LOCATION,
        }
    }

    /// Display name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            StringField::Name => "Name",
            StringField::RelativePath => "RelativePath",
            StringField::WorkingDirectory => "WorkingDirectory",
            StringField::Arguments => "Arguments",
            StringField::IconLocation => "IconLocation",
        }
    }
}

/// The decoded StringData fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFields {
    /// Description of the shortcut
    pub name: Option<String>,
    /// Target path relative to the link file
    pub relative_path: Option<String>,
    /// Working directory for the target
    pub working_dir: Option<String>,
    /// Command line arguments
    pub arguments: Option<String>,
    /// Icon location
    pub icon_location: Option<String>,
}

impl StringFields {
    /// Returns the value of a field
    pub fn get(&self, field: StringField) -> Option<&str> {
        match field {
            StringField::Name => self.name.as_deref(),
            StringField::RelativePath => self.relative_path.as_deref(),
            StringField::WorkingDirectory => self.working_dir.as_deref(),
            StringField::Arguments => self.arguments.as_deref(),
            StringField::IconLocation => self.icon_location.as_deref(),
        }
    }

    fn slot(&mut self, field: StringField) -> &mut Option<String> {
        match field {
            StringField::Name => &mut self.name,
            StringField::RelativePath => &mut self.relative_path,
            StringField::WorkingDirectory => &mut self.working_dir,
            StringField::Arguments => &mut self.arguments,
            StringField::IconLocation => &mut self.icon_location,
        }
    }

    /// Iterates over the present fields in on-disk order
    pub fn iter(&self) -> impl Iterator<Item = (StringField, &str)> + '_ {
        StringField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// Returns true if no field is present
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Reads every field whose flag is set.
pub fn read_string_data(r: &mut BoundedReader<'_>, flags: LinkFlags) -> Result<StringFields> {
    let unicode = flags.is_unicode();
    let mut fields = StringFields::default();

    for field in StringField::ALL {
        if !flags.contains(field.flag()) {
            continue;
        }
        let offset = r.position();
        let value = read_string_field(r, unicode)?;
        trace!("{} at {}: {:?}", field.as_str(), offset, value);
        *fields.slot(field) = Some(value);
    }

    Ok(fields)
}

/// Reads one counted string.
///
/// The count is in characters: `2n` bytes when `unicode`, `n` otherwise. All
/// declared bytes are consumed before decoding, and trailing NUL padding is
/// trimmed. Invalid sequences are replaced rather than rejected.
pub fn read_string_field(r: &mut BoundedReader<'_>, unicode: bool) -> Result<String> {
    let count = r.read_u16()? as usize;

    if unicode {
        let bytes = r.read_bytes(count * 2)?;
        let mut units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        while units.last() == Some(&0) {
            units.pop();
        }
        Ok(String::from_utf16_lossy(&units))
    } else {
        let bytes = r.read_bytes(count)?;
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }
}
