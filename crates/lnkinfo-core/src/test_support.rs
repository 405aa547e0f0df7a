//! Builders for synthetic `.lnk` buffers used across the unit tests.

use crate::format::{LinkFlags, StringField, HEADER_SIZE, LINK_CLSID, LINK_INFO_FIXED_SIZE};

/// Assembles a `.lnk` file section by section
#[derive(Debug, Clone)]
pub(crate) struct LnkBuilder {
    flags: u32,
    file_attributes: u32,
    times: [u64; 3],
    file_size: u32,
    icon_index: i32,
    show_command: u32,
    hot_key: u16,
    id_list: Option<Vec<u8>>,
    link_info: Option<Vec<u8>>,
    strings: [Option<Vec<u8>>; 5],
    extra: Vec<u8>,
    terminated: bool,
    trailing: Vec<u8>,
}

impl LnkBuilder {
    pub(crate) fn new() -> Self {
        Self {
            flags: 0,
            file_attributes: 0,
            times: [0; 3],
            file_size: 0,
            icon_index: 0,
            show_command: 1,
            hot_key: 0,
            id_list: None,
            link_info: None,
            strings: Default::default(),
            extra: Vec::new(),
            terminated: true,
            trailing: Vec::new(),
        }
    }

    pub(crate) fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub(crate) fn file_attributes(mut self, attrs: u32) -> Self {
        self.file_attributes = attrs;
        self
    }

    pub(crate) fn times(mut self, creation: u64, access: u64, write: u64) -> Self {
        self.times = [creation, access, write];
        self
    }

    pub(crate) fn file_size(mut self, size: u32) -> Self {
        self.file_size = size;
        self
    }

    pub(crate) fn icon_index(mut self, index: i32) -> Self {
        self.icon_index = index;
        self
    }

    pub(crate) fn show_command(mut self, cmd: u32) -> Self {
        self.show_command = cmd;
        self
    }

    pub(crate) fn hot_key(mut self, key: u16) -> Self {
        self.hot_key = key;
        self
    }

    /// Adds an ID list holding `items` followed by the terminal item
    pub(crate) fn id_list(mut self, items: &[u8]) -> Self {
        let mut body = items.to_vec();
        body.extend([0, 0]);
        let mut data = (body.len() as u16).to_le_bytes().to_vec();
        data.extend(body);
        self.flags |= LinkFlags::HAS_LINK_TARGET_ID_LIST.bits();
        self.id_list = Some(data);
        self
    }

    /// Adds a raw ID list (size prefix included) without touching its contents
    pub(crate) fn raw_id_list(mut self, data: Vec<u8>) -> Self {
        self.flags |= LinkFlags::HAS_LINK_TARGET_ID_LIST.bits();
        self.id_list = Some(data);
        self
    }

    pub(crate) fn link_info(mut self, block: Vec<u8>) -> Self {
        self.flags |= LinkFlags::HAS_LINK_INFO.bits();
        self.link_info = Some(block);
        self
    }

    pub(crate) fn wide(mut self, field: StringField, value: &str) -> Self {
        self.flags |= field.flag().bits() | LinkFlags::IS_UNICODE.bits();
        self.strings[field_index(field)] = Some(wide_string(value));
        self
    }

    pub(crate) fn narrow(mut self, field: StringField, value: &str) -> Self {
        self.flags |= field.flag().bits();
        self.strings[field_index(field)] = Some(narrow_string(value));
        self
    }

    pub(crate) fn extra(mut self, signature: u32, size: u32) -> Self {
        self.extra.extend(extra_block(signature, size));
        self
    }

    pub(crate) fn unterminated(mut self) -> Self {
        self.terminated = false;
        self
    }

    pub(crate) fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub(crate) fn header_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE as usize);
        out.extend(HEADER_SIZE.to_le_bytes());
        out.extend(LINK_CLSID);
        out.extend(self.flags.to_le_bytes());
        out.extend(self.file_attributes.to_le_bytes());
        for t in self.times {
            out.extend(t.to_le_bytes());
        }
        out.extend(self.file_size.to_le_bytes());
        out.extend(self.icon_index.to_le_bytes());
        out.extend(self.show_command.to_le_bytes());
        out.extend(self.hot_key.to_le_bytes());
        out.extend([0u8; 10]);
        out
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut out = self.header_bytes();
        if let Some(id_list) = &self.id_list {
            out.extend(id_list);
        }
        if let Some(link_info) = &self.link_info {
            out.extend(link_info);
        }
        for s in self.strings.iter().flatten() {
            out.extend(s);
        }
        out.extend(&self.extra);
        if self.terminated {
            out.extend([0u8; 4]);
        }
        out.extend(&self.trailing);
        out
    }
}

fn field_index(field: StringField) -> usize {
    StringField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

/// A LinkInfo block with the paths stored right after the fixed fields
pub(crate) fn link_info_block(local: Option<&str>, suffix: Option<&str>) -> Vec<u8> {
    let mut strings = Vec::new();
    let mut local_offset = 0u32;
    let mut suffix_offset = 0u32;

    if let Some(local) = local {
        local_offset = (LINK_INFO_FIXED_SIZE + strings.len()) as u32;
        strings.extend(local.as_bytes());
        strings.push(0);
    }
    if let Some(suffix) = suffix {
        suffix_offset = (LINK_INFO_FIXED_SIZE + strings.len()) as u32;
        strings.extend(suffix.as_bytes());
        strings.push(0);
    }

    let size = (LINK_INFO_FIXED_SIZE + strings.len()) as u32;
    let mut out = Vec::new();
    for field in [
        size,
        LINK_INFO_FIXED_SIZE as u32,
        u32::from(local.is_some()),
        0,
        local_offset,
        0,
        suffix_offset,
    ] {
        out.extend(field.to_le_bytes());
    }
    out.extend(strings);
    out
}

pub(crate) fn wide_string(s: &str) -> Vec<u8> {
    let units: Vec<u16> = s.encode_utf16().collect();
    let mut out = (units.len() as u16).to_le_bytes().to_vec();
    for unit in units {
        out.extend(unit.to_le_bytes());
    }
    out
}

pub(crate) fn narrow_string(s: &str) -> Vec<u8> {
    let mut out = (s.len() as u16).to_le_bytes().to_vec();
    out.extend(s.as_bytes());
    out
}

/// An extra data block of `size` bytes carrying `signature` and zero padding
pub(crate) fn extra_block(signature: u32, size: u32) -> Vec<u8> {
    let mut out = size.to_le_bytes().to_vec();
    out.extend(signature.to_le_bytes());
    out.resize(size as usize, 0);
    out
}
