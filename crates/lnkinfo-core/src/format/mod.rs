//! Shell Link binary format sections.
//!
//! A `.lnk` file is laid out as:
//!
//! 1. `ShellLinkHeader` (always present, 0x4C bytes)
//! 2. `LinkTargetIDList` (if [`LinkFlags::HAS_LINK_TARGET_ID_LIST`])
//! 3. `LinkInfo` (if [`LinkFlags::HAS_LINK_INFO`])
//! 4. `StringData` (each field gated by its own flag)
//! 5. `ExtraData` (a list of blocks ended by a zero-size terminal block)
//!
//! Each submodule decodes one section from a shared [`BoundedReader`](crate::reader::BoundedReader).

mod extra;
mod header;
mod id_list;
mod link_info;
mod strings;

use bitflags::bitflags;

pub use extra::{read_extra_data, ExtraBlock};
pub use header::{read_header, Header, HEADER_SIZE, LINK_CLSID};
pub use id_list::read_id_list;
pub use link_info::{read_link_info, LinkInfo, LINK_INFO_FIXED_SIZE};
pub use strings::{read_string_data, read_string_field, StringField, StringFields};

bitflags! {
    /// `LinkFlags` field of the header
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LinkFlags: u32 {
        /// A LinkTargetIDList follows the header
        const HAS_LINK_TARGET_ID_LIST = 1 << 0;
        /// A LinkInfo block is present
        const HAS_LINK_INFO = 1 << 1;
        /// StringData has a NAME_STRING
        const HAS_NAME = 1 << 2;
        /// StringData has a RELATIVE_PATH
        const HAS_RELATIVE_PATH = 1 << 3;
        /// StringData has a WORKING_DIR
        const HAS_WORKING_DIR = 1 << 4;
        /// StringData has COMMAND_LINE_ARGUMENTS
        const HAS_ARGUMENTS = 1 << 5;
        /// StringData has an ICON_LOCATION
        const HAS_ICON_LOCATION = 1 << 6;
        /// StringData is UTF-16LE rather than the system code page
        const IS_UNICODE = 1 << 7;
        /// LinkInfo is ignored by the shell
        const FORCE_NO_LINK_INFO = 1 << 8;
        /// An EnvironmentVariableDataBlock is present
        const HAS_EXP_STRING = 1 << 9;
        /// 16-bit target runs in a separate VDM
        const RUN_IN_SEPARATE_PROCESS = 1 << 10;
        /// A DarwinDataBlock is present
        const HAS_DARWIN_ID = 1 << 12;
        /// Target is run as a different user
        const RUN_AS_USER = 1 << 13;
        /// An IconEnvironmentDataBlock is present
        const HAS_EXP_ICON = 1 << 14;
        /// ID list is not aliased on load
        const NO_PIDL_ALIAS = 1 << 15;
        /// A ShimDataBlock is present
        const RUN_WITH_SHIM_LAYER = 1 << 17;
        /// TrackerDataBlock is ignored
        const FORCE_NO_LINK_TRACK = 1 << 18;
        /// Target properties are collected into a PropertyStoreDataBlock
        const ENABLE_TARGET_METADATA = 1 << 19;
        /// EnvironmentVariableDataBlock is ignored
        const DISABLE_LINK_PATH_TRACKING = 1 << 20;
        /// SpecialFolder and KnownFolder blocks are ignored
        const DISABLE_KNOWN_FOLDER_TRACKING = 1 << 21;
        /// Known folder ID list is not translated when loaded
        const DISABLE_KNOWN_FOLDER_ALIAS = 1 << 22;
        /// Target may itself be a link
        const ALLOW_LINK_TO_LINK = 1 << 23;
        /// Target ID list is unaliased when saved
        const UNALIAS_ON_SAVE = 1 << 24;
        /// Target is resolved from the environment path
        const PREFER_ENVIRONMENT_PATH = 1 << 25;
        /// Local ID list is stored for UNC targets
        const KEEP_LOCAL_ID_LIST_FOR_UNC_TARGET = 1 << 26;
    }
}

impl LinkFlags {
    /// Builds flags from the raw header value, keeping undocumented bits
    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Returns true if StringData fields are UTF-16LE encoded
    pub fn is_unicode(&self) -> bool {
        self.contains(Self::IS_UNICODE)
    }

    /// Names of the documented flags that are set, lowest bit first
    pub fn set_names(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}
