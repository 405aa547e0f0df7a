//! Human-readable rendering of a decoded [`LnkFile`].
//!
//! The layout is one `Name: value` line per field, grouped under section
//! titles:
//!
//! ```text
//! Link information:
//!     CreationTime                : 2020-01-01 00:00:00 UTC
//!     ...
//!
//! Target Path:
//!     LocalBasePath               : C:\Windows\
//!
//! StringData:
//!     Arguments                   : /quiet
//! ```

use crate::parser::LnkFile;
use chrono::{DateTime, Utc};
use std::fmt::{self, Display, Write as FmtWrite};

/// Configuration for report rendering
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Width the field names are padded to
    pub field_width: usize,
    /// List the names of the set link flags
    pub show_flags: bool,
    /// List the skipped extra data blocks
    pub show_extra_blocks: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            field_width: 28,
            show_flags: false,
            show_extra_blocks: false,
        }
    }
}

impl ReportConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field name padding
    pub fn field_width(mut self, width: usize) -> Self {
        self.field_width = width;
        self
    }

    /// Sets whether the link flags section is printed
    pub fn show_flags(mut self, show: bool) -> Self {
        self.show_flags = show;
        self
    }

    /// Sets whether the extra data section is printed
    pub fn show_extra_blocks(mut self, show: bool) -> Self {
        self.show_extra_blocks = show;
        self
    }
}

/// Text report for one decoded link
#[derive(Debug)]
pub struct Report<'a> {
    lnk: &'a LnkFile,
    config: ReportConfig,
}

impl<'a> Report<'a> {
    /// Creates a report with the default configuration
    pub fn new(lnk: &'a LnkFile) -> Self {
        Self {
            lnk,
            config: ReportConfig::default(),
        }
    }

    /// Replaces the report configuration
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders the report into a string
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.write_to(&mut output).expect("String write cannot fail");
        output
    }

    /// Writes the report to a writer
    pub fn write_to(&self, w: &mut impl FmtWrite) -> fmt::Result {
        let header = &self.lnk.header;

        writeln!(w, "Link information:")?;
        self.field(w, "CreationTime", Timestamp(header.creation_time))?;
        self.field(w, "AccessTime", Timestamp(header.access_time))?;
        self.field(w, "WriteTime", Timestamp(header.write_time))?;
        self.field(w, "FileSize", header.file_size)?;
        self.field(w, "IconIndex", header.icon_index)?;
        self.field(w, "ShowCommand", header.show_command)?;
        self.field(w, "HotKey", format_args!("0x{:04X}", header.hot_key))?;
        self.field(w, "FileAttributes", format_args!("0x{:08X}", header.file_attributes))?;

        if let Some(info) = self.lnk.link_info.as_ref().filter(|i| i.has_paths()) {
            writeln!(w)?;
            writeln!(w, "Target Path:")?;
            self.field(w, "LocalBasePath", info.local_base_path.as_deref().unwrap_or(""))?;
            self.field(w, "CommonPathSuffix", info.common_path_suffix.as_deref().unwrap_or(""))?;
        }

        if !self.lnk.strings.is_empty() {
            writeln!(w)?;
            writeln!(w, "StringData:")?;
            for (field, value) in self.lnk.strings.iter() {
                self.field(w, field.as_str(), value)?;
            }
        }

        if self.config.show_flags {
            writeln!(w)?;
            writeln!(w, "Link flags:")?;
            self.field(w, "Raw", format_args!("0x{:08X}", self.lnk.flags().bits()))?;
            for name in self.lnk.flags().set_names() {
                writeln!(w, "\t{}", name)?;
            }
        }

        if self.config.show_extra_blocks && !self.lnk.extra_blocks.is_empty() {
            writeln!(w)?;
            writeln!(w, "Extra data blocks:")?;
            for block in &self.lnk.extra_blocks {
                let signature = block
                    .signature
                    .map(|s| format!("0x{:08X}", s))
                    .unwrap_or_else(|| "-".to_string());
                let label = format!("@0x{:X}", block.offset);
                self.field(w, &label, format_args!("{} ({} bytes)", signature, block.size))?;
            }
        }

        Ok(())
    }

    fn field(&self, w: &mut impl FmtWrite, name: &str, value: impl Display) -> fmt::Result {
        writeln!(
            w,
            "\t{:<width$}: {}",
            name,
            value,
            width = self.config.field_width
        )
    }
}

struct Timestamp(Option<DateTime<Utc>>);

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S UTC")),
            None => f.write_str("(not set)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::StringField;
    use crate::parser::LnkParser;
    use crate::test_support::{link_info_block, LnkBuilder};
    use crate::time::UNIX_EPOCH_TICKS;
    use pretty_assertions::assert_eq;

    fn decode(builder: LnkBuilder) -> LnkFile {
        LnkParser::new().parse(&builder.build()).unwrap()
    }

    #[test]
    fn test_minimal_report() {
        let lnk = decode(
            LnkBuilder::new()
                .times(UNIX_EPOCH_TICKS, 0, 0)
                .file_size(512)
                .icon_index(-1)
                .hot_key(0x0341)
                .file_attributes(0x20),
        );

        let expected = "\
Link information:
\tCreationTime                : 1970-01-01 00:00:00 UTC
\tAccessTime                  : (not set)
\tWriteTime                   : (not set)
\tFileSize                    : 512
\tIconIndex                   : -1
\tShowCommand                 : 1
\tHotKey                      : 0x0341
\tFileAttributes              : 0x00000020
";
        assert_eq!(Report::new(&lnk).render(), expected);
    }

    #[test]
    fn test_paths_and_strings() {
        let lnk = decode(
            LnkBuilder::new()
                .link_info(link_info_block(Some("C:\\Windows\\"), None))
                .narrow(StringField::IconLocation, "shell32.dll")
                .narrow(StringField::Name, "Explorer"),
        );

        let report = Report::new(&lnk).with_config(ReportConfig::new().field_width(4)).render();
        assert!(report.contains("\nTarget Path:\n\tLocalBasePath: C:\\Windows\\\n"));
        assert!(report.contains("\tCommonPathSuffix: \n"));
        assert!(report.ends_with("StringData:\n\tName: Explorer\n\tIconLocation: shell32.dll\n"));
    }

    #[test]
    fn test_link_info_without_paths_is_hidden() {
        let lnk = decode(LnkBuilder::new().link_info(link_info_block(None, None)));
        assert!(!Report::new(&lnk).render().contains("Target Path:"));
    }

    #[test]
    fn test_optional_sections() {
        let lnk = decode(LnkBuilder::new().wide(StringField::Arguments, "-x").extra(0xA000_0003, 0x60));

        let plain = Report::new(&lnk).render();
        assert!(!plain.contains("Link flags:"));
        assert!(!plain.contains("Extra data blocks:"));

        let config = ReportConfig::new().show_flags(true).show_extra_blocks(true);
        let full = Report::new(&lnk).with_config(config).render();
        assert!(full.contains("\tHAS_ARGUMENTS\n\tIS_UNICODE\n"));
        assert!(full.contains(": 0xA0000003 (96 bytes)"));
    }
}
