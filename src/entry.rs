//! Directory entry snapshots

use std::fs::Metadata;
use std::time::SystemTime;

/// One filesystem object seen while reading a directory.
///
/// Entries are snapshots taken once at enumeration time and never refreshed.
/// Directories report a size of 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name as returned by the OS (lossily converted to UTF-8).
    pub name: String,
    pub is_dir: bool,
    /// A symlink, junction or other redirecting entry. Never descended into.
    pub is_link: bool,
    pub hidden: bool,
    pub size: u64,
    pub modified: SystemTime,
    pub created: Option<SystemTime>,
    /// Raw platform attribute bits (unix mode or Windows file attributes).
    /// Only used for display.
    pub attributes: u32,
}

/// Type marker used by tree output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Directory,
    File,
    Link,
}

impl TypeTag {
    /// Short marker shown in tree lines.
    pub fn marker(self) -> &'static str {
        match self {
            TypeTag::Directory => "[D]",
            TypeTag::File => "[F]",
            TypeTag::Link => "[L]",
        }
    }
}

impl Entry {
    /// Build an entry from the entry's own (non-followed) metadata.
    ///
    /// `target` is the followed metadata for links, when the link resolves.
    /// A link to a directory is reported as a directory that is also a link.
    pub fn from_metadata(name: String, own: &Metadata, target: Option<&Metadata>) -> Self {
        let is_link = own.file_type().is_symlink() || is_reparse_point(own);
        let effective = if is_link { target.unwrap_or(own) } else { own };
        let is_dir = effective.is_dir();

        Self {
            hidden: is_hidden(&name, own),
            name,
            is_dir,
            is_link,
            size: if is_dir { 0 } else { effective.len() },
            modified: own.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            created: own.created().ok(),
            attributes: raw_attributes(own),
        }
    }

    /// A plain file entry, mostly useful for building synthetic listings.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            hidden: name.starts_with('.'),
            name,
            is_dir: false,
            is_link: false,
            size,
            modified: SystemTime::UNIX_EPOCH,
            created: None,
            attributes: 0,
        }
    }

    /// A plain directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            is_dir: true,
            ..Self::file(name, 0)
        }
    }

    /// A link entry; `to_dir` says whether its target is a directory.
    pub fn link(name: impl Into<String>, to_dir: bool) -> Self {
        Self {
            is_dir: to_dir,
            is_link: true,
            ..Self::file(name, 0)
        }
    }

    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether recursion may enter this entry.
    pub fn is_descendable(&self) -> bool {
        self.is_dir && !self.is_link
    }

    /// Text after the last `.` of the name, if there is a `.` at all.
    pub fn extension(&self) -> Option<&str> {
        self.name.rfind('.').map(|pos| &self.name[pos + 1..])
    }

    pub fn type_tag(&self) -> TypeTag {
        if self.is_link {
            TypeTag::Link
        } else if self.is_dir {
            TypeTag::Directory
        } else {
            TypeTag::File
        }
    }
}

#[cfg(windows)]
const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
#[cfg(windows)]
const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x400;

#[cfg(windows)]
fn is_hidden(_name: &str, meta: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn is_hidden(name: &str, _meta: &Metadata) -> bool {
    name.starts_with('.')
}

#[cfg(windows)]
fn is_reparse_point(meta: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    meta.file_attributes() & FILE_ATTRIBUTE_REPARSE_POINT != 0
}

#[cfg(not(windows))]
fn is_reparse_point(_meta: &Metadata) -> bool {
    false
}

#[cfg(unix)]
fn raw_attributes(meta: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.mode()
}

#[cfg(windows)]
fn raw_attributes(meta: &Metadata) -> u32 {
    use std::os::windows::fs::MetadataExt;
    meta.file_attributes()
}

#[cfg(not(any(unix, windows)))]
fn raw_attributes(_meta: &Metadata) -> u32 {
    0
}
