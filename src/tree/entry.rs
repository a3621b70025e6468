use std::fs::FileType;
use std::path::PathBuf;

/// What kind of filesystem node an entry is, as seen without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// A single child discovered while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path to the entry
    pub path: PathBuf,

    /// Entry name (last component of path)
    pub name: String,

    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self { path, name, kind }
    }

    /// True only for real directories; links to directories are leaves.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
