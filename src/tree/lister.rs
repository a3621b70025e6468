//! Directory listing seam used by the renderer.

use std::fs;
use std::io;
use std::path::Path;

use super::entry::{DirectoryEntry, EntryKind};

/// Source of directory listings.
///
/// Implement this trait to render something other than the live filesystem.
/// Entries must be returned in listing order; the renderer never re-sorts
/// them beyond putting files before directories.
pub trait DirectoryLister {
    /// List the immediate children of `dir`.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// Lists directories with `std::fs::read_dir`, never following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FsLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // DirEntry::file_type does not traverse symlinks
            let kind = EntryKind::from_file_type(entry.file_type()?);
            entries.push(DirectoryEntry::new(entry.path(), kind));
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_fs_lister_reports_kinds() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("file.txt")).unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let mut entries = FsLister::new().list(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "file.txt");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].name, "subdir");
        assert_eq!(entries[1].kind, EntryKind::Directory);
    }

    #[test]
    fn test_fs_lister_does_not_follow_links() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = FsLister::new().list(dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();

        assert_eq!(link.kind, EntryKind::Symlink);
        assert!(!link.is_dir());
    }

    #[test]
    fn test_fs_lister_missing_dir() {
        let result = FsLister::new().list(Path::new("/nonexistent/path/12345"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
