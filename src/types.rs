/*!
 * Core types for directory listings
 */

use std::fs;
use std::io;
use std::path::PathBuf;

/// Kind of a listed filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory, including broken symlinks
    File,
    /// Directory, or a symlink resolving to one
    Directory,
}

/// A single entry produced by listing a directory
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Entry name (last path component)
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
}

impl DirectoryEntry {
    /// Build an entry from a `read_dir` result, following symlinks to classify it
    ///
    /// Dangling symlinks are files. Any other resolution failure (such as a
    /// symlink loop the kernel refuses to follow) classifies the entry as a
    /// directory, so listing it reports the error instead of hiding it.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let path = entry.path();
        let kind = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(e) if e.kind() == io::ErrorKind::NotFound => EntryKind::File,
            Err(_) => EntryKind::Directory,
        };

        Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            kind,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
