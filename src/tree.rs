/*!
 * ASCII tree rendering of a directory structure
 */

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{CaptureError, Result};
use crate::filter::is_excluded_dir;
use crate::types::DirectoryEntry;

/// Default limit on how many levels below the root the renderer descends
///
/// Kept well under the kernel's symlink hop limit (40 on Linux, 32 on macOS)
/// so a single-link cycle trips this guard before path resolution fails.
pub const DEFAULT_MAX_DEPTH: usize = 32;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACER: &str = "    ";

/// Renders a directory as a prefix-drawn tree, one line per entry
pub struct TreeRenderer {
    max_depth: usize,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeRenderer {
    /// Create a renderer with the default depth limit
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Write the tree of `root` to `out`, returning the number of lines written
    ///
    /// The root itself is not printed; its entries start at column zero.
    /// Excluded directories get a line of their own but are never listed.
    pub fn render<W: Write>(&self, out: &mut W, root: &Path) -> Result<usize> {
        self.render_level(out, root, "", 0)
    }

    fn render_level<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        prefix: &str,
        depth: usize,
    ) -> Result<usize> {
        if depth > self.max_depth {
            return Err(CaptureError::DepthLimitExceeded {
                path: path.to_path_buf(),
                limit: self.max_depth,
            });
        }

        let entries = list_entries(path)?;
        let mut lines = 0;

        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == entries.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            writeln!(out, "{}{}{}", prefix, connector, entry.name)?;
            lines += 1;

            if entry.is_directory() && !is_excluded_dir(&entry.name) {
                let child_prefix = format!("{}{}", prefix, if is_last { SPACER } else { PIPE });
                lines += self.render_level(out, &entry.path, &child_prefix, depth + 1)?;
            } else if entry.is_directory() {
                debug!("Not descending into excluded directory {}", entry.path.display());
            }
        }

        Ok(lines)
    }
}

/// List the entries of a directory sorted by name
pub fn list_entries(path: &Path) -> Result<Vec<DirectoryEntry>> {
    let read_dir_error = |source| CaptureError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        entries.push(DirectoryEntry::from_dir_entry(&entry));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
