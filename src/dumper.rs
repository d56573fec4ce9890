/*!
 * Content dumping: one delimited block per captured file
 */

use std::cmp::Ordering;
use std::fs;
use std::io::Write;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::filter::{has_excluded_component, is_relevant};

/// Width of the `=` rule framing each file header
pub const RULE_WIDTH: usize = 80;

static RULE: Lazy<String> = Lazy::new(|| "=".repeat(RULE_WIDTH));

/// Content dump statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpStatistics {
    /// Number of file blocks written
    pub files_written: usize,
    /// Number of blocks whose body is a read error marker
    pub read_errors: usize,
    /// Number of walk entries skipped because they could not be read
    pub walk_errors: usize,
}

/// Writes the contents of every relevant file below a root
#[derive(Debug, Default)]
pub struct ContentDumper;

impl ContentDumper {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and write a block for every captured file
    ///
    /// Excluded directories are still walked; their files are dropped by
    /// path-component inspection. Symlinks are not followed.
    pub fn dump<W: Write>(&self, out: &mut W, root: &Path) -> Result<DumpStatistics> {
        let mut stats = DumpStatistics::default();

        for entry in WalkDir::new(root).sort_by(files_before_directories) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    stats.walk_errors += 1;
                    continue;
                }
            };

            let path = entry.path();
            if path.is_dir() || !is_relevant(path) || has_excluded_component(path) {
                continue;
            }

            self.write_block(out, path, &mut stats)?;
        }

        Ok(stats)
    }

    /// Write the header and body of a single file block
    fn write_block<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        stats: &mut DumpStatistics,
    ) -> Result<()> {
        write!(out, "\n\n{}\n", *RULE)?;
        writeln!(out, "File: {}", path.display())?;
        write!(out, "{}\n\n", *RULE)?;

        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Captured {} ({} bytes)", path.display(), content.len());
                out.write_all(content.as_bytes())?;
            }
            Err(e) => {
                warn!("Error reading file {}: {}", path.display(), e);
                writeln!(out, "Error reading file: {}", e)?;
                stats.read_errors += 1;
            }
        }

        stats.files_written += 1;
        Ok(())
    }
}

// Files of a directory come before the contents of its subdirectories,
// each group in name order.
fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
