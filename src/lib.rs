/*!
 * codebase-capture - Capture a project's structure and source into one text file
 *
 * The output starts with an ASCII tree of the project directory, followed by
 * the contents of every source file whose extension is on a fixed allow-list.
 * Dependency and VCS directories are left out.
 */

pub mod config;
pub mod dumper;
pub mod error;
pub mod filter;
pub mod logging;
pub mod tree;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use dumper::{ContentDumper, DumpStatistics};
pub use error::{CaptureError, Result};
pub use filter::{has_excluded_component, is_excluded_dir, is_relevant};
pub use tree::TreeRenderer;
pub use types::{DirectoryEntry, EntryKind};
pub use writer::CaptureWriter;
