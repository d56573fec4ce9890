/*!
 * Configuration handling for codebase-capture
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::{CaptureError, Result};
use crate::tree::DEFAULT_MAX_DEPTH;

/// Command-line arguments for codebase-capture
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codebase-capture",
    version = env!("CARGO_PKG_VERSION"),
    about = "Capture codebase structure and content.",
    long_about = "Writes an ASCII tree of a project directory followed by the contents of its source files into a single text file."
)]
pub struct Args {
    /// Output file name
    #[clap(short, long, default_value = "codebase_capture.txt")]
    pub output: String,

    /// Root directory of the project
    #[clap(short, long, default_value = ".")]
    pub root: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Canonical absolute path of the directory to capture
    pub root_dir: PathBuf,

    /// Output file path, as given
    pub output_file: PathBuf,

    /// Deepest directory level the tree renderer will descend to
    pub max_depth: usize,
}

impl Config {
    /// Resolve and validate a configuration from a root directory and an output path
    pub fn new(root: impl AsRef<Path>, output_file: impl Into<PathBuf>) -> Result<Self> {
        let root = root.as_ref();
        let root_dir = fs::canonicalize(root).map_err(|source| CaptureError::RootNotFound {
            path: root.to_path_buf(),
            source,
        })?;

        ensure!(
            root_dir.is_dir(),
            Config,
            "Root path is not a directory: {}",
            root_dir.display()
        );

        Ok(Self {
            root_dir,
            output_file: output_file.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        Self::new(&args.root, args.output)
    }

    /// Override the tree depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
