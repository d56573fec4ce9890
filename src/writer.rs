/*!
 * Capture writer: drives the tree and content phases into one output
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::info;

use crate::config::Config;
use crate::dumper::{ContentDumper, DumpStatistics};
use crate::error::{CaptureError, Result};
use crate::tree::TreeRenderer;

/// Heading written before the tree section
pub const STRUCTURE_HEADER: &str = "Codebase Structure:\n\n";

/// Heading written between the tree and the file contents
pub const CONTENTS_HEADER: &str = "\n\nFile Contents:\n";

/// Writer for a full capture run
pub struct CaptureWriter {
    /// Writer configuration
    config: Config,
}

impl CaptureWriter {
    /// Create a new capture writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create (or truncate) the configured output file and write the capture to it
    pub fn write(&self) -> Result<DumpStatistics> {
        let file =
            File::create(&self.config.output_file).map_err(|source| CaptureError::OutputFile {
                path: self.config.output_file.clone(),
                source,
            })?;
        let mut writer = BufWriter::new(file);

        let stats = self.write_to(&mut writer)?;
        writer.flush()?;

        Ok(stats)
    }

    /// Write the capture to an arbitrary stream
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<DumpStatistics> {
        let root = &self.config.root_dir;

        out.write_all(STRUCTURE_HEADER.as_bytes())?;
        let lines = TreeRenderer::new()
            .with_max_depth(self.config.max_depth)
            .render(out, root)?;
        info!("Wrote {} tree entries", lines);

        out.write_all(CONTENTS_HEADER.as_bytes())?;
        ContentDumper::new().dump(out, root)
    }
}
