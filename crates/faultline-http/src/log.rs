//! Best-effort error log emission
//!
//! The pipeline renders one text block per fault and hands it to a sink.
//! Durability, rotation, and concurrent-append coordination belong to the
//! sink, not to this layer.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use faultline_core::Fault;

use crate::request::RequestInfo;

/// External sink accepting one structured text block per fault
pub trait LogSink: Send + Sync {
    /// Append one record block
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot accept the block
    fn append(&self, block: &str) -> anyhow::Result<()>;
}

/// Append-only file sink
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSink for FileSink {
    fn append(&self, block: &str) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        Ok(())
    }
}

/// Render the log block for one handled fault
pub(crate) fn render_block(
    fault: &Fault,
    request: &RequestInfo,
    timestamp: jiff::Timestamp,
) -> String {
    let client = request.client_addr.as_deref().unwrap_or("-");

    let mut block = format!(
        "[{timestamp}] {} {} from {client}\nmessage: {}\n",
        request.method,
        request.uri,
        fault.message()
    );

    if let Some(trace) = fault.trace() {
        let _ = write!(block, "trace:\n{trace}\n");
    }
    block.push('\n');

    block
}
