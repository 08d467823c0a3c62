//! Plain-text result blocks

use crate::job::JobResult;
use crate::output::traits::{OutputResult, ResultSink};
use std::io::Write;

const SEPARATOR: &str = " ========= ";

/// Writes one block of `Key: value` lines per result
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn accept(&mut self, result: JobResult) -> OutputResult<()> {
        write_block(&mut self.writer, &result)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Formats a single result; absent values print as empty or zero
pub fn write_block<W: Write>(writer: &mut W, result: &JobResult) -> std::io::Result<()> {
    writeln!(writer, "{}", SEPARATOR)?;
    writeln!(writer, "Title: {}", result.title.as_deref().unwrap_or(""))?;
    writeln!(writer, "Status Code: {}", result.status_code.unwrap_or(0))?;
    writeln!(
        writer,
        "Request Duration: {} Milliseconds",
        result.duration.map(|d| d.as_millis()).unwrap_or(0)
    )?;
    writeln!(
        writer,
        "Original Suggested Name: {}",
        result.job.suggested_name
    )?;
    writeln!(writer, "Target URL: {}", result.job.target_url)?;
    writeln!(writer, "Success: {}", result.success)?;
    writeln!(writer, "{}", SEPARATOR)?;
    Ok(())
}
