//! JSON-lines result output

use crate::job::JobResult;
use crate::output::traits::{OutputResult, ResultSink};
use serde::Serialize;
use std::io::Write;

/// Serialized shape of one result
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    title: Option<&'a str>,
    status_code: Option<u16>,
    duration_ms: Option<u64>,
    suggested_name: &'a str,
    target_url: &'a str,
    success: bool,
}

impl<'a> From<&'a JobResult> for ResultRow<'a> {
    fn from(result: &'a JobResult) -> Self {
        Self {
            title: result.title.as_deref(),
            status_code: result.status_code,
            duration_ms: result.duration.map(|d| d.as_millis() as u64),
            suggested_name: &result.job.suggested_name,
            target_url: &result.job.target_url,
            success: result.success,
        }
    }
}

/// Writes one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for JsonLinesSink<W> {
    fn accept(&mut self, result: JobResult) -> OutputResult<()> {
        serde_json::to_writer(&mut self.writer, &ResultRow::from(&result))?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
