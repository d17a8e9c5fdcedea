use crate::errors::Result;
use crate::rules::Finding;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub metadata: &'a Metadata,
    pub findings: &'a [Finding],
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub root: PathBuf,
    pub files_checked: usize,
    pub files_skipped: usize,
    pub imports_checked: usize,
    pub finding_count: usize,
    pub elapsed_ms: u64,
}

/// Write check output as JSON.
pub fn write_check_json<W: Write>(
    writer: &mut W,
    findings: &[Finding],
    metadata: &Metadata,
) -> Result<()> {
    let output = CheckOutput { metadata, findings };
    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)?;
    Ok(())
}
