use crate::errors::Result;
use crate::output::json::Metadata;
use crate::rules::Finding;
use std::io::Write;

/// Write check output as human-readable text, findings grouped by file.
pub fn write_check_text<W: Write>(
    writer: &mut W,
    findings: &[Finding],
    metadata: &Metadata,
) -> Result<()> {
    let mut current_file = None;

    for finding in findings {
        if current_file != Some(&finding.file) {
            if current_file.is_some() {
                writeln!(writer)?;
            }
            writeln!(writer, "{}", finding.file.display())?;
            current_file = Some(&finding.file);
        }
        writeln!(
            writer,
            "  {}:{}  {}  {}",
            finding.line, finding.column, finding.rule, finding.message
        )?;
    }

    if !findings.is_empty() {
        writeln!(writer)?;
    }
    writeln!(
        writer,
        "{} finding{} in {} file{} ({} checked, {} skipped)",
        metadata.finding_count,
        if metadata.finding_count == 1 { "" } else { "s" },
        distinct_files(findings),
        if distinct_files(findings) == 1 { "" } else { "s" },
        metadata.files_checked,
        metadata.files_skipped,
    )?;

    Ok(())
}

fn distinct_files(findings: &[Finding]) -> usize {
    let mut files: Vec<_> = findings.iter().map(|f| &f.file).collect();
    files.dedup();
    files.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CLOSEST_INDEX, REQUIRE_NAME};
    use std::path::PathBuf;

    #[test]
    fn groups_findings_by_file() {
        let findings = vec![
            Finding {
                rule: CLOSEST_INDEX,
                file: PathBuf::from("src/a.js"),
                line: 1,
                column: 20,
                message: "Expected to import \"src/lib/index.js\".".to_string(),
            },
            Finding {
                rule: REQUIRE_NAME,
                file: PathBuf::from("src/b.js"),
                line: 2,
                column: 7,
                message: "Expected \"x\" to be \"XRay\".".to_string(),
            },
        ];
        let metadata = Metadata {
            root: PathBuf::from("/repo"),
            files_checked: 2,
            files_skipped: 0,
            imports_checked: 5,
            finding_count: 2,
            elapsed_ms: 1,
        };
        let mut buf = Vec::new();
        write_check_text(&mut buf, &findings, &metadata).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("src/a.js\n  1:20  closest-index"));
        assert!(text.contains("src/b.js\n  2:7  require-name"));
        assert!(text.contains("2 findings in 2 files"));
    }

    #[test]
    fn clean_run_prints_zero_summary() {
        let metadata = Metadata {
            root: PathBuf::from("/repo"),
            files_checked: 3,
            files_skipped: 1,
            imports_checked: 9,
            finding_count: 0,
            elapsed_ms: 1,
        };
        let mut buf = Vec::new();
        write_check_text(&mut buf, &[], &metadata).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("0 findings in 0 files (3 checked, 1 skipped)"));
    }
}
