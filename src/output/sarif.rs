use crate::errors::Result;
use crate::rules::{Finding, CLOSEST_INDEX, REQUIRE_NAME};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    information_uri: String,
    rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
    start_column: usize,
}

/// Write check findings as SARIF 2.1.0.
pub fn write_sarif<W: Write>(writer: &mut W, findings: &[Finding]) -> Result<()> {
    let results: Vec<SarifResult> = findings
        .iter()
        .map(|finding| SarifResult {
            rule_id: format!("indexwise/{}", finding.rule),
            level: "warning".to_string(),
            message: SarifMessage {
                text: finding.message.clone(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: finding
                            .file
                            .to_string_lossy()
                            .replace(std::path::MAIN_SEPARATOR, "/"),
                    },
                    region: SarifRegion {
                        start_line: finding.line,
                        start_column: finding.column,
                    },
                },
            }],
        })
        .collect();

    let log = SarifLog {
        schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "indexwise".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    information_uri: "https://github.com/jonochang/indexwise".to_string(),
                    rules: vec![
                        SarifRule {
                            id: format!("indexwise/{CLOSEST_INDEX}"),
                            name: "ClosestIndex".to_string(),
                            short_description: SarifMessage {
                                text: "Relative import should point at the nearest enclosing index file".to_string(),
                            },
                        },
                        SarifRule {
                            id: format!("indexwise/{REQUIRE_NAME}"),
                            name: "RequireName".to_string(),
                            short_description: SarifMessage {
                                text: "Identifier bound to require() must match the configured name table".to_string(),
                            },
                        },
                    ],
                },
            },
            results,
        }],
    };

    serde_json::to_writer_pretty(&mut *writer, &log)?;
    writeln!(writer)?;
    Ok(())
}
