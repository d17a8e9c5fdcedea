pub mod closest_index;
pub mod require_name;

use serde::Serialize;
use std::path::PathBuf;

pub const CLOSEST_INDEX: &str = "closest-index";
pub const REQUIRE_NAME: &str = "require-name";

/// A single rule violation, located in a source file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    /// Rule id (`closest-index` or `require-name`).
    pub rule: &'static str,
    /// Root-relative path of the offending file.
    pub file: PathBuf,
    /// Line of the offending node (1-indexed).
    pub line: usize,
    /// Column of the offending node (1-indexed).
    pub column: usize,
    /// Human-readable message.
    pub message: String,
}
