use crate::parse::ImportEntry;
use crate::resolve;
use crate::rules::{Finding, CLOSEST_INDEX};
use crate::vfs::FsView;
use std::path::Path;

/// Run the closest-index rule over every import extracted from one file.
///
/// `source_file` is absolute; `relative_file` is its root-relative form used
/// in findings. At most one finding is produced per import statement.
pub fn check_file(
    fs: &dyn FsView,
    source_file: &Path,
    relative_file: &Path,
    imports: &[ImportEntry],
    repo_root: &Path,
) -> Vec<Finding> {
    imports
        .iter()
        .filter_map(|entry| {
            let suggested = resolve::check_import(fs, source_file, &entry.specifier, repo_root)?;
            Some(Finding {
                rule: CLOSEST_INDEX,
                file: relative_file.to_path_buf(),
                line: entry.line,
                column: entry.column,
                message: format!("Expected to import \"{suggested}\"."),
            })
        })
        .collect()
}
