pub mod closest;
pub mod extensions;
pub mod locate;

pub use closest::find_canonical_target;
pub use extensions::supported_extensions;
pub use locate::locate_import_target;

use crate::vfs::FsView;
use std::path::Path;

/// Check one import specifier written in `source_file`.
///
/// Pure apart from the probes behind `fs`: the same view, file, specifier,
/// and root always produce the same answer. Returns the suggested canonical
/// root-relative path, or `None` when the import is fine (non-relative,
/// unresolvable, intra-module, or already canonical).
pub fn check_import(
    fs: &dyn FsView,
    source_file: &Path,
    specifier: &str,
    repo_root: &Path,
) -> Option<String> {
    if !specifier.starts_with('.') {
        return None;
    }

    let resolved = locate_import_target(fs, source_file, specifier)?;
    find_canonical_target(fs, source_file, &resolved, repo_root)
}
