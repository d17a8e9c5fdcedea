use crate::resolve::extensions::supported_extensions;
use crate::vfs::FsView;
use std::path::{Component, Path};

/// Search the ancestor chain of `resolved_target` for the nearest index file
/// the import should point at instead.
///
/// Ancestors are probed shallowest first, bounded above by `repo_root`;
/// within one ancestor, extensions follow the family order of
/// `resolved_target`. The first existing index file decides the outcome:
/// - the importing file already lives under that index's directory
///   (intra-module import) -> no finding;
/// - the index file *is* the resolved target -> already canonical, no
///   finding;
/// - otherwise -> the suggested root-relative unix path.
pub fn find_canonical_target(
    fs: &dyn FsView,
    source_file: &Path,
    resolved_target: &Path,
    repo_root: &Path,
) -> Option<String> {
    let relative = resolved_target.strip_prefix(repo_root).ok()?;
    let extensions = supported_extensions(resolved_target);

    let mut ancestor = repo_root.to_path_buf();
    for segment in relative.components() {
        let Component::Normal(segment) = segment else {
            continue;
        };
        ancestor.push(segment);

        for ext in extensions {
            let index_path = ancestor.join(format!("index{ext}"));
            if fs.exists(&index_path) {
                if source_file.starts_with(&ancestor) {
                    return None;
                }
                if index_path != resolved_target {
                    return Some(unix_relative(&index_path, repo_root));
                }
                return None;
            }
        }
    }

    None
}

/// Render `path` relative to `root` with forward slashes and no leading or
/// trailing separator, regardless of host platform.
pub fn unix_relative(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
