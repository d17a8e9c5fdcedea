use crate::errors::Result;
use globset::{Glob, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File extensions this tool reads.
pub const EXTENSIONS: &[&str] = &["js", "jsx", "cjs", "mjs", "ts", "tsx"];

/// Discover JavaScript/TypeScript source files under `root`.
///
/// - Respects `.gitignore`
/// - Applies include/exclude glob patterns
/// - Returns sorted paths for deterministic output
pub fn discover_files(
    root: &Path,
    include_patterns: &[String],
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let mut exclude_builder = GlobSetBuilder::new();
    for pattern in exclude_patterns {
        exclude_builder.add(Glob::new(pattern)?);
    }
    let exclude_set = exclude_builder.build()?;

    let include_set = if include_patterns.is_empty() {
        None
    } else {
        let mut builder = GlobSetBuilder::new();
        for pattern in include_patterns {
            builder.add(Glob::new(pattern)?);
        }
        Some(builder.build()?)
    };

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext_match = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext));

        if !ext_match {
            continue;
        }

        // Glob matching runs on the root-relative path
        let relative = path.strip_prefix(root).unwrap_or(path);

        if exclude_set.is_match(relative) || exclude_set.is_match(path) {
            continue;
        }
        // Also check just the filename for patterns like *.test.js
        if let Some(fname) = path.file_name() {
            if exclude_set.is_match(Path::new(fname)) {
                continue;
            }
        }

        if let Some(ref include) = include_set {
            if !include.is_match(relative) && !include.is_match(path) {
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    Ok(files)
}
