use crate::resolve::extensions::supported_extensions;
use crate::vfs::FsView;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Locate the file a relative import specifier currently points to.
///
/// Mirrors Node-style resolution for project-internal paths: implicit
/// extensions first, then directory-index fallback. Returns `None` when
/// nothing on disk matches — the specifier is then out of model (most
/// likely handled by a bundler or package resolver) and the caller drops it.
pub fn locate_import_target(
    fs: &dyn FsView,
    source_file: &Path,
    specifier: &str,
) -> Option<PathBuf> {
    let extensions = supported_extensions(source_file);

    let base = source_file.parent().unwrap_or(Path::new(""));
    let joined = normalize(&base.join(specifier));

    if joined.extension().is_none() {
        for ext in extensions {
            let candidate = append_extension(&joined, ext);
            if fs.exists(&candidate) {
                return Some(candidate);
            }
        }
    }

    if fs.exists(&joined) {
        if fs.is_dir(&joined) {
            for ext in extensions {
                let candidate = joined.join(format!("index{ext}"));
                if fs.exists(&candidate) {
                    return Some(candidate);
                }
            }
        } else {
            return Some(joined);
        }
    }

    None
}

/// Resolve `.` and `..` components lexically. `..` at the root clamps there,
/// matching `path.resolve` on an absolute base.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Append `ext` (including its leading dot) to the final component as raw
/// text. `Path::set_extension` would replace an existing suffix instead.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(ext);
    PathBuf::from(os)
}
