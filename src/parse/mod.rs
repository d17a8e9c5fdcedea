pub mod ecma;

pub use ecma::{Dialect, EcmaFrontend};

/// One import-like statement extracted from a source file: an
/// `import … from "x"`, a `require("x")`, or a dynamic `import("x")`.
#[derive(Debug, Clone)]
pub struct ImportEntry {
    /// The specifier string as written in source, quotes stripped.
    pub specifier: String,
    /// Line of the specifier (1-indexed).
    pub line: usize,
    /// Column of the specifier (1-indexed).
    pub column: usize,
}

/// A `const X = require("path")` binding, for the naming rule.
#[derive(Debug, Clone)]
pub struct RequireBinding {
    /// Bound identifier (or the pattern text for destructuring forms).
    pub name: String,
    /// The require path, quotes stripped.
    pub path: String,
    /// Line of the bound name (1-indexed).
    pub line: usize,
    /// Column of the bound name (1-indexed).
    pub column: usize,
}

/// Everything the rules need from one parsed file.
#[derive(Debug, Clone, Default)]
pub struct FileEntries {
    pub imports: Vec<ImportEntry>,
    pub bindings: Vec<RequireBinding>,
}
