//! Closest-index import checking for JavaScript/TypeScript source trees.
//!
//! The core lives in [`resolve`]: given a file, a relative import specifier,
//! and a repository root, it decides whether the import should point at the
//! nearest enclosing `index` file instead, probing the filesystem through
//! the [`vfs::FsView`] trait so the whole algorithm runs against an
//! in-memory tree in tests. Everything else — tree-sitter extraction,
//! the rule adapters, config, walking, output — is the host machinery
//! around that core.

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod parse;
pub mod resolve;
pub mod rules;
pub mod vfs;
pub mod walk;

pub use errors::{IndexwiseError, Result};
pub use resolve::check_import;
pub use rules::Finding;
pub use vfs::{FsView, MemFs, RealFs};
