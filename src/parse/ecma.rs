use crate::parse::{FileEntries, ImportEntry, RequireBinding};
use std::path::Path;
use streaming_iterator::StreamingIterator;

/// Grammar flavor, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Dialect {
    /// `None` for files this tool does not read.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js") | Some("jsx") | Some("cjs") | Some("mjs") => Some(Dialect::JavaScript),
            Some("ts") => Some(Dialect::TypeScript),
            Some("tsx") => Some(Dialect::Tsx),
            _ => None,
        }
    }

    fn language(self) -> tree_sitter::Language {
        match self {
            Dialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

pub struct EcmaFrontend;

impl EcmaFrontend {
    pub fn new() -> Self {
        Self
    }

    /// Extract import specifiers and require bindings from one file.
    ///
    /// Returns empty entries when the file extension is unknown or the
    /// parse fails outright; syntax errors inside the file only hide the
    /// statements they swallow.
    pub fn extract(&self, source: &[u8], file_path: &Path) -> FileEntries {
        let Some(dialect) = Dialect::from_path(file_path) else {
            return FileEntries::default();
        };

        let lang = dialect.language();
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&lang)
            .expect("failed to set ECMAScript language");

        let tree = match parser.parse(source, None) {
            Some(t) => t,
            None => {
                tracing::warn!("parse failed for {}", file_path.display());
                return FileEntries::default();
            }
        };

        let mut entries = FileEntries::default();
        Self::collect_import_statements(&lang, &tree, source, &mut entries);
        Self::collect_call_imports(&lang, &tree, source, &mut entries);
        Self::collect_require_bindings(&lang, &tree, source, &mut entries);
        entries
    }

    /// `import … from "x"` statements.
    fn collect_import_statements(
        lang: &tree_sitter::Language,
        tree: &tree_sitter::Tree,
        source: &[u8],
        entries: &mut FileEntries,
    ) {
        let query_str = r#"(import_statement source: (string) @source)"#;
        let query =
            tree_sitter::Query::new(lang, query_str).expect("failed to compile import query");

        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source);
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(entry) = Self::entry_from_string_node(capture.node, source) {
                    entries.imports.push(entry);
                }
            }
        }
    }

    /// `require("x")` and dynamic `import("x")` call arguments.
    fn collect_call_imports(
        lang: &tree_sitter::Language,
        tree: &tree_sitter::Tree,
        source: &[u8],
        entries: &mut FileEntries,
    ) {
        let query_str = r#"(call_expression
            function: (_) @callee
            arguments: (arguments . (string) @arg))"#;
        let query =
            tree_sitter::Query::new(lang, query_str).expect("failed to compile call query");

        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source);
        while let Some(m) = matches.next() {
            let callee = m.captures.iter().find(|c| c.index == 0);
            let arg = m.captures.iter().find(|c| c.index == 1);
            let (Some(callee), Some(arg)) = (callee, arg) else {
                continue;
            };

            let is_import_call = match callee.node.kind() {
                "import" => true,
                "identifier" => callee.node.utf8_text(source) == Ok("require"),
                _ => false,
            };
            if !is_import_call {
                continue;
            }

            if let Some(entry) = Self::entry_from_string_node(arg.node, source) {
                entries.imports.push(entry);
            }
        }
    }

    /// `const X = require("x")` declarators.
    fn collect_require_bindings(
        lang: &tree_sitter::Language,
        tree: &tree_sitter::Tree,
        source: &[u8],
        entries: &mut FileEntries,
    ) {
        let query_str = r#"(variable_declarator
            name: (_) @name
            value: (call_expression
                function: (identifier) @callee
                arguments: (arguments . (string) @arg)))"#;
        let query =
            tree_sitter::Query::new(lang, query_str).expect("failed to compile require query");

        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source);
        while let Some(m) = matches.next() {
            let name = m.captures.iter().find(|c| c.index == 0);
            let callee = m.captures.iter().find(|c| c.index == 1);
            let arg = m.captures.iter().find(|c| c.index == 2);
            let (Some(name), Some(callee), Some(arg)) = (name, callee, arg) else {
                continue;
            };
            if callee.node.utf8_text(source) != Ok("require") {
                continue;
            }
            let Some(path) = Self::string_value(arg.node, source) else {
                continue;
            };
            let Ok(name_text) = name.node.utf8_text(source) else {
                continue;
            };

            entries.bindings.push(RequireBinding {
                name: name_text.to_string(),
                path,
                line: name.node.start_position().row + 1,
                column: name.node.start_position().column + 1,
            });
        }
    }

    fn entry_from_string_node(node: tree_sitter::Node, source: &[u8]) -> Option<ImportEntry> {
        let specifier = Self::string_value(node, source)?;
        Some(ImportEntry {
            specifier,
            line: node.start_position().row + 1,
            column: node.start_position().column + 1,
        })
    }

    /// Literal value of a `string` node, without the surrounding quotes.
    fn string_value(node: tree_sitter::Node, source: &[u8]) -> Option<String> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "string_fragment" {
                return child.utf8_text(source).ok().map(str::to_string);
            }
        }
        // Empty string literal: no fragment child.
        None
    }
}

impl Default for EcmaFrontend {
    fn default() -> Self {
        Self::new()
    }
}
