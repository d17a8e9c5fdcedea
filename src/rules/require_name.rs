use crate::errors::{IndexwiseError, Result};
use crate::parse::RequireBinding;
use crate::rules::{Finding, REQUIRE_NAME};
use regex::Regex;
use std::path::Path;

/// How a rule entry matches a require path. Parsed from config and
/// validated at load time; no pattern text is interpreted later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// Whole-path equality.
    Literal(String),
    /// `/pattern/flags` form. Supported flags: `i`, `m`, `s`.
    Regex { pattern: String, flags: String },
}

/// One entry of the name table: bindings whose require path matches
/// `matcher` must be named `name` (after `$<digit>` substitution).
#[derive(Debug, Clone)]
pub struct NameRule {
    pub name: String,
    pub matcher: PathMatcher,
}

/// Compiled rule table. First matching entry wins.
#[derive(Debug, Clone, Default)]
pub struct RequireNameRule {
    compiled: Vec<(String, Regex)>,
}

impl RequireNameRule {
    pub fn compile(rules: &[NameRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let matcher = match &rule.matcher {
                PathMatcher::Literal(path) => {
                    Regex::new(&format!("^{}$", regex::escape(path)))?
                }
                PathMatcher::Regex { pattern, flags } => {
                    for flag in flags.chars() {
                        if !matches!(flag, 'i' | 'm' | 's') {
                            return Err(IndexwiseError::Config(format!(
                                "unsupported regex flag {flag:?} in matcher /{pattern}/{flags}"
                            )));
                        }
                    }
                    if flags.is_empty() {
                        Regex::new(pattern)?
                    } else {
                        Regex::new(&format!("(?{flags}){pattern}"))?
                    }
                }
            };
            compiled.push((rule.name.clone(), matcher));
        }
        Ok(Self { compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Check one binding against the table. Returns the expected name when
    /// the actual one differs.
    pub fn expected_name(&self, binding: &RequireBinding) -> Option<String> {
        let path = strip_script_extension(&binding.path);

        for (name, matcher) in &self.compiled {
            if matcher.is_match(path) {
                let expected = if has_capture_placeholder(name) {
                    let template = brace_placeholders(name);
                    matcher.replace(path, template.as_str()).into_owned()
                } else {
                    name.clone()
                };
                if expected != binding.name {
                    return Some(expected);
                }
                return None;
            }
        }
        None
    }

    pub fn check_file(&self, relative_file: &Path, bindings: &[RequireBinding]) -> Vec<Finding> {
        bindings
            .iter()
            .filter_map(|binding| {
                let expected = self.expected_name(binding)?;
                Some(Finding {
                    rule: REQUIRE_NAME,
                    file: relative_file.to_path_buf(),
                    line: binding.line,
                    column: binding.column,
                    message: format!("Expected \"{}\" to be \"{expected}\".", binding.name),
                })
            })
            .collect()
    }
}

/// Require paths compare without a trailing script extension, so
/// `require('./aaa.js')` and `require('./aaa')` hit the same entry.
fn strip_script_extension(path: &str) -> &str {
    for ext in [".js", ".jsx", ".cjs", ".mjs", ".cjsx", ".mjsx"] {
        if let Some(stripped) = path.strip_suffix(ext) {
            return stripped;
        }
    }
    path
}

fn has_capture_placeholder(name: &str) -> bool {
    name.as_bytes()
        .windows(2)
        .any(|w| w[0] == b'$' && w[1].is_ascii_digit())
}

/// Turn `$1Service` into `${1}Service` so the replacement engine reads the
/// digits as a group number with the rest as literal text, matching how
/// `$1` behaves in a JS `String.replace`. A `$` not followed by a digit is
/// escaped to stay literal.
fn brace_placeholders(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        if chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            out.push_str("${");
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                out.push(d);
                chars.next();
            }
            out.push('}');
        } else {
            out.push_str("$$");
        }
    }
    out
}
