pub mod schema;

use crate::errors::{IndexwiseError, Result};
use crate::rules::require_name::{NameRule, PathMatcher, RequireNameRule};
use schema::FileConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "indexwise.toml";

/// Fully resolved configuration — no Option fields.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub format: Option<String>,
    pub quiet: bool,

    pub include: Vec<String>,
    pub exclude: Vec<String>,

    pub closest_index: ClosestIndexRule,
    pub require_name: RequireNameRuleConfig,

    pub loaded_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ClosestIndexRule {
    pub enabled: bool,
}

impl Default for ClosestIndexRule {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Name table compiled and validated at load time.
#[derive(Debug, Clone)]
pub struct RequireNameRuleConfig {
    pub enabled: bool,
    pub table: RequireNameRule,
}

impl Default for RequireNameRuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            table: RequireNameRule::default(),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            format: None,
            quiet: false,
            include: vec![],
            exclude: vec![],
            closest_index: ClosestIndexRule::default(),
            require_name: RequireNameRuleConfig::default(),
            loaded_file: None,
        }
    }
}

/// Load configuration for a check rooted at `root`.
///
/// `explicit` (from `--config`) must exist; the repo-local
/// `indexwise.toml` is optional.
pub fn load(root: &Path, explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let path = match explicit {
        Some(p) => {
            if !p.is_file() {
                return Err(IndexwiseError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            Some(p.to_path_buf())
        }
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };

    let Some(path) = path else {
        return Ok(ResolvedConfig::default());
    };

    let text = std::fs::read_to_string(&path)?;
    let file: FileConfig = toml::from_str(&text)?;
    let mut resolved = resolve(file)?;
    resolved.loaded_file = Some(path);
    Ok(resolved)
}

fn resolve(file: FileConfig) -> Result<ResolvedConfig> {
    let mut names = Vec::new();
    let mut require_name_enabled = true;
    let mut closest_index_enabled = true;

    if let Some(ci) = file.rules.closest_index {
        closest_index_enabled = ci.enabled.unwrap_or(true);
    }
    if let Some(rn) = file.rules.require_name {
        require_name_enabled = rn.enabled.unwrap_or(true);
        for (name, value) in &rn.names {
            let Some(text) = value.as_str() else {
                return Err(IndexwiseError::Config(format!(
                    "rules.require_name.names.{name} must be a string"
                )));
            };
            names.push(NameRule {
                name: name.clone(),
                matcher: parse_matcher(text)?,
            });
        }
    }

    Ok(ResolvedConfig {
        format: file.defaults.format,
        quiet: file.defaults.quiet.unwrap_or(false),
        include: file.targeting.include,
        exclude: file.targeting.exclude,
        closest_index: ClosestIndexRule {
            enabled: closest_index_enabled,
        },
        require_name: RequireNameRuleConfig {
            enabled: require_name_enabled,
            table: RequireNameRule::compile(&names)?,
        },
        loaded_file: None,
    })
}

/// A value bounded by `/…/` (optionally followed by flags) is a regex
/// matcher; anything else is literal path equality.
pub fn parse_matcher(text: &str) -> Result<PathMatcher> {
    if let Some(rest) = text.strip_prefix('/') {
        let Some(close) = rest.rfind('/') else {
            return Err(IndexwiseError::Config(format!(
                "unterminated regex matcher: {text}"
            )));
        };
        return Ok(PathMatcher::Regex {
            pattern: rest[..close].to_string(),
            flags: rest[close + 1..].to_string(),
        });
    }
    Ok(PathMatcher::Literal(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve_str(text: &str) -> Result<ResolvedConfig> {
        resolve(toml::from_str(text).unwrap())
    }

    #[test]
    fn empty_config_has_defaults() {
        let cfg = resolve_str("").unwrap();
        assert!(cfg.closest_index.enabled);
        assert!(cfg.require_name.enabled);
        assert!(cfg.require_name.table.is_empty());
        assert!(!cfg.quiet);
    }

    #[test]
    fn matcher_forms_parse() {
        assert_eq!(
            parse_matcher("./aaa").unwrap(),
            PathMatcher::Literal("./aaa".into())
        );
        assert_eq!(
            parse_matcher("/^services/(\\w+)$/i").unwrap(),
            PathMatcher::Regex {
                pattern: "^services/(\\w+)$".into(),
                flags: "i".into(),
            }
        );
        assert!(parse_matcher("/unclosed").is_err());
    }

    #[test]
    fn name_table_resolves_in_declaration_order() {
        let cfg = resolve_str(
            r#"
[rules.require_name.names]
AAA = "aaa"
BBB = "/^b/"
"#,
        )
        .unwrap();
        assert!(!cfg.require_name.table.is_empty());
    }

    #[test]
    fn bad_regex_fails_at_load() {
        let result = resolve_str(
            r#"
[rules.require_name.names]
X = "/(/"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_string_name_entry_is_rejected() {
        let result = resolve_str(
            r#"
[rules.require_name.names]
X = 3
"#,
        );
        assert!(matches!(result, Err(IndexwiseError::Config(_))));
    }

    #[test]
    fn rules_can_be_disabled() {
        let cfg = resolve_str(
            r#"
[rules.closest_index]
enabled = false
"#,
        )
        .unwrap();
        assert!(!cfg.closest_index.enabled);
    }
}
