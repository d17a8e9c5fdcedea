use serde::Deserialize;

/// TOML-deserializable config file. All fields are Option so missing
/// sections fall back to defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub defaults: DefaultsFileConfig,
    #[serde(default)]
    pub targeting: TargetingFileConfig,
    #[serde(default)]
    pub rules: RulesFileConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsFileConfig {
    pub format: Option<String>,
    pub quiet: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TargetingFileConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesFileConfig {
    pub closest_index: Option<ClosestIndexRuleConfig>,
    pub require_name: Option<RequireNameRuleConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClosestIndexRuleConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RequireNameRuleConfig {
    pub enabled: Option<bool>,
    /// Ordered `identifier-pattern = "path-or-/regex/flags"` table.
    /// First matching entry wins, so declaration order matters.
    #[serde(default)]
    pub names: toml::map::Map<String, toml::Value>,
}
