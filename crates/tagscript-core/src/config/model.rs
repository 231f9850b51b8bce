use crate::config::consts::nesting::{MAX_CONFIGURABLE_DEPTH, MAX_NESTING};
use crate::error::{Result, TagscriptError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// tagscript.toml schema
///
/// ```toml
/// [engine]
/// max_depth = 15
///
/// [vars]
/// "user.name" = "Ann"
/// ```
///
/// Variable names containing dots must be quoted, otherwise TOML reads them
/// as nested tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

/// Interpreter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deepest placeholder nesting that is still evaluated
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING,
        }
    }
}

fn default_max_depth() -> usize {
    MAX_NESTING
}

impl EngineConfig {
    /// Depth bound actually enforced by the interpreter
    ///
    /// Unvalidated configs are clamped instead of rejected so that rendering
    /// stays infallible.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_CONFIGURABLE_DEPTH)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_CONFIGURABLE_DEPTH {
            return Err(TagscriptError::ConfigInvalidValue {
                field: "engine.max_depth".to_string(),
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.max_depth, MAX_CONFIGURABLE_DEPTH
                ),
            });
        }
        Ok(())
    }
}

impl Config {
    /// Load and validate a tagscript.toml file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;

        if let Some(name) = self.vars.keys().find(|name| name.trim().is_empty()) {
            return Err(TagscriptError::ConfigInvalidValue {
                field: "vars".to_string(),
                reason: format!("variable name '{}' is blank", name),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.engine.max_depth, MAX_NESTING);
        assert!(config.vars.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[engine]
max_depth = 8

[vars]
"user.name" = "Ann"
greeting = "hi"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.engine.max_depth, 8);
        assert_eq!(config.vars.get("user.name").map(String::as_str), Some("Ann"));
        assert_eq!(config.vars.get("greeting").map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_unquoted_dotted_var_is_a_parse_error() {
        let toml = r#"
[vars]
user.name = "Ann"
"#;
        let result = Config::from_toml_str(toml);
        assert!(matches!(result, Err(TagscriptError::ConfigParseError(_))));
    }

    #[test]
    fn test_max_depth_above_limit_is_rejected() {
        let toml = format!("[engine]\nmax_depth = {}\n", MAX_CONFIGURABLE_DEPTH + 1);
        match Config::from_toml_str(&toml) {
            Err(TagscriptError::ConfigInvalidValue { field, .. }) => {
                assert_eq!(field, "engine.max_depth");
            }
            other => panic!("Expected ConfigInvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_var_name_is_rejected() {
        let toml = r#"
[vars]
" " = "x"
"#;
        assert!(matches!(
            Config::from_toml_str(toml),
            Err(TagscriptError::ConfigInvalidValue { .. })
        ));
    }

    #[test]
    fn test_effective_max_depth_clamps() {
        let config = EngineConfig { max_depth: 1000 };
        assert_eq!(config.effective_max_depth(), MAX_CONFIGURABLE_DEPTH);
        assert_eq!(EngineConfig::default().effective_max_depth(), MAX_NESTING);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = Config::from_file(temp.path().join("missing.toml"));
        assert!(matches!(result, Err(TagscriptError::IoError(_))));
    }

    #[test]
    fn test_from_file_reads_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tagscript.toml");
        std::fs::write(&path, "[engine]\nmax_depth = 3\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.engine.max_depth, 3);
    }
}
