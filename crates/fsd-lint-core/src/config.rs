//! Configuration types for fsd-lint.

use crate::layer::{LayerConfig, UnknownLayerRole};
use crate::pattern::{PatternError, PatternSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Top-level configuration for fsd-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to start from ("recommended" or "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit code (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Settings shared by every rule.
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails [`Config::validate`].
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks layer names and every glob pattern in the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.layer_config()?;
        self.settings.ignore_import_patterns()?;
        self.settings.ignore_file_patterns()?;
        for (name, rule) in &self.rules {
            for key in RuleConfig::PATTERN_KEYS {
                rule.patterns(key).map_err(|source| ConfigError::Pattern {
                    field: format!("rules.{name}.{key}"),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration block of a rule, if present.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Parses `fail_on` into a severity, defaulting to `Error`.
    #[must_use]
    pub fn fail_on_severity(&self) -> crate::Severity {
        match self.fail_on.as_deref() {
            Some("warning") => crate::Severity::Warning,
            Some("info") => crate::Severity::Info,
            _ => crate::Severity::Error,
        }
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// File extensions to analyze.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            extensions: default_extensions(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
    ]
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "mts", "cts", "mjs", "cjs"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}

/// The `[settings]` table: options every rule sees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Import alias prefix, without the trailing slash (e.g. `@`).
    #[serde(default)]
    pub alias: String,

    /// Canonical role → custom layer name.
    #[serde(default)]
    pub layers: BTreeMap<String, String>,

    /// Import specifiers exempt from every rule.
    #[serde(default)]
    pub ignore_imports: Vec<String>,

    /// Files (relative to `src`) exempt from every rule.
    #[serde(default)]
    pub ignore_files: Vec<String>,
}

impl SettingsConfig {
    /// Builds and checks the layer renaming.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown roles or two roles sharing one name.
    pub fn layer_config(&self) -> Result<LayerConfig, ConfigError> {
        let config = LayerConfig::from_map(&self.layers)?;
        if let Some(name) = config.duplicate_name() {
            return Err(ConfigError::DuplicateLayerName(name.to_string()));
        }
        Ok(config)
    }

    /// Compiles `ignore_imports`.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn ignore_import_patterns(&self) -> Result<PatternSet, ConfigError> {
        compile("settings.ignore_imports", &self.ignore_imports)
    }

    /// Compiles `ignore_files`.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn ignore_file_patterns(&self) -> Result<PatternSet, ConfigError> {
        compile("settings.ignore_files", &self.ignore_files)
    }
}

fn compile(field: &str, patterns: &[String]) -> Result<PatternSet, ConfigError> {
    PatternSet::new(patterns).map_err(|source| ConfigError::Pattern {
        field: field.to_string(),
        source,
    })
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Option keys holding glob pattern lists.
    pub const PATTERN_KEYS: [&'static str; 3] = [
        "ignore_imports_pattern",
        "ignore_files_pattern",
        "test_file_patterns",
    ];

    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a string array option. A single string counts as a one-item list.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        match self.options.get(key) {
            Some(toml::Value::String(s)) => vec![s.clone()],
            Some(toml::Value::Array(arr)) => arr
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Compiles a string array option as glob patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn patterns(&self, key: &str) -> Result<PatternSet, PatternError> {
        PatternSet::new(self.get_str_array(key))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// `[settings.layers]` names something that is not a layer role.
    #[error("Invalid [settings.layers]: {0}")]
    UnknownLayer(#[from] UnknownLayerRole),

    /// Two roles renamed to the same display name.
    #[error("Invalid [settings.layers]: '{0}' is used for more than one layer")]
    DuplicateLayerName(String),

    /// A glob pattern failed to compile.
    #[error("Invalid pattern in {field}: {source}")]
    Pattern {
        /// Dotted path of the offending option.
        field: String,
        /// Underlying pattern error.
        source: PatternError,
    },
}
