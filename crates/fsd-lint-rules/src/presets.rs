//! Rule presets for common configurations.

use crate::{LayerImports, PublicApiImports, RelativeImports};
use fsd_lint_core::{Config, ConfigError, PatternError, RuleBox};
use std::str::FromStr;

/// Preset configurations for fsd-lint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every boundary rule.
    #[default]
    Recommended,
    /// Only the layer hierarchy, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the default-configured rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Names of the rules in this preset.
    #[must_use]
    pub fn rule_names(self) -> &'static [&'static str] {
        match self {
            Self::Recommended => &[
                crate::layer_imports::NAME,
                crate::public_api_imports::NAME,
                crate::relative_imports::NAME,
            ],
            Self::Minimal => &[crate::layer_imports::NAME],
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!(
                "unknown preset '{other}' (expected: recommended, minimal)"
            )),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `layer-imports` (FSD001) - Enforces layer import direction
/// - `public-api-imports` (FSD002) - Requires public API imports
/// - `relative-imports` (FSD003) - Relative inside a slice, absolute across
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes `layer-imports`.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(LayerImports::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(LayerImports::new()),
        Box::new(PublicApiImports::new()),
        Box::new(RelativeImports::new()),
    ]
}

/// Builds the configured preset's rules with options taken from
/// `[rules.<name>]`.
///
/// An unknown preset name falls back to [`Preset::Recommended`].
///
/// # Errors
///
/// Returns an error if a rule's pattern option is invalid.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let preset = config
        .preset
        .as_deref()
        .and_then(|name| match name.parse::<Preset>() {
            Ok(preset) => Some(preset),
            Err(e) => {
                tracing::warn!("{e}; using recommended");
                None
            }
        })
        .unwrap_or_default();
    preset.configured_rules(config)
}

impl Preset {
    /// Builds this preset's rules with options taken from `[rules.<name>]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule's pattern option is invalid.
    pub fn configured_rules(self, config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
        let pattern_error = |rule: &str| {
            let rule = rule.to_string();
            move |source: PatternError| ConfigError::Pattern {
                field: format!("rules.{rule}"),
                source,
            }
        };

        let mut rules: Vec<RuleBox> = Vec::new();
        for name in self.rule_names() {
            let options = config.rule(name);
            let rule: RuleBox = match *name {
                crate::layer_imports::NAME => {
                    Box::new(LayerImports::from_config(options).map_err(pattern_error(name))?)
                }
                crate::public_api_imports::NAME => Box::new(
                    PublicApiImports::from_config(options).map_err(pattern_error(name))?,
                ),
                _ => Box::new(RelativeImports::from_config(options).map_err(pattern_error(name))?),
            };
            rules.push(rule);
        }
        Ok(rules)
    }
}
