//! Run-wide settings snapshot shared by every rule.

use crate::config::{ConfigError, SettingsConfig};
use crate::layer::{ImportRuleTable, LayerConfig, LayerRegistry};
use crate::pattern::PatternSet;

/// Immutable settings for one run: layer names, alias and global ignores.
///
/// Built once from configuration and shared by reference across every
/// statement; nothing mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    layers: LayerConfig,
    registry: LayerRegistry,
    rule_table: ImportRuleTable,
    alias: String,
    ignore_imports: PatternSet,
    ignore_files: PatternSet,
}

impl Settings {
    /// Default settings: canonical layer names, no alias, no ignores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds settings from the `[settings]` table.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid layer names or glob patterns.
    pub fn from_config(config: &SettingsConfig) -> Result<Self, ConfigError> {
        Ok(Self::new()
            .with_layers(config.layer_config()?)
            .with_alias(config.alias.clone())
            .with_ignore_imports(config.ignore_import_patterns()?)
            .with_ignore_files(config.ignore_file_patterns()?))
    }

    /// Replaces the layer renaming and re-derives the registry and rule table.
    #[must_use]
    pub fn with_layers(mut self, layers: LayerConfig) -> Self {
        self.registry = LayerRegistry::new(&layers);
        self.rule_table = ImportRuleTable::new(&layers);
        self.layers = layers;
        self
    }

    /// Sets the import alias (e.g. `@`).
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets the global import ignore patterns.
    #[must_use]
    pub fn with_ignore_imports(mut self, patterns: PatternSet) -> Self {
        self.ignore_imports = patterns;
        self
    }

    /// Sets the global file ignore patterns.
    #[must_use]
    pub fn with_ignore_files(mut self, patterns: PatternSet) -> Self {
        self.ignore_files = patterns;
        self
    }

    /// The layer renaming in effect.
    #[must_use]
    pub fn layers(&self) -> &LayerConfig {
        &self.layers
    }

    /// The layer registry in effect.
    #[must_use]
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// The import rule table in effect.
    #[must_use]
    pub fn rule_table(&self) -> &ImportRuleTable {
        &self.rule_table
    }

    /// The import alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Global import ignore patterns.
    #[must_use]
    pub fn ignore_imports(&self) -> &PatternSet {
        &self.ignore_imports
    }

    /// Global file ignore patterns.
    #[must_use]
    pub fn ignore_files(&self) -> &PatternSet {
        &self.ignore_files
    }
}
