//! Shared helpers for rule scenario tests.

#![allow(dead_code)]

use fsd_lint_core::{
    ImportContext, ImportRule, LayerConfig, LayerRole, PatternSet, Settings, Verdict,
};

/// Run-wide settings for one scenario.
#[derive(Default)]
pub struct Scenario {
    alias: Option<&'static str>,
    layers: Vec<(LayerRole, &'static str)>,
    ignore_imports: Vec<&'static str>,
    ignore_files: Vec<&'static str>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(mut self) -> Self {
        self.alias = Some("@");
        self
    }

    pub fn layer(mut self, role: LayerRole, name: &'static str) -> Self {
        self.layers.push((role, name));
        self
    }

    pub fn ignore_imports(mut self, patterns: &[&'static str]) -> Self {
        self.ignore_imports.extend_from_slice(patterns);
        self
    }

    pub fn ignore_files(mut self, patterns: &[&'static str]) -> Self {
        self.ignore_files.extend_from_slice(patterns);
        self
    }

    pub fn settings(&self) -> Settings {
        let layers = self
            .layers
            .iter()
            .fold(LayerConfig::new(), |config, (role, name)| config.rename(*role, *name));
        Settings::new()
            .with_layers(layers)
            .with_alias(self.alias.unwrap_or_default())
            .with_ignore_imports(patterns(&self.ignore_imports))
            .with_ignore_files(patterns(&self.ignore_files))
    }

    pub fn run(&self, rule: &dyn ImportRule, file: &str, specifier: &str) -> Verdict {
        let settings = self.settings();
        rule.evaluate(&ImportContext::new(file, specifier, &settings))
    }
}

pub fn patterns(list: &[&str]) -> PatternSet {
    PatternSet::new(list).unwrap_or_else(|e| panic!("bad test pattern: {e}"))
}

/// Asserts the statement produces no violation (allowed or skipped).
#[track_caller]
pub fn assert_valid(verdict: &Verdict, name: &str) {
    assert!(
        verdict.violations().is_empty(),
        "{name}: expected no violations, got {verdict:?}"
    );
}

/// Asserts the statement produces exactly the given kinds, in order.
#[track_caller]
pub fn assert_kinds(verdict: &Verdict, expected: &[&str], name: &str) {
    assert_eq!(verdict.message_ids(), expected, "{name}");
}
