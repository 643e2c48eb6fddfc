//! Rule engine: runs every enabled rule on every import statement.

use crate::allowance::check_allow_with_reason;
use crate::config::{Config, ConfigError};
use crate::context::{offset_for, ImportContext, ImportStatement, SourceFile};
use crate::rule::{ImportRule, RuleBox};
use crate::settings::Settings;
use crate::types::{LintResult, Location, Severity, Suggestion, Violation};
use crate::verdict::{ImportViolation, Verdict};

use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Rule code reported when a rule fails internally on a statement.
pub const INTERNAL_ERROR_CODE: &str = "FSD000";

/// Rule name reported when a rule fails internally on a statement.
pub const INTERNAL_ERROR_RULE: &str = "internal-error";

/// Errors that can occur while setting up the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A rule filter names a rule that is not registered.
    #[error("Unknown rule '{name}' (available: {available})")]
    UnknownRule {
        /// The requested name.
        name: String,
        /// Comma-separated registered names.
        available: String,
    },
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    only: Option<BTreeSet<String>>,
    settings: Option<Settings>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root; reported paths are made relative to it.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: ImportRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the engine.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Keeps only the named rules.
    #[must_use]
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the settings explicitly, overriding those from the configuration.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets the configuration (enabled rules, severities, settings).
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or a rule filter names an
    /// unregistered rule.
    pub fn build(self) -> Result<Engine, EngineError> {
        let config = self.config.unwrap_or_default();
        let settings = match self.settings {
            Some(settings) => settings,
            None => Settings::from_config(&config.settings)?,
        };

        if let Some(only) = &self.only {
            for name in only {
                if !self.rules.iter().any(|r| r.name() == name) {
                    return Err(EngineError::UnknownRule {
                        name: name.clone(),
                        available: self
                            .rules
                            .iter()
                            .map(|r| r.name())
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
            }
        }

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let selected = self.only.as_ref().map_or(true, |only| only.contains(rule.name()));
                let enabled = config.is_rule_enabled(rule.name());
                if !selected || !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                selected && enabled
            })
            .collect();

        Ok(Engine {
            root: self.root,
            rules,
            settings,
            config,
        })
    }
}

/// Runs import rules over source files.
///
/// Use [`Engine::builder()`] to construct an instance.
pub struct Engine {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    settings: Settings,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the active rules, in registration order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The settings every rule sees.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Evaluates every active rule on one `(file, specifier)` pair.
    ///
    /// A rule that panics yields `Err` with the panic message.
    #[must_use]
    pub fn evaluate(
        &self,
        file_path: &str,
        specifier: &str,
    ) -> Vec<(&'static str, Result<Verdict, String>)> {
        let ctx = ImportContext::new(file_path, specifier, &self.settings);
        self.rules
            .iter()
            .map(|rule| {
                let outcome = evaluate_isolated(rule.as_ref(), &ctx);
                if let Err(message) = &outcome {
                    warn!("{} failed on '{specifier}' in {file_path}: {message}", rule.name());
                }
                (rule.name(), outcome)
            })
            .collect()
    }

    /// Checks every import of one file.
    #[must_use]
    pub fn check_file(&self, file: &SourceFile) -> Vec<Violation> {
        debug!("Checking: {}", file.path.display());

        let file_path = file.path.to_string_lossy();
        let report_path = self
            .root
            .as_deref()
            .map_or_else(|| file.path.clone(), |root| file.relative_to(root));

        let mut violations = Vec::new();
        for statement in &file.imports {
            let ctx = ImportContext::new(&file_path, &statement.specifier, &self.settings);
            let location = statement_location(&report_path, &file.content, statement);

            for rule in &self.rules {
                match evaluate_isolated(rule.as_ref(), &ctx) {
                    Ok(Verdict::Skipped(reason)) => {
                        debug!("{}: '{}' skipped ({reason})", rule.name(), statement.specifier);
                    }
                    Ok(Verdict::Allowed) => {}
                    Ok(Verdict::Rejected(found)) => {
                        let allow =
                            check_allow_with_reason(&file.content, statement.line, rule.name());
                        if allow.is_allowed() {
                            debug!(
                                "{}: '{}' allowed by directive (reason: {})",
                                rule.name(),
                                statement.specifier,
                                allow.reason().unwrap_or("none")
                            );
                            continue;
                        }
                        violations.extend(
                            found
                                .iter()
                                .map(|v| self.to_violation(rule.as_ref(), v, location.clone())),
                        );
                    }
                    Err(message) => {
                        warn!(
                            "{} failed on '{}' in {}: {message}",
                            rule.name(),
                            statement.specifier,
                            file.path.display()
                        );
                        violations.push(Violation::new(
                            INTERNAL_ERROR_CODE,
                            INTERNAL_ERROR_RULE,
                            Severity::Info,
                            location.clone(),
                            format!(
                                "{} could not check '{}': {message}",
                                rule.name(),
                                statement.specifier
                            ),
                        ));
                    }
                }
            }
        }

        violations
    }

    /// Checks many files and aggregates the results, sorted by location.
    #[must_use]
    pub fn check_files<'f, I>(&self, files: I) -> LintResult
    where
        I: IntoIterator<Item = &'f SourceFile>,
    {
        let mut result = LintResult::new();
        for file in files {
            result.violations.extend(self.check_file(file));
            result.files_checked += 1;
        }
        result.sort();

        info!(
            "Check complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        result
    }

    fn to_violation(
        &self,
        rule: &dyn ImportRule,
        found: &ImportViolation,
        location: Location,
    ) -> Violation {
        let severity = self
            .config
            .rule_severity(rule.name())
            .unwrap_or_else(|| rule.default_severity());

        let mut violation = Violation::new(rule.code(), rule.name(), severity, location, found.to_string())
            .with_message_id(found.message_id(), found.data());
        if let Some(help) = found.help() {
            violation = violation.with_suggestion(Suggestion::new(help));
        }
        if let Some(doc_ref) = rule.doc_ref() {
            violation = violation.with_doc_ref(doc_ref);
        }
        violation
    }
}

fn statement_location(path: &Path, content: &str, statement: &ImportStatement) -> Location {
    let (offset, length) = if statement.length == 0 {
        (
            offset_for(content, statement.line, statement.column),
            statement.specifier.len(),
        )
    } else {
        (statement.offset, statement.length)
    };
    Location::new(path.to_path_buf(), statement.line, statement.column).with_span(offset, length)
}

/// Runs one rule on one statement, turning a panic into an error message so
/// the remaining statements still get checked.
fn evaluate_isolated(rule: &dyn ImportRule, ctx: &ImportContext<'_>) -> Result<Verdict, String> {
    panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(ctx))).map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "rule panicked".to_string())
    })
}
