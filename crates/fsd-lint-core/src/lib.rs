//! # fsd-lint-core
//!
//! Core framework for checking import boundaries in projects laid out with
//! Feature-Sliced Design.
//!
//! This crate provides the building blocks shared by every rule:
//!
//! - [`LayerRegistry`] and [`ImportRuleTable`] for layer names and the
//!   allowed-import table, both derived from a [`LayerConfig`]
//! - [`paths`] and [`relative`] for turning file paths and import specifiers
//!   into layer/slice identities without touching the filesystem
//! - [`ImportRule`] trait returning an explicit [`Verdict`] per statement
//! - [`Engine`] for running rules over extracted imports
//!
//! ## Example
//!
//! ```ignore
//! use fsd_lint_core::{Engine, ImportStatement, SourceFile};
//!
//! let engine = Engine::builder()
//!     .root(".")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let file = SourceFile::new("src/pages/home/ui/Page.tsx", content)
//!     .with_imports(vec![ImportStatement::new("@/app/store", 1, 19)]);
//! let violations = engine.check_file(&file);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allowance;
mod config;
mod context;
mod engine;
mod layer;
mod rule;
mod settings;
mod types;
mod verdict;

pub mod paths;
pub mod pattern;
pub mod relative;

pub use allowance::{check_allow_with_reason, AllowCheck, AllowDirective};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig, SettingsConfig};
pub use context::{offset_for, IgnoreOptions, ImportContext, ImportStatement, SourceFile};
pub use engine::{Engine, EngineBuilder, EngineError, INTERNAL_ERROR_CODE, INTERNAL_ERROR_RULE};
pub use layer::{ImportRuleTable, LayerConfig, LayerRegistry, LayerRole, UnknownLayerRole};
pub use paths::{Identity, ModulePath};
pub use pattern::{GlobPattern, PatternError, PatternSet};
pub use rule::{ImportRule, RuleBox};
pub use settings::Settings;
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use verdict::{ImportViolation, SkipReason, Verdict};
