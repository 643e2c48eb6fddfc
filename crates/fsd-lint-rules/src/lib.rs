//! # fsd-lint-rules
//!
//! Built-in import boundary rules for fsd-lint.
//!
//! Every rule judges one import statement at a time and returns an explicit
//! [`Verdict`]; rules never depend on each other.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FSD001 | `layer-imports` | Higher layers import lower layers, entities talk through `@x` |
//! | FSD002 | `public-api-imports` | Imports from other slices go through their public API |
//! | FSD003 | `relative-imports` | Relative inside a slice, absolute across slices |
//!
//! ## Usage
//!
//! ```ignore
//! use fsd_lint_core::Engine;
//! use fsd_lint_rules::{LayerImports, PublicApiImports};
//!
//! let engine = Engine::builder()
//!     .root(".")
//!     .rule(LayerImports::new())
//!     .rule(PublicApiImports::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod layer_imports;
pub mod public_api_imports;
pub mod relative_imports;

mod presets;

pub use layer_imports::LayerImports;
pub use presets::{all_rules, minimal_rules, recommended_rules, rules_from_config, Preset};
pub use public_api_imports::PublicApiImports;
pub use relative_imports::RelativeImports;

/// Re-export core types for convenience.
pub use fsd_lint_core::{ImportRule, Severity, Verdict, Violation};

use fsd_lint_core::{IgnoreOptions, PatternError, RuleConfig};

/// Reads `ignore_imports_pattern` and `ignore_files_pattern` from a rule block.
pub(crate) fn ignore_options(config: Option<&RuleConfig>) -> Result<IgnoreOptions, PatternError> {
    let Some(config) = config else {
        return Ok(IgnoreOptions::default());
    };
    Ok(IgnoreOptions::new(
        config.patterns("ignore_imports_pattern")?,
        config.patterns("ignore_files_pattern")?,
    ))
}
