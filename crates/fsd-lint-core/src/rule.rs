//! Rule trait for defining import boundary rules.

use crate::context::ImportContext;
use crate::types::Severity;
use crate::verdict::Verdict;

/// A per-import-statement lint rule.
///
/// Rules are pure: the verdict depends only on the context, never on earlier
/// statements or files.
///
/// # Example
///
/// ```ignore
/// use fsd_lint_core::{ImportContext, ImportRule, SkipReason, Verdict};
///
/// pub struct NoLodash;
///
/// impl ImportRule for NoLodash {
///     fn name(&self) -> &'static str { "no-lodash" }
///     fn code(&self) -> &'static str { "FSD100" }
///
///     fn evaluate(&self, ctx: &ImportContext<'_>) -> Verdict {
///         if ctx.import_path() == "lodash" {
///             Verdict::Rejected(vec![/* ... */])
///         } else {
///             Verdict::Skipped(SkipReason::UnknownLayer)
///         }
///     }
/// }
/// ```
pub trait ImportRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "layer-imports").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FSD001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Link to documentation explaining the rule.
    fn doc_ref(&self) -> Option<&'static str> {
        None
    }

    /// Judges one import statement.
    fn evaluate(&self, ctx: &ImportContext<'_>) -> Verdict;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn ImportRule>;
