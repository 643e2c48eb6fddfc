//! Rule enforcing relative imports inside a slice and absolute imports
//! across slices.
//!
//! # Rationale
//!
//! Inside one slice, relative imports keep the slice movable as a unit.
//! Across slices they hide the dependency: `../../article/model` reads like a
//! local file while it actually crosses a slice boundary.
//!
//! # Detected Patterns
//!
//! - `@/entities/user/model/UserType` imported from `entities/user/ui/UserForm`
//!   (should be relative)
//! - `../../article/model/Article` imported from `entities/user/ui/UserForm`
//!   (crosses into another slice)
//! - `../../entities/user/model/User` imported from `shared/ui/Button`
//!   (crosses into another layer)
//!
//! Relative imports never touch the filesystem: the destination is simulated
//! by replaying the specifier on the importing file's directory.
//!
//! # Configuration
//!
//! - `ignore_imports_pattern`: import specifiers to skip
//! - `ignore_files_pattern`: files (relative to `src`) to skip
//!
//! # Suppression
//!
//! - `// fsd-lint: allow(relative-imports)` comment

use fsd_lint_core::relative::resolve_relative;
use fsd_lint_core::{
    IgnoreOptions, ImportContext, ImportRule, ImportViolation, ModulePath, PatternError,
    PatternSet, RuleConfig, SkipReason, Verdict,
};

/// Rule code for relative-imports.
pub const CODE: &str = "FSD003";

/// Rule name for relative-imports.
pub const NAME: &str = "relative-imports";

/// Enforces relative imports within a slice and absolute imports across slices.
#[derive(Debug, Clone, Default)]
pub struct RelativeImports {
    ignore: IgnoreOptions,
}

impl RelativeImports {
    /// Creates a new rule with no local ignore patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from its configuration block.
    ///
    /// # Errors
    ///
    /// Returns an error if an ignore pattern is invalid.
    pub fn from_config(config: Option<&RuleConfig>) -> Result<Self, PatternError> {
        Ok(Self {
            ignore: crate::ignore_options(config)?,
        })
    }

    /// Sets the import specifiers to skip.
    #[must_use]
    pub fn ignore_imports(mut self, patterns: PatternSet) -> Self {
        self.ignore.imports = patterns;
        self
    }

    /// Sets the files to skip.
    #[must_use]
    pub fn ignore_files(mut self, patterns: PatternSet) -> Self {
        self.ignore.files = patterns;
        self
    }

    fn check_relative(ctx: &ImportContext<'_>, source_path: &str) -> Verdict {
        let registry = ctx.settings.registry();
        let destination = resolve_relative(source_path, ctx.import_path(), registry);

        let origin = ModulePath::parse(source_path);
        let target = ModulePath::parse(&destination);

        let (Some(origin_layer), Some(target_layer)) = (origin.layer(), target.layer()) else {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        };
        let Some(origin_role) = registry.role_of(origin_layer) else {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        };
        if !registry.is_known(target_layer) {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        }

        let crosses = if origin_layer != target_layer {
            true
        } else {
            !origin_role.is_flat() && origin.slice() != target.slice()
        };

        if crosses {
            Verdict::Rejected(vec![ImportViolation::CrossSliceRelativeImport])
        } else {
            Verdict::Allowed
        }
    }

    fn check_absolute(ctx: &ImportContext<'_>, source_path: &str) -> Verdict {
        let registry = ctx.settings.registry();
        let import = ModulePath::parse(ctx.import_path()).identity();
        let file = ModulePath::parse(source_path).identity();

        let (Some(import_layer), Some(file_layer)) = (import.layer, file.layer) else {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        };
        if !registry.is_known(import_layer) || !registry.is_known(file_layer) {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        }
        if import.slice.is_none() || file.slice.is_none() {
            return Verdict::Skipped(SkipReason::MissingSlice);
        }

        if import == file {
            Verdict::Rejected(vec![ImportViolation::ShouldBeRelativePath])
        } else {
            Verdict::Allowed
        }
    }
}

impl ImportRule for RelativeImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires relative imports inside a slice and absolute imports across slices"
    }

    fn doc_ref(&self) -> Option<&'static str> {
        Some("https://feature-sliced.design/docs/reference/slices-segments")
    }

    fn evaluate(&self, ctx: &ImportContext<'_>) -> Verdict {
        let Some(source_path) = ctx.source_path().filter(|p| !p.is_empty()) else {
            return Verdict::Skipped(SkipReason::NoSourceRoot);
        };
        if ctx.import_path().is_empty() {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        }
        if ctx.is_ignored(&self.ignore) {
            return Verdict::Skipped(SkipReason::Ignored);
        }

        if ctx.is_relative() {
            Self::check_relative(ctx, source_path)
        } else {
            Self::check_absolute(ctx, source_path)
        }
    }
}
