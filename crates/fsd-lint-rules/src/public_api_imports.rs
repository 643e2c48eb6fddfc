//! Rule requiring imports to go through a slice's public API.
//!
//! # Rationale
//!
//! Each slice exposes a public API (its index file). Reaching into
//! `entities/user/model/selectors` couples the importer to internals that the
//! slice is free to reorganize.
//!
//! A slice may additionally expose `<layer>/<slice>/testing` for test
//! helpers; only files matching `test_file_patterns` may import it.
//!
//! # Configuration
//!
//! - `test_file_patterns`: files allowed to import the testing API (matched
//!   against the whole file path)
//! - `ignore_imports_pattern`, `ignore_files_pattern`: statements to skip
//!
//! # Suppression
//!
//! - `// fsd-lint: allow(public-api-imports)` comment

use fsd_lint_core::paths::{CROSS_ENTITIES_FOLDER, TESTING_SEGMENT};
use fsd_lint_core::{
    IgnoreOptions, ImportContext, ImportRule, ImportViolation, LayerRole, ModulePath,
    PatternError, PatternSet, RuleConfig, SkipReason, Verdict,
};

/// Rule code for public-api-imports.
pub const CODE: &str = "FSD002";

/// Rule name for public-api-imports.
pub const NAME: &str = "public-api-imports";

/// Deepest import that still addresses a slice root (`<layer>/<slice>`).
const PUBLIC_API_DEPTH: usize = 2;

/// Exact depth of an `entities/<target>/@x/<consumer>` import.
const CROSS_ENTITY_DEPTH: usize = 4;

/// Forbids imports that bypass a slice's public API.
#[derive(Debug, Clone, Default)]
pub struct PublicApiImports {
    test_files: PatternSet,
    ignore: IgnoreOptions,
}

impl PublicApiImports {
    /// Creates a new rule with no test file patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from its configuration block.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid.
    pub fn from_config(config: Option<&RuleConfig>) -> Result<Self, PatternError> {
        let test_files = match config {
            Some(config) => config.patterns("test_file_patterns")?,
            None => PatternSet::empty(),
        };
        Ok(Self {
            test_files,
            ignore: crate::ignore_options(config)?,
        })
    }

    /// Sets the files allowed to import a testing API.
    #[must_use]
    pub fn test_file_patterns(mut self, patterns: PatternSet) -> Self {
        self.test_files = patterns;
        self
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

    fn is_test_file(&self, ctx: &ImportContext<'_>) -> bool {
        ctx.full_path()
            .is_some_and(|path| self.test_files.matches(path))
    }
}

impl ImportRule for PublicApiImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires imports from other slices to use their public API"
    }

    fn doc_ref(&self) -> Option<&'static str> {
        Some("https://feature-sliced.design/docs/reference/public-api")
    }

    fn evaluate(&self, ctx: &ImportContext<'_>) -> Verdict {
        if ctx.is_relative() {
            return Verdict::Skipped(SkipReason::RelativeImport);
        }
        let Some(source_path) = ctx.source_path() else {
            return Verdict::Skipped(SkipReason::NoSourceRoot);
        };

        let registry = ctx.settings.registry();
        let import = ModulePath::parse(ctx.import_path());
        let Some(import_role) = import.layer().and_then(|layer| registry.role_of(layer)) else {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        };
        if import_role.is_flat() {
            return Verdict::Skipped(SkipReason::ExemptLayer);
        }
        let file = ModulePath::parse(source_path);
        let Some(file_role) = file.layer().and_then(|layer| registry.role_of(layer)) else {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        };
        if ctx.is_ignored(&self.ignore) {
            return Verdict::Skipped(SkipReason::Ignored);
        }

        let depth = import.depth();
        let third = import.segment(2);

        let is_cross_entity = import_role == LayerRole::Entities
            && file_role == LayerRole::Entities
            && third == Some(CROSS_ENTITIES_FOLDER)
            && depth == CROSS_ENTITY_DEPTH;
        let is_public = depth <= PUBLIC_API_DEPTH;
        let is_testing_api = third == Some(TESTING_SEGMENT) && depth < CROSS_ENTITY_DEPTH;

        let mut violations = Vec::new();
        if !is_public && !is_testing_api && !is_cross_entity {
            violations.push(ImportViolation::NotPublicApiImport);
        }
        if is_testing_api && !self.is_test_file(ctx) {
            violations.push(ImportViolation::NotTestingPublicApiImport);
        }

        Verdict::from_violations(violations)
    }
}
