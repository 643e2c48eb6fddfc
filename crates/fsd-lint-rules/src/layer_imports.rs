//! Rule enforcing the import direction between layers.
//!
//! # Rationale
//!
//! Feature-Sliced Design orders layers from `app` (highest) to `shared`
//! (lowest). A module may only depend on layers below it, so that changes in
//! low-level code never require knowledge of the features built on top.
//!
//! # Detected Patterns
//!
//! - `shared/ui/Button` importing `@/features/getCard`
//! - `features/getCard/ui/Button` importing `@/widgets/footer`
//! - `entities/user/ui/UserForm` importing `@/entities/message` (entity to
//!   entity imports must go through `entities/message/@x/user`)
//!
//! # Configuration
//!
//! - `ignore_imports_pattern`: import specifiers to skip
//! - `ignore_files_pattern`: files (relative to `src`) to skip
//!
//! # Suppression
//!
//! - `// fsd-lint: allow(layer-imports)` comment

use fsd_lint_core::{
    IgnoreOptions, ImportContext, ImportRule, ImportViolation, LayerRole, ModulePath,
    PatternError, PatternSet, RuleConfig, SkipReason, Verdict,
};

/// Rule code for layer-imports.
pub const CODE: &str = "FSD001";

/// Rule name for layer-imports.
pub const NAME: &str = "layer-imports";

const SLICE_PLACEHOLDER: &str = "<slice>";

/// Forbids imports from a higher layer and direct entity-to-entity imports.
#[derive(Debug, Clone, Default)]
pub struct LayerImports {
    ignore: IgnoreOptions,
}

impl LayerImports {
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
}

impl ImportRule for LayerImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces the import direction between architectural layers"
    }

    fn doc_ref(&self) -> Option<&'static str> {
        Some("https://feature-sliced.design/docs/reference/layers")
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
        let file = ModulePath::parse(source_path);

        let (Some(import_layer), Some(file_layer)) = (import.layer(), file.layer()) else {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        };
        if !registry.is_known(import_layer) || !registry.is_known(file_layer) {
            return Verdict::Skipped(SkipReason::UnknownLayer);
        }
        if ctx.is_ignored(&self.ignore) {
            return Verdict::Skipped(SkipReason::Ignored);
        }

        let mut violations = Vec::new();

        let between_entities = registry.is_role(import_layer, LayerRole::Entities)
            && registry.is_role(file_layer, LayerRole::Entities);
        if between_entities && !import.is_cross_entity_import_for(file.slice()) {
            violations.push(ImportViolation::IncorrectEntityImports {
                layer: import_layer.to_string(),
                from_entity: import.slice().unwrap_or(SLICE_PLACEHOLDER).to_string(),
                to_entity: file.slice().unwrap_or(SLICE_PLACEHOLDER).to_string(),
            });
        }

        if !ctx.settings.rule_table().allows(file_layer, import_layer) {
            violations.push(ImportViolation::IncorrectLayerImport {
                import_layer: import_layer.to_string(),
                file_layer: file_layer.to_string(),
            });
        }

        Verdict::from_violations(violations)
    }
}
