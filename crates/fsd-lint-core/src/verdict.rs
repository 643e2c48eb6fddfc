//! Per-statement outcome of a boundary policy.

use std::collections::BTreeMap;
use std::fmt;

/// Why a policy did not apply to a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The importing file has no `src` segment in its path.
    NoSourceRoot,
    /// One side of the import does not resolve to a known layer.
    UnknownLayer,
    /// A slice needed for the decision is missing.
    MissingSlice,
    /// The statement matched an ignore pattern.
    Ignored,
    /// The policy does not govern relative imports.
    RelativeImport,
    /// The target layer is exempt from this policy.
    ExemptLayer,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoSourceRoot => "file is outside the source root",
            Self::UnknownLayer => "layer could not be identified",
            Self::MissingSlice => "slice could not be identified",
            Self::Ignored => "matched an ignore pattern",
            Self::RelativeImport => "relative import",
            Self::ExemptLayer => "target layer is exempt",
        };
        f.write_str(text)
    }
}

/// A single architectural rule breach found on one import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportViolation {
    /// The importing layer may not depend on the imported layer.
    IncorrectLayerImport {
        /// Layer being imported from.
        import_layer: String,
        /// Layer of the importing file.
        file_layer: String,
    },
    /// An entity imports another entity without going through its `@x` folder.
    IncorrectEntityImports {
        /// Display name of the entities layer.
        layer: String,
        /// Slice being imported from.
        from_entity: String,
        /// Slice of the importing file.
        to_entity: String,
    },
    /// The import reaches past a slice's public API.
    NotPublicApiImport,
    /// The testing public API is imported from a non-test file.
    NotTestingPublicApiImport,
    /// An absolute import targets the importing file's own slice.
    ShouldBeRelativePath,
    /// A relative import leaves the importing file's slice or layer.
    CrossSliceRelativeImport,
}

impl ImportViolation {
    /// Kind tag used for reporting.
    #[must_use]
    pub fn message_id(&self) -> &'static str {
        match self {
            Self::IncorrectLayerImport { .. } => "incorrectLayerImport",
            Self::IncorrectEntityImports { .. } => "incorrectEntityImports",
            Self::NotPublicApiImport => "notPublicApiImport",
            Self::NotTestingPublicApiImport => "notTestingPublicApiImport",
            Self::ShouldBeRelativePath => "shouldBeRelativePath",
            Self::CrossSliceRelativeImport => "crossSliceRelativeImport",
        }
    }

    /// Values available for message interpolation.
    #[must_use]
    pub fn data(&self) -> BTreeMap<String, String> {
        let pairs: Vec<(&str, &String)> = match self {
            Self::IncorrectLayerImport {
                import_layer,
                file_layer,
            } => vec![("importLayer", import_layer), ("fileLayer", file_layer)],
            Self::IncorrectEntityImports {
                from_entity,
                to_entity,
                ..
            } => vec![("fromEntity", from_entity), ("toEntity", to_entity)],
            _ => Vec::new(),
        };
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Short hint on how to fix the import.
    #[must_use]
    pub fn help(&self) -> Option<String> {
        match self {
            Self::IncorrectLayerImport { .. } => {
                Some("move the shared code down to a layer both sides may import".to_string())
            }
            Self::IncorrectEntityImports {
                layer,
                from_entity,
                to_entity,
            } => Some(format!(
                "expose what '{to_entity}' needs in '{layer}/{from_entity}/@x/{to_entity}' and import from there"
            )),
            Self::NotPublicApiImport => {
                Some("import from the slice root (its index file)".to_string())
            }
            Self::NotTestingPublicApiImport => {
                Some("add this file to `test_file_patterns` or import the public API".to_string())
            }
            Self::ShouldBeRelativePath => Some("use a relative import inside a slice".to_string()),
            Self::CrossSliceRelativeImport => None,
        }
    }
}

impl fmt::Display for ImportViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncorrectLayerImport {
                import_layer,
                file_layer,
            } => write!(f, "Import from {import_layer} is not allowed in {file_layer}"),
            Self::IncorrectEntityImports {
                layer,
                from_entity,
                to_entity,
            } => write!(
                f,
                "Imports between entities should be via @x folder. Valid: '{layer}/{from_entity}/@x/{to_entity}'"
            ),
            Self::NotPublicApiImport => f.write_str("Import should be from public api"),
            Self::NotTestingPublicApiImport => f.write_str(
                "Import should be from public api for testing (public-api/testing.{js,ts})",
            ),
            Self::ShouldBeRelativePath => f.write_str("Path should be relative!"),
            Self::CrossSliceRelativeImport => f.write_str(
                "Relative import should not cross layer or slice boundaries. Use absolute import instead.",
            ),
        }
    }
}

/// Outcome of one policy on one import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The policy does not apply.
    Skipped(SkipReason),
    /// The policy applies and the import is legal.
    Allowed,
    /// The policy applies and the import breaks it.
    Rejected(Vec<ImportViolation>),
}

impl Verdict {
    /// `Allowed` when `violations` is empty, otherwise `Rejected`.
    #[must_use]
    pub fn from_violations(violations: Vec<ImportViolation>) -> Self {
        if violations.is_empty() {
            Self::Allowed
        } else {
            Self::Rejected(violations)
        }
    }

    /// Violations carried by this verdict (empty unless rejected).
    #[must_use]
    pub fn violations(&self) -> &[ImportViolation] {
        match self {
            Self::Rejected(v) => v,
            Self::Skipped(_) | Self::Allowed => &[],
        }
    }

    /// Kind tags of the carried violations, in order.
    #[must_use]
    pub fn message_ids(&self) -> Vec<&'static str> {
        self.violations()
            .iter()
            .map(ImportViolation::message_id)
            .collect()
    }

    /// Returns true if the verdict is `Skipped`.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}
