//! Language-agnostic extraction trait and errors.
//!
//! `ImportExtractor` is the extension point for adding new source languages.
//! Implement it to teach fsd-lint how to find module specifiers in a file.

use fsd_lint_core::{ImportStatement, SourceFile};
use std::path::Path;
use thiserror::Error;

/// Errors raised while extracting imports from a source file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser gave up on the file.
    #[error("failed to parse {path}")]
    Parse {
        /// Path of the file.
        path: String,
    },

    /// No grammar handles the file's extension.
    #[error("unsupported file extension: {path}")]
    UnsupportedExtension {
        /// Path of the file.
        path: String,
    },
}

/// Trait for language-specific import extraction.
///
/// The extractor receives raw source text and returns every statically
/// visible module specifier in source order.
pub trait ImportExtractor: Send + Sync {
    /// Language identifier (e.g., `"typescript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts import statements from `source`.
    ///
    /// `path` selects the grammar variant and is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed.
    fn extract(&self, path: &Path, source: &str) -> Result<Vec<ImportStatement>, ExtractError>;

    /// Returns true if `path` has one of [`Self::extensions`].
    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }

    /// Builds a [`SourceFile`] carrying `source` and its extracted imports.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed.
    fn source_file(&self, path: &Path, source: String) -> Result<SourceFile, ExtractError> {
        let imports = self.extract(path, &source)?;
        Ok(SourceFile::new(path, source).with_imports(imports))
    }
}
