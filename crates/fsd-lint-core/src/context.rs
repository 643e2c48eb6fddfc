//! Context types for rule execution.

use crate::paths::{is_relative, normalize_file_path, strip_alias};
use crate::pattern::PatternSet;
use crate::settings::Settings;
use std::path::{Path, PathBuf};

/// One import statement found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// The module specifier as written, without quotes.
    pub specifier: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset of the specifier literal.
    pub offset: usize,
    /// Length of the specifier literal in bytes.
    pub length: usize,
}

impl ImportStatement {
    /// Creates a statement at the given line and column with an empty span.
    #[must_use]
    pub fn new(specifier: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            specifier: specifier.into(),
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte span of the specifier literal.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A source file with its extracted imports.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path of the file, used for layer resolution and reporting.
    pub path: PathBuf,
    /// File contents, used for allow directives.
    pub content: String,
    /// Imports in source order.
    pub imports: Vec<ImportStatement>,
}

impl SourceFile {
    /// Creates a source file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            imports: Vec::new(),
        }
    }

    /// Sets the imports.
    #[must_use]
    pub fn with_imports(mut self, imports: Vec<ImportStatement>) -> Self {
        self.imports = imports;
        self
    }

    /// Path relative to `root`, or the path unchanged if it is not below `root`.
    #[must_use]
    pub fn relative_to(&self, root: &Path) -> PathBuf {
        self.path
            .strip_prefix(root)
            .map_or_else(|_| self.path.clone(), Path::to_path_buf)
    }
}

/// Per-rule ignore lists, unioned with the global ones from [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct IgnoreOptions {
    /// Patterns matched against the alias-stripped import specifier.
    pub imports: PatternSet,
    /// Patterns matched against the `src`-relative file path.
    pub files: PatternSet,
}

impl IgnoreOptions {
    /// Creates ignore lists from compiled pattern sets.
    #[must_use]
    pub fn new(imports: PatternSet, files: PatternSet) -> Self {
        Self { imports, files }
    }
}

/// Context provided to an [`crate::ImportRule`] for one statement.
#[derive(Debug, Clone)]
pub struct ImportContext<'a> {
    /// Raw path of the importing file.
    pub file_path: &'a str,
    /// Raw import specifier.
    pub specifier: &'a str,
    /// Run-wide settings.
    pub settings: &'a Settings,
    source_path: Option<String>,
    full_path: Option<String>,
}

impl<'a> ImportContext<'a> {
    /// Creates a context and normalizes the file path once.
    #[must_use]
    pub fn new(file_path: &'a str, specifier: &'a str, settings: &'a Settings) -> Self {
        Self {
            file_path,
            specifier,
            settings,
            source_path: normalize_file_path(file_path, false),
            full_path: normalize_file_path(file_path, true),
        }
    }

    /// The specifier with the configured alias removed.
    #[must_use]
    pub fn import_path(&self) -> &'a str {
        strip_alias(self.specifier, self.settings.alias())
    }

    /// Returns true if the alias-stripped specifier is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        is_relative(self.import_path())
    }

    /// File path after the `src` anchor, or `None` when there is no anchor.
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Whole file path in forward-slash form.
    #[must_use]
    pub fn full_path(&self) -> Option<&str> {
        self.full_path.as_deref()
    }

    /// Returns true if the statement matches a global or per-rule ignore pattern.
    #[must_use]
    pub fn is_ignored(&self, local: &IgnoreOptions) -> bool {
        let import = self.import_path();
        if self.settings.ignore_imports().matches(import) || local.imports.matches(import) {
            return true;
        }
        self.source_path().is_some_and(|file| {
            self.settings.ignore_files().matches(file) || local.files.matches(file)
        })
    }
}

/// Byte offset for a 1-indexed line and column, or the content length if out of bounds.
#[must_use]
pub fn offset_for(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_content) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1);
        }
        offset += line_content.len();
    }

    offset
}
