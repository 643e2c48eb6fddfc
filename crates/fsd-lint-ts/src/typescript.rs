//! TypeScript and JavaScript import extractor using Tree-sitter.

use fsd_lint_core::ImportStatement;
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

use crate::extractor::{ExtractError, ImportExtractor};

/// Grammar variant used for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain TypeScript (`.ts`, `.mts`, `.cts`).
    TypeScript,
    /// TypeScript with JSX, also used for JavaScript files.
    Tsx,
}

impl Dialect {
    /// Picks the grammar from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" | "js" | "jsx" | "mjs" | "cjs" => Some(Self::Tsx),
            _ => None,
        }
    }
}

/// Extracts module specifiers from TypeScript, TSX and JavaScript source.
///
/// Recognized forms:
///
/// - `import x from 'm'`, `import type { T } from 'm'`, `import 'm'`
/// - `export { x } from 'm'`, `export * from 'm'`
/// - `import x = require('m')`
/// - `import('m')` and `require('m')` with a string literal argument
pub struct TypeScriptExtractor {
    typescript: Language,
    tsx: Language,
}

impl TypeScriptExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn language(&self, dialect: Dialect) -> &Language {
        match dialect {
            Dialect::TypeScript => &self.typescript,
            Dialect::Tsx => &self.tsx,
        }
    }

    /// Contents of a string literal without its quotes. Template strings
    /// only count when they contain no substitution.
    fn literal<'a>(node: &Node<'_>, src: &'a [u8]) -> Option<&'a str> {
        match node.kind() {
            "string" => {}
            "template_string" => {
                let mut cursor = node.walk();
                if node
                    .named_children(&mut cursor)
                    .any(|child| child.kind() == "template_substitution")
                {
                    return None;
                }
            }
            _ => return None,
        }
        let text = node.utf8_text(src).ok()?;
        text.get(1..text.len().checked_sub(1)?)
    }

    fn statement(anchor: &Node<'_>, literal: &Node<'_>, src: &[u8]) -> Option<ImportStatement> {
        let specifier = Self::literal(literal, src)?;
        let position = anchor.start_position();
        Some(
            ImportStatement::new(specifier, position.row + 1, position.column + 1).with_span(
                literal.start_byte(),
                literal.end_byte() - literal.start_byte(),
            ),
        )
    }

    fn from_import(node: &Node<'_>, src: &[u8]) -> Option<ImportStatement> {
        if let Some(source) = node.child_by_field_name("source") {
            return Self::statement(node, &source, src);
        }
        // import x = require('m')
        let mut cursor = node.walk();
        let clause = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "import_require_clause")?;
        let source = clause.child_by_field_name("source")?;
        Self::statement(node, &source, src)
    }

    fn from_call(node: &Node<'_>, src: &[u8]) -> Option<ImportStatement> {
        let callee = node.child_by_field_name("function")?;
        let is_loader = match callee.kind() {
            "import" => true,
            "identifier" => callee.utf8_text(src).ok() == Some("require"),
            _ => false,
        };
        if !is_loader {
            return None;
        }

        let arguments = node.child_by_field_name("arguments")?;
        let mut cursor = arguments.walk();
        let first = arguments
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment")?;
        Self::statement(node, &first, src)
    }

    fn collect(root: &Node<'_>, src: &[u8]) -> Vec<ImportStatement> {
        let mut imports = Vec::new();
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();
            let found = match node.kind() {
                "import_statement" => Self::from_import(&node, src),
                "export_statement" => node
                    .child_by_field_name("source")
                    .and_then(|source| Self::statement(&node, &source, src)),
                "call_expression" => Self::from_call(&node, src),
                _ => None,
            };
            imports.extend(found);

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return imports;
                }
            }
        }
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for TypeScriptExtractor {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ts", "tsx", "js", "jsx", "mts", "cts", "mjs", "cjs"]
    }

    fn extract(&self, path: &Path, source: &str) -> Result<Vec<ImportStatement>, ExtractError> {
        let display = || path.display().to_string();
        let dialect =
            Dialect::from_path(path).ok_or_else(|| ExtractError::UnsupportedExtension {
                path: display(),
            })?;

        let mut parser = Parser::new();
        parser.set_language(self.language(dialect))?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ExtractError::Parse { path: display() })?;
        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!(path = %path.display(), "syntax errors, extracting what parsed");
        }

        let imports = Self::collect(&root, src);
        tracing::debug!(path = %path.display(), count = imports.len(), "extracted imports");
        Ok(imports)
    }
}
