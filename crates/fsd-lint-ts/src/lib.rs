//! # fsd-lint-ts
//!
//! Tree-sitter based import extraction for fsd-lint.
//!
//! This crate turns TypeScript, TSX and JavaScript sources into the
//! language-agnostic [`fsd_lint_core::ImportStatement`] list the engine
//! evaluates:
//!
//! - [`ImportExtractor`] trait for pluggable language support
//! - [`TypeScriptExtractor`] for `.ts/.tsx/.js/.jsx/.mts/.cts/.mjs/.cjs`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod typescript;

pub use extractor::{ExtractError, ImportExtractor};
pub use typescript::{Dialect, TypeScriptExtractor};
