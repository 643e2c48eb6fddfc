//! Check command implementation.

use anyhow::{Context, Result};
use fsd_lint_core::{Engine, PatternSet, SourceFile};
use fsd_lint_rules::{all_rules, rules_from_config, Preset};
use fsd_lint_ts::{ImportExtractor, TypeScriptExtractor};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Returns `true` when a violation reaches the configured `fail_on` severity.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: &[String],
    source: &ConfigSource,
) -> Result<bool> {
    let config = source.load()?;
    let fail_on = config.fail_on_severity();

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };
    let excludes = config
        .analyzer
        .exclude
        .iter()
        .chain(exclude)
        .collect::<Vec<_>>();
    let excludes = PatternSet::new(excludes).context("Invalid exclude pattern")?;
    let extensions = config.analyzer.extensions.clone();
    let respect_gitignore = config.analyzer.respect_gitignore;

    // An explicit filter may name rules outside the configured preset.
    let rules = match rules_filter {
        Some(_) => Preset::Recommended.configured_rules(&config),
        None => rules_from_config(&config),
    }
    .context("Invalid rule configuration")?;

    let mut builder = Engine::builder().root(path).config(config).rules(rules);
    if let Some(filter) = rules_filter {
        builder = builder.only(selected_rules(filter));
    }
    let engine = builder.build().context("Failed to build engine")?;

    let paths = discover_files(&root, &extensions, &excludes, respect_gitignore)?;
    tracing::info!(
        "Analyzing {} files under {} with {} rules",
        paths.len(),
        root.display(),
        engine.rule_count()
    );

    let files = load_sources(&paths)?;
    let result = engine.check_files(&files);

    super::output::print(&result, format, path)?;

    Ok(result.has_violations_at(fail_on))
}

/// Maps a comma-separated list of rule names or codes to rule names.
fn selected_rules(filter: &str) -> Vec<String> {
    let known = all_rules();
    filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|requested| {
            known
                .iter()
                .find(|rule| rule.code().eq_ignore_ascii_case(requested))
                .map_or_else(|| requested.to_string(), |rule| rule.name().to_string())
        })
        .collect()
}

/// Walks `root` for source files with one of `extensions`, skipping paths
/// (relative to `root`) that match `excludes`.
fn discover_files(
    root: &Path,
    extensions: &[String],
    excludes: &PatternSet,
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .require_git(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("Failed to walk source tree")?;
        let path = entry.path();

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext));
        if !supported {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        if excludes.matches(&relative) {
            tracing::debug!("Excluding: {relative}");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Reads and parses every file. Files the parser rejects are skipped with a
/// warning.
fn load_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let extractor = TypeScriptExtractor::new();
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match extractor.source_file(path, content) {
            Ok(file) => files.push(file),
            Err(e) => tracing::warn!("Skipping {}: {e}", path.display()),
        }
    }

    Ok(files)
}
