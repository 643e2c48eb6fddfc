//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# fsd-lint configuration
# Layers: app > pages > widgets > features > entities > shared

# Preset: "recommended" (all rules) or "minimal" (layer-imports only)
# preset = "recommended"

# Lowest severity that makes `fsd-lint check` exit with status 1
# fail_on = "error"

[analyzer]
# Root directory to analyze, relative to the checked path
# root = "."

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

extensions = ["ts", "tsx", "js", "jsx"]

# Respect .gitignore files
respect_gitignore = true

[settings]
# Import alias prefix, e.g. "@" for `@/entities/user`
alias = "@"

# Imports and files (relative to src) every rule skips
# ignore_imports = ["**/StoreProvider"]
# ignore_files = ["**/*.stories.tsx"]

# Custom layer folder names
# [settings.layers]
# entities = "domain"
# shared = "shared-layer"

[rules.layer-imports]
enabled = true
# ignore_imports_pattern = []
# ignore_files_pattern = []

[rules.public-api-imports]
enabled = true
# severity = "warning"
test_file_patterns = ["**/*.test.*", "**/*.spec.*", "**/*.stories.*"]

[rules.relative-imports]
enabled = true
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("fsd-lint.toml"), force)?;

    println!("Created fsd-lint.toml");
    println!("\nNext steps:");
    println!("  1. Set [settings] alias and layer names for your project");
    println!("  2. Run: fsd-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}
