//! List rules command implementation.

use fsd_lint_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<22} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<10} {:<22} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!(
        "  recommended  - {} (default)",
        Preset::Recommended.rule_names().join(", ")
    );
    println!(
        "  minimal      - {} (for gradual adoption)",
        Preset::Minimal.rule_names().join(", ")
    );

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  fsd-lint check --rules layer-imports,public-api-imports");
    println!("  fsd-lint check --rules FSD001,FSD003");
}
