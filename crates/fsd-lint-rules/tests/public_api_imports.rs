//! Scenario tests for the `public-api-imports` rule.

mod common;

use common::{assert_kinds, assert_valid, patterns, Scenario};
use fsd_lint_core::{LayerRole, SkipReason, Verdict};
use fsd_lint_rules::PublicApiImports;

const FOOTER: &str = r"C:\project\src\widgets\footer";
const LOGIN: &str = r"C:\project\src\pages\login";

fn rule() -> PublicApiImports {
    PublicApiImports::new()
}

fn with_test_files(list: &[&str]) -> PublicApiImports {
    PublicApiImports::new().test_file_patterns(patterns(list))
}

#[test]
fn valid_public_api_imports() {
    let s = Scenario::new().alias();
    let cases = [
        (r"C:\project\src\entities\user\ui\Card", "../model/UserType"),
        (r"C:\project\src\features\addCard\ui\Card", "@/entities/user"),
        (r"C:\project\src\entities\user\model\Type", "@/entities/message/@x/user"),
        (r"C:\project\src\entities\user\model\Type", "@/shared/model/Id"),
        (r"C:\project\src\app\index.ts", "@/app/providers/Store"),
        ("<input>", "@/services/api"),
        (r"C:\project\src\entities\user\ui\Card", "react"),
    ];
    for (file, specifier) in cases {
        assert_valid(&s.run(&rule(), file, specifier), specifier);
    }
}

#[test]
fn relative_import_without_alias_is_skipped() {
    let verdict = Scenario::new().run(
        &rule(),
        r"C:\project\src\entities\user\ui\Card",
        "../model/UserType",
    );
    assert_eq!(verdict, Verdict::Skipped(SkipReason::RelativeImport));
}

#[test]
fn testing_api_allowed_for_matching_files() {
    let s = Scenario::new().alias();
    assert_valid(
        &s.run(
            &with_test_files(&["**/StoreDecorator.tsx"]),
            r"C:\project\src\entities\StoreDecorator.tsx",
            "@/entities/user/testing",
        ),
        "decorator",
    );
    assert_valid(
        &s.run(
            &with_test_files(&["**/*.test.ts"]),
            r"C:\project\src\entities\file.test.ts",
            "@/entities/user/testing",
        ),
        "test file",
    );
}

#[test]
fn testing_api_rejected_elsewhere() {
    let s = Scenario::new().alias();
    assert_kinds(
        &s.run(
            &with_test_files(&["**/*.test.ts"]),
            r"C:\project\src\entities\StoreDecorator.tsx",
            "@/entities/user/testing",
        ),
        &["notTestingPublicApiImport"],
        "wrong pattern",
    );
    assert_kinds(
        &s.run(&rule(), r"C:\project\src\entities\regular-file.tsx", "@/entities/user/testing"),
        &["notTestingPublicApiImport"],
        "no patterns",
    );
    assert_kinds(
        &s.run(
            &with_test_files(&["**/StoreDecorator.tsx"]),
            r"C:\project\src\entities\StoreDecorator.tsx",
            "@/entities/user/testing/file.ts",
        ),
        &["notPublicApiImport"],
        "file inside testing",
    );
    assert_kinds(
        &s.run(
            &with_test_files(&["**/*.test.*"]),
            r"C:\project\src\entities\file.test.tsx",
            "@/entities/user/testing/mocks/user",
        ),
        &["notPublicApiImport"],
        "deep testing import",
    );
}

#[test]
fn ignores_suppress() {
    let internal = "@/entities/user/model";
    assert_valid(
        &Scenario::new()
            .alias()
            .ignore_imports(&["entities/user/model"])
            .run(&rule(), FOOTER, internal),
        "global import",
    );
    assert_valid(
        &Scenario::new()
            .alias()
            .ignore_files(&["**/widgets/footer"])
            .run(&rule(), FOOTER, internal),
        "global file",
    );

    let s = Scenario::new().alias();
    assert_valid(
        &s.run(&rule().ignore_imports(patterns(&["entities/user/**"])), FOOTER, internal),
        "local import",
    );
    assert_valid(
        &s.run(&rule().ignore_files(patterns(&["**/widgets/footer"])), FOOTER, internal),
        "local file",
    );
    assert_valid(
        &s.run(
            &rule().ignore_files(patterns(&["**/pages/login"])),
            LOGIN,
            "@/features/auth/model/types",
        ),
        "local file on pages",
    );
}

#[test]
fn internal_imports_are_rejected() {
    let s = Scenario::new().alias();
    let cases = [
        (FOOTER, "@/entities/user/model"),
        (r"C:\project\src\entities\user\model\Type", "@/entities/message/@x"),
        (FOOTER, "@/features/user/model/selectors"),
        (r"C:\project\src\pages\home", "@/widgets/footer/ui/components/Button"),
        (r"C:\project\src\app\App", "@/pages/home/ui/components/Header"),
    ];
    for (file, specifier) in cases {
        assert_kinds(&s.run(&rule(), file, specifier), &["notPublicApiImport"], specifier);
    }
}

#[test]
fn non_matching_ignores_do_not_suppress() {
    let internal = "@/entities/user/model";
    let auth = "@/features/auth/model/types";
    let cases = [
        (
            Scenario::new().alias().ignore_imports(&["entities/message/model"]),
            rule(),
            FOOTER,
            internal,
        ),
        (
            Scenario::new().alias().ignore_files(&["**/widgets/header"]),
            rule(),
            FOOTER,
            internal,
        ),
        (
            Scenario::new().alias(),
            rule().ignore_imports(patterns(&["features/user/**"])),
            FOOTER,
            internal,
        ),
        (
            Scenario::new()
                .alias()
                .ignore_imports(&["features/user/**"])
                .ignore_files(&["**/pages/home"]),
            rule(),
            LOGIN,
            auth,
        ),
        (
            Scenario::new().alias(),
            rule().ignore_files(patterns(&["**/widgets/header"])),
            FOOTER,
            internal,
        ),
        (
            Scenario::new().alias(),
            rule().ignore_files(patterns(&["**/pages/home"])),
            LOGIN,
            auth,
        ),
        (
            Scenario::new().alias(),
            rule()
                .ignore_imports(patterns(&["entities/**"]))
                .ignore_files(patterns(&["**/pages/auth"])),
            r"C:\project\src\pages\home",
            "@/widgets/footer/ui/components/Button",
        ),
    ];
    for (scenario, rule, file, specifier) in cases {
        assert_kinds(&scenario.run(&rule, file, specifier), &["notPublicApiImport"], specifier);
    }
}

#[test]
fn renamed_layers_follow_roles() {
    let s = Scenario::new()
        .alias()
        .layer(LayerRole::Entities, "domain")
        .layer(LayerRole::Shared, "shared-layer");
    let file = r"C:\project\src\domain\user\model\Type";

    assert_eq!(s.run(&rule(), file, "@/domain/message/@x/user"), Verdict::Allowed);
    assert_eq!(
        s.run(&rule(), file, "@/shared-layer/ui/Button/styles"),
        Verdict::Skipped(SkipReason::ExemptLayer)
    );
    assert_kinds(
        &s.run(&rule(), r"C:\project\src\features\auth", "@/domain/user/model"),
        &["notPublicApiImport"],
        "renamed entities internals",
    );
    // The old name is just another folder now.
    assert_eq!(
        s.run(&rule(), file, "@/entities/user/model"),
        Verdict::Skipped(SkipReason::UnknownLayer)
    );
}

#[test]
fn files_outside_layers_are_skipped() {
    let s = Scenario::new().alias();
    for file in [r"C:\project\src\i18n\config", r"C:\project\src\main.tsx"] {
        assert_eq!(
            s.run(&rule(), file, "@/entities/user/model"),
            Verdict::Skipped(SkipReason::UnknownLayer),
            "{file}"
        );
    }
}
