//! Scenario tests for the `layer-imports` rule.

mod common;

use common::{assert_kinds, assert_valid, patterns, Scenario};
use fsd_lint_core::{ImportViolation, LayerRole, Verdict};
use fsd_lint_rules::LayerImports;

const USER_FORM: &str = r"C:\project\src\entities\user\ui\UserForm";
const BUTTON: &str = r"C:\project\src\shared\ui\Button";

fn rule() -> LayerImports {
    LayerImports::new()
}

#[test]
fn valid_imports_follow_hierarchy() {
    let s = Scenario::new().alias();
    let cases = [
        ("shared into entities", USER_FORM, "@/shared/ui/Button"),
        ("app into app", r"C:\project\src\app\model\Type", "@/app/model/Type2"),
        ("entities via @x", USER_FORM, "@/entities/message/@x/user"),
        ("shared into shared", BUTTON, "@/shared/ui/Icon"),
        ("index file above layers", r"C:\project\src\index.ts", "@/app/providers/Provider"),
        ("undefined layer", USER_FORM, "@/services/api"),
        ("missing file path", "<input>", "@/services/api"),
        ("external library", USER_FORM, "react"),
        ("node module", USER_FORM, "axios"),
    ];
    for (name, file, specifier) in cases {
        assert_valid(&s.run(&rule(), file, specifier), name);
    }
}

#[test]
fn react_without_alias_is_valid() {
    assert_valid(&Scenario::new().run(&rule(), USER_FORM, "react"), "no alias");
}

#[test]
fn global_ignores_suppress() {
    let by_import = Scenario::new().alias().ignore_imports(&["entities"]);
    assert_valid(&by_import.run(&rule(), BUTTON, "@/entities"), "global import");

    let by_file = Scenario::new().alias().ignore_files(&["**/shared/ui/*"]);
    assert_valid(&by_file.run(&rule(), BUTTON, "@/entities"), "global file");
    assert_valid(&by_file.run(&rule(), BUTTON, "@/features/getCard"), "global file 2");
}

#[test]
fn local_ignores_suppress() {
    let s = Scenario::new().alias();
    let cases = [
        (
            LayerImports::new().ignore_imports(patterns(&["**/StoreProvider"])),
            USER_FORM,
            "@/app/providers/StoreProvider",
        ),
        (
            LayerImports::new().ignore_imports(patterns(&["**/*Ignored.{ts,tsx,js,jsx}"])),
            USER_FORM,
            "@/widgets/footer/StoreProviderIgnored.tsx",
        ),
        (
            LayerImports::new().ignore_imports(patterns(&["shared/providers/**"])),
            USER_FORM,
            "@/shared/providers/StoreProvider",
        ),
        (
            LayerImports::new().ignore_files(patterns(&["**/shared/ui/*"])),
            BUTTON,
            "@/entities/user",
        ),
        (
            LayerImports::new().ignore_files(patterns(&["**/shared/model/*"])),
            r"C:\project\src\shared\model\Button",
            "@/features/getCard",
        ),
    ];
    for (rule, file, specifier) in cases {
        assert_valid(&s.run(&rule, file, specifier), specifier);
    }
}

#[test]
fn custom_layer_names() {
    let cases = [
        (
            Scenario::new()
                .alias()
                .layer(LayerRole::Entities, "domain")
                .layer(LayerRole::Shared, "shared-layer"),
            r"C:\project\src\domain\user\ui\UserForm",
            "@/shared-layer/ui/Button",
        ),
        (
            Scenario::new()
                .alias()
                .layer(LayerRole::Entities, "domain")
                .layer(LayerRole::Features, "modules"),
            r"C:\project\src\modules\addCard\ui\Button",
            "@/domain/user",
        ),
        (
            Scenario::new().alias().layer(LayerRole::Features, "modules"),
            r"C:\project\src\widgets\header\ui\Header",
            "@/modules/addCard",
        ),
        (
            Scenario::new()
                .alias()
                .layer(LayerRole::Widgets, "components")
                .layer(LayerRole::Pages, "routes"),
            r"C:\project\src\routes\home\ui\HomePage",
            "@/components/header",
        ),
        (
            Scenario::new().alias().layer(LayerRole::Entities, "domain"),
            r"C:\project\src\domain\user\ui\UserForm",
            "@/domain/message/@x/user",
        ),
        (
            Scenario::new()
                .alias()
                .layer(LayerRole::App, "application")
                .layer(LayerRole::Pages, "routes"),
            r"C:\project\src\application\providers\StoreProvider",
            "@/routes/home",
        ),
    ];
    for (scenario, file, specifier) in cases {
        assert_eq!(scenario.run(&rule(), file, specifier), Verdict::Allowed, "{specifier}");
    }
}

#[test]
fn all_layers_renamed() {
    let s = Scenario::new()
        .alias()
        .layer(LayerRole::App, "application")
        .layer(LayerRole::Pages, "routes")
        .layer(LayerRole::Widgets, "components")
        .layer(LayerRole::Features, "modules")
        .layer(LayerRole::Entities, "domain")
        .layer(LayerRole::Shared, "shared-layer");
    let file = r"C:\project\src\domain\user\ui\UserForm";
    assert_eq!(s.run(&rule(), file, "@/shared-layer/ui/Button"), Verdict::Allowed);
    assert_kinds(
        &s.run(&rule(), file, "@/modules/auth"),
        &["incorrectLayerImport"],
        "domain importing modules",
    );
    assert_kinds(
        &s.run(&rule(), file, "@/domain/message"),
        &["incorrectEntityImports"],
        "renamed entities still need @x",
    );
    // Canonical names are no longer layers once renamed.
    assert!(s.run(&rule(), file, "@/features/auth").is_skipped());
}

#[test]
fn invalid_upward_imports() {
    let s = Scenario::new().alias();
    let cases = [
        (BUTTON, "@/features/getCard"),
        (r"C:\project\src\features\getCard\ui\Button", "@/widgets/footer"),
        (r"C:\project\src\widgets\footer\ui\Button", "@/pages/getCard"),
        (r"C:\project\src\pages\home\Button", "@/app/getCard"),
        (r"C:\project\src\shared\ui\BurgerMenu\BurgerMenu", "@/pages/privacy"),
        (BUTTON, "@/entities/user/model"),
        (BUTTON, "@/entities"),
        (USER_FORM, "@/widgets/footer/StoreProvider.tsx"),
        (USER_FORM, "@/pages/home"),
        (r"C:\project\src\features\addCard\ui\Button", "@/app/providers"),
    ];
    for (file, specifier) in cases {
        assert_kinds(&s.run(&rule(), file, specifier), &["incorrectLayerImport"], specifier);
    }
}

#[test]
fn invalid_entity_imports() {
    let s = Scenario::new().alias();
    for specifier in [
        "@/entities/message",
        "@/entities/message/@x/userEntity",
        "@/entities/message/@x",
    ] {
        assert_kinds(&s.run(&rule(), USER_FORM, specifier), &["incorrectEntityImports"], specifier);
    }

    let no_alias = Scenario::new();
    assert_kinds(
        &no_alias.run(&rule(), USER_FORM, "entities/message"),
        &["incorrectEntityImports"],
        "without alias",
    );
}

#[test]
fn non_matching_ignores_do_not_suppress() {
    let cases = [
        (
            Scenario::new().alias().ignore_files(&["**/shared/ui/*"]),
            r"C:\project\src\shared\model\types",
            "@/entities",
        ),
        (
            Scenario::new().alias().ignore_imports(&["features"]),
            r"C:\project\src\shared\model\types",
            "@/entities",
        ),
        (
            Scenario::new().alias().ignore_imports(&["features"]),
            BUTTON,
            "@/entities/user",
        ),
        (
            Scenario::new().alias().ignore_files(&["**/shared/model/*"]),
            BUTTON,
            "@/entities/user",
        ),
    ];
    for (scenario, file, specifier) in cases {
        assert_kinds(&scenario.run(&rule(), file, specifier), &["incorrectLayerImport"], specifier);
    }

    let local = LayerImports::new().ignore_imports(patterns(&["entities/**"]));
    assert_kinds(
        &Scenario::new().alias().run(&local, BUTTON, "@/features/getCard"),
        &["incorrectLayerImport"],
        "wrong local import pattern",
    );
}

#[test]
fn violation_data_names_layers() {
    let verdict = Scenario::new().alias().run(&rule(), BUTTON, "@/features/getCard");
    assert_eq!(
        verdict.violations(),
        &[ImportViolation::IncorrectLayerImport {
            import_layer: "features".into(),
            file_layer: "shared".into(),
        }]
    );
    let data = verdict.violations()[0].data();
    assert_eq!(data.get("importLayer").map(String::as_str), Some("features"));
    assert_eq!(data.get("fileLayer").map(String::as_str), Some("shared"));
}

fn assert_hierarchy(renames: &[(LayerRole, &'static str)]) {
    let s = renames
        .iter()
        .fold(Scenario::new().alias(), |s, (role, name)| s.layer(*role, *name));
    let name = |role: LayerRole| {
        renames
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(role.as_str(), |(_, n)| *n)
    };

    for file_role in LayerRole::ALL {
        for import_role in LayerRole::ALL {
            let file = format!("/project/src/{}/a/ui/X", name(file_role));
            let specifier = format!("@/{}/b", name(import_role));
            let ids = s.run(&rule(), &file, &specifier).message_ids();
            if file_role.allowed_imports().contains(&import_role) {
                assert!(
                    !ids.contains(&"incorrectLayerImport"),
                    "{file_role} -> {import_role}: {ids:?}"
                );
            } else {
                assert_eq!(ids, vec!["incorrectLayerImport"], "{file_role} -> {import_role}");
            }
        }
    }
}

#[test]
fn every_layer_pair_follows_the_table() {
    assert_hierarchy(&[]);
    assert_hierarchy(&[
        (LayerRole::Pages, "routes"),
        (LayerRole::Widgets, "components"),
        (LayerRole::Features, "modules"),
        (LayerRole::Entities, "domain"),
    ]);
}

#[test]
fn same_layer_imports_between_slices_are_rejected() {
    let s = Scenario::new().alias();
    for (file, specifier) in [
        (r"C:\project\src\features\auth\ui\Form", "@/features/cart"),
        (r"C:\project\src\widgets\header\ui\Menu", "@/widgets/footer"),
        (r"C:\project\src\pages\home\ui\Page", "@/pages/login"),
    ] {
        assert_kinds(&s.run(&rule(), file, specifier), &["incorrectLayerImport"], specifier);
    }
}

#[test]
fn entity_message_names_renamed_layer() {
    let s = Scenario::new().alias().layer(LayerRole::Entities, "domain");
    let verdict = s.run(&rule(), r"C:\project\src\domain\user\ui\UserForm", "@/domain/message");
    let [violation] = verdict.violations() else {
        panic!("expected one violation, got {verdict:?}");
    };
    assert!(violation.to_string().contains("'domain/message/@x/user'"));
}
