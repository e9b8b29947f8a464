//! Build integration tests

mod common;

use common::vuemaker_cmd;
use predicates::prelude::*;

#[test]
fn test_build_merges_siblings() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("hello.js", "export default { data: () => ({ msg: 'hi' }) }\n");
    workspace.write_file("hello.html", "<p>{{ msg }}</p>\n");
    workspace.write_file("hello.scss", "/* vue:scoped */\np\n  color: red\n");

    vuemaker_cmd()
        .arg("build")
        .arg(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"))
        .stdout(predicate::str::contains("hello.vue"));

    assert_eq!(
        workspace.read_file("hello.vue"),
        "<style lang=\"sass\" scoped>\n/* vue:scoped */\np\n  color: red\n</style>\n\n\
         <template>\n<p>{{ msg }}</p>\n</template>\n\n\
         <script>\nexport default { data: () => ({ msg: 'hi' }) }\n</script>\n\n"
    );
}

#[test]
fn test_build_into_out_dir() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("src/pages/home.jade", "h1 Home\n");
    workspace.write_file("src/pages/home.coffee", "module.exports = {}\n");
    workspace.write_file("src/widgets/clock.html", "<time/>\n");

    vuemaker_cmd()
        .arg("build")
        .arg(workspace.path.join("src"))
        .arg("--out")
        .arg(workspace.path.join("dist"))
        .assert()
        .success();

    assert!(workspace.file_exists("dist/pages/home.vue"));
    assert!(workspace.file_exists("dist/widgets/clock.vue"));
    assert!(!workspace.file_exists("src/pages/home.vue"));

    let home = workspace.read_file("dist/pages/home.vue");
    assert!(home.starts_with("<template lang=\"jade\">\nh1 Home\n</template>"));
    assert!(home.contains("<script lang=\"coffee\">"));
}

#[test]
fn test_build_dry_run() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("a.css", "a {}\n");

    vuemaker_cmd()
        .args(["build", "--dry-run"])
        .arg(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would write"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!workspace.file_exists("a.vue"));
}

#[test]
fn test_rebuild_reports_unchanged() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("a.css", "a {}\n");

    vuemaker_cmd().arg("build").arg(&workspace.path).assert().success();

    vuemaker_cmd()
        .arg("build")
        .arg(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"))
        .stdout(predicate::str::contains("1 unchanged"));
}

#[test]
fn test_build_with_exclude() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("app/a.js", "a\n");
    workspace.write_file("vendor/b.js", "b\n");

    vuemaker_cmd()
        .arg("build")
        .arg(&workspace.path)
        .args(["--exclude", "vendor/**"])
        .assert()
        .success();

    assert!(workspace.file_exists("app/a.vue"));
    assert!(!workspace.file_exists("vendor/b.vue"));
}

#[test]
fn test_build_uses_source_config() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("vuemaker.yaml", "target_extension: .sfc\n");
    workspace.write_file("x.html", "<i/>\n");

    vuemaker_cmd().arg("build").arg(&workspace.path).assert().success();

    assert!(workspace.file_exists("x.sfc"));
    assert!(!workspace.file_exists("x.vue"));
}

#[test]
fn test_build_verbose_logs_to_stderr() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("x.html", "<i/>\n");
    workspace.write_file("notes.txt", "n\n");

    vuemaker_cmd()
        .args(["build", "-v"])
        .arg(&workspace.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping unsupported extension"));
}
