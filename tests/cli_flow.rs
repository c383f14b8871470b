mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn fresh_data_dir_offers_builtin_templates() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pro_chain_demo"))
        .stdout(predicate::str::contains("rewrite_demo"));

    ctx.cli()
        .args(["t", "show", "pro_chain_demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<0>  <Core topic>"))
        .stdout(predicate::str::contains("[[2]]  [[2. Image prompt]]"));
}

#[test]
fn user_can_build_and_render_a_chain() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    let id = ctx.new_project("Story", "Tale");

    ctx.cli()
        .args(["render", &id, "--step", "1"])
        .assert()
        .success()
        .stdout("A story about cats (cats)\n");

    ctx.cli().args(["step", "output", "Tale", "Intro", "Hello"]).assert().success();
    ctx.cli()
        .args(["render", "Tale", "--step", "Follow"])
        .assert()
        .success()
        .stdout("Ref: Hello\n");

    ctx.cli().args(["var", "set", "Tale", "Topic", "dogs"]).assert().success();
    ctx.cli()
        .args(["r", "Tale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Intro\nA story about dogs (dogs)"));
}

#[test]
fn local_variables_shift_when_removed() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");

    ctx.cli().args(["var", "add", "Tale", "X"]).assert().success().stdout(predicate::str::contains("<l1>"));
    ctx.cli().args(["var", "add", "Tale", "Y"]).assert().success().stdout(predicate::str::contains("<l2>"));
    ctx.cli().args(["var", "set", "Tale", "X", "x-val"]).assert().success();
    ctx.cli().args(["var", "set", "Tale", "Y", "y-val"]).assert().success();
    ctx.cli().args(["step", "edit", "Tale", "1", "<l1><l2>"]).assert().success();

    ctx.cli().args(["render", "Tale", "--step", "1"]).assert().success().stdout("x-valy-val\n");

    ctx.cli().args(["var", "rm", "Tale", "X"]).assert().success();
    ctx.cli().args(["render", "Tale", "--step", "1"]).assert().success().stdout("y-val<l2>\n");
}

#[test]
fn duplicate_local_variable_is_rejected() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");

    ctx.cli().args(["var", "add", "Tale", "Tone"]).assert().success();
    ctx.cli()
        .args(["var", "add", "Tale", "Tone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: A variable named 'Tone' already exists"));

    let projects = ctx.record("projects.json");
    assert_eq!(projects[0]["customInputs"].as_array().unwrap().len(), 1);
}

#[test]
fn override_can_be_reverted_or_promoted() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");

    ctx.cli().args(["step", "edit", "Tale", "2", "Custom"]).assert().success();
    ctx.cli()
        .args(["render", "Tale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2. Follow (edited)\nCustom"));

    ctx.cli().args(["step", "revert", "Tale", "2"]).assert().success();
    ctx.cli().args(["render", "Tale", "--step", "2", "--raw"]).assert().success().stdout(
        predicate::str::contains("Ref: [[1]]"),
    );

    ctx.cli().args(["step", "edit", "Tale", "2", "Promoted"]).assert().success();
    ctx.cli().args(["step", "promote", "Tale", "2"]).assert().success();
    let templates = ctx.record("templates.json");
    assert_eq!(templates[0]["steps"][1]["content"], "Promoted");
    assert_eq!(ctx.record("projects.json")[0]["stepOverrides"], serde_json::json!({}));
}

#[test]
fn bake_writes_flattened_document() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");
    ctx.cli().args(["step", "output", "Tale", "1", "Hello"]).assert().success();

    ctx.cli().args(["bake", "Tale"]).assert().success().stdout(predicate::str::contains("Tale_baked.txt"));

    let text = fs::read_to_string(ctx.work_dir().join("Tale_baked.txt")).unwrap();
    assert!(text.starts_with("Project: Tale\nExported: "));
    assert!(text.ends_with("### Intro\nA story about cats (cats)\n\n### Follow\nRef: Hello\n\n"));
}

#[test]
fn bake_uses_configured_timestamp_format() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    fs::write(ctx.data_dir().join("config.toml"), "[export]\ntimestamp_format = \"stamp-%Y\"\n").unwrap();
    ctx.new_project("Story", "Tale");

    ctx.cli()
        .args(["bake", "Tale", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Project: Tale\nExported: stamp-\d{4}\n\n### Intro\n").unwrap());
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.data_dir()).unwrap();
    fs::write(ctx.data_dir().join("config.toml"), "[storage]\nunknown = 1\n").unwrap();

    ctx.cli()
        .args(["template", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn deleting_template_leaves_uncategorized_project() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");

    ctx.cli().args(["template", "delete", "Story", "--yes"]).assert().success().stdout(
        predicate::str::contains("1 project(s) now have no template"),
    );

    ctx.cli()
        .args(["project", "list", "--group"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uncategorized\n"));

    ctx.cli()
        .args(["render", "Tale"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 't_story' not found"));
}

#[test]
fn destructive_commands_need_confirmation_without_terminal() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");

    ctx.cli()
        .args(["project", "delete", "Tale"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Operation cancelled"));
    ctx.project_id("Tale");

    ctx.cli().args(["p", "rm", "Tale", "-y"]).assert().success();
    assert_eq!(ctx.record("projects.json"), serde_json::json!([]));
}

#[test]
fn backup_round_trip_replaces_library() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Kept");

    let backup = ctx.work_dir().join("backup.json");
    ctx.cli()
        .args(["backup", "export", "--output", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 project(s) and 1 template(s)"));

    ctx.new_project("Story", "Later");
    ctx.cli().args(["backup", "import", backup.to_str().unwrap(), "--yes"]).assert().success();

    let projects = ctx.record("projects.json");
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(projects[0]["name"], "Kept");
}

#[test]
fn malformed_backup_is_rejected_before_any_write() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    ctx.new_project("Story", "Tale");

    let bad = ctx.work_dir().join("bad.json");
    fs::write(&bad, r#"{"projects": [], "templates": "nope"}"#).unwrap();
    ctx.cli()
        .args(["backup", "import", bad.to_str().unwrap(), "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backup file: 'templates' must be an array"));

    assert_eq!(ctx.record("projects.json").as_array().unwrap().len(), 1);
}

#[test]
fn corrupt_projects_record_is_discarded() {
    let ctx = TestContext::new();
    ctx.seed_story_template();
    fs::write(ctx.data_dir().join("projects.json"), "{ not json").unwrap();

    ctx.cli().args(["project", "list"]).assert().success().stdout("No projects\n");
    assert!(!ctx.data_dir().join("projects.json").exists());
}

#[test]
fn settings_are_validated() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["settings", "set", "--ui-scale", "16", "--density", "text-xs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ui_scale = 16px (100%)"))
        .stdout(predicate::str::contains("density = compact"));

    ctx.cli()
        .args(["settings", "set", "--sidebar-width", "900"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid setting"));

    assert_eq!(ctx.record("settings.json")["uiScale"], 16);
    assert_eq!(ctx.record("settings.json")["sidebarWidth"], 300);
}
