//! Shared testing utilities for splicer CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated data directory and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, data_dir, work_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `splicer` binary, pointed at this context's data.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("splicer").expect("Failed to locate splicer binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("SPLICER_HOME", &self.data_dir)
            .env_remove("SPLICER_LOG");
        cmd
    }

    /// Parsed contents of a stored record such as `projects.json`.
    pub fn record(&self, file: &str) -> Value {
        let text = fs::read_to_string(self.data_dir.join(file))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", file, e));
        serde_json::from_str(&text).expect("Stored record should be valid JSON")
    }

    /// Id of the stored project called `name`.
    pub fn project_id(&self, name: &str) -> String {
        self.record("projects.json")
            .as_array()
            .and_then(|projects| projects.iter().find(|p| p["name"] == name))
            .and_then(|p| p["id"].as_str())
            .unwrap_or_else(|| panic!("No project named {}", name))
            .to_string()
    }

    /// Create a project from `template` and return its id.
    pub fn new_project(&self, template: &str, name: &str) -> String {
        self.cli().args(["project", "new", template, "--name", name]).assert().success();
        self.project_id(name)
    }

    /// Install a small template set so scenarios do not depend on the built-ins.
    pub fn seed_story_template(&self) {
        fs::create_dir_all(&self.data_dir).unwrap();
        fs::write(
            self.data_dir.join("templates.json"),
            r#"[{
  "id": "t_story",
  "name": "Story",
  "inputs": [{ "id": "topic", "label": "Topic", "defaultValue": "cats" }],
  "steps": [
    { "id": "s1", "name": "Intro", "content": "A story about <0> (<Topic>)" },
    { "id": "s2", "name": "Follow", "content": "Ref: [[1]]" }
  ]
}]"#,
        )
        .unwrap();
    }
}
