//! Bulk backup document: every project and template in one JSON object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppError;
use super::project::Project;
use super::template::Template;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    pub projects: Vec<Project>,
    pub templates: Vec<Template>,
}

impl Backup {
    pub fn new(projects: Vec<Project>, templates: Vec<Template>) -> Self {
        Self { projects, templates }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a backup document.
    ///
    /// Both `projects` and `templates` must be present and be arrays whose
    /// elements are well-formed records.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AppError::ImportFormat(format!("not valid JSON: {}", e)))?;

        let Value::Object(fields) = &value else {
            return Err(AppError::ImportFormat("expected a JSON object".to_string()));
        };
        for key in ["projects", "templates"] {
            match fields.get(key) {
                Some(Value::Array(_)) => {}
                Some(_) => {
                    return Err(AppError::ImportFormat(format!("'{}' must be an array", key)));
                }
                None => return Err(AppError::ImportFormat(format!("missing '{}'", key))),
            }
        }

        serde_json::from_value(value).map_err(|e| AppError::ImportFormat(e.to_string()))
    }

    /// `prompt_splicer_backup_<date>.json`
    pub fn default_file_name(date: &str) -> String {
        format!("prompt_splicer_backup_{}.json", date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_collections() {
        let backup = Backup::parse(r#"{"projects": [], "templates": []}"#).unwrap();
        assert_eq!(backup, Backup::default());
    }

    #[test]
    fn rejects_missing_field() {
        let err = Backup::parse(r#"{"projects": []}"#).unwrap_err();
        assert!(matches!(err, AppError::ImportFormat(ref m) if m.contains("templates")));
    }

    #[test]
    fn rejects_non_array_field() {
        let err = Backup::parse(r#"{"projects": {}, "templates": []}"#).unwrap_err();
        assert!(matches!(err, AppError::ImportFormat(ref m) if m.contains("array")));
    }

    #[test]
    fn rejects_non_object_and_garbage() {
        assert!(matches!(Backup::parse("[1,2]"), Err(AppError::ImportFormat(_))));
        assert!(matches!(Backup::parse("{oops"), Err(AppError::ImportFormat(_))));
    }

    #[test]
    fn rejects_malformed_records() {
        let err = Backup::parse(r#"{"projects": [{"id": 3}], "templates": []}"#).unwrap_err();
        assert!(matches!(err, AppError::ImportFormat(_)));
    }

    #[test]
    fn reads_documents_with_camel_case_fields() {
        let text = r#"{
          "projects": [{"id":"proj_1","templateId":"t","name":"P","createdAt":1,
                        "lastModifiedAt":1,"lastOpenedAt":1,"inputValues":{"topic":"x"},
                        "customInputs":[],"stepOutputs":{},"stepOverrides":{}}],
          "templates": [{"id":"t","name":"T","inputs":[],"steps":[]}]
        }"#;
        let backup = Backup::parse(text).unwrap();
        assert_eq!(backup.projects[0].template_id, "t");
        assert_eq!(backup.projects[0].value("topic"), "x");

        let again = Backup::parse(&backup.to_json().unwrap()).unwrap();
        assert_eq!(again, backup);
    }
}
