//! Flattened plain-text export of a project.

use super::project::Project;
use super::step_chain::render_steps;
use super::template::Template;

/// Render the baked document for `project`.
///
/// Layout: a two-line header, a blank line, then for every step a `### name`
/// heading followed by the resolved content and a blank line. Content is
/// written as is, without escaping.
pub fn bake(project: &Project, template: &Template, exported_at: &str) -> String {
    let mut text = format!("Project: {}\nExported: {}\n\n", project.name, exported_at);
    for step in render_steps(project, template) {
        text.push_str(&format!("### {}\n{}\n\n", step.name, step.resolved));
    }
    text
}

/// Default file name for a baked project.
pub fn default_file_name(project: &Project) -> String {
    format!("{}_baked.txt", project.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::step_chain::{set_override, set_step_output};
    use crate::domain::template::{Input, Step};

    #[test]
    fn bakes_every_step_in_template_order() {
        let template = Template {
            id: "t".into(),
            name: "T".into(),
            inputs: vec![Input::new("topic", "Topic").with_default("cats")],
            steps: vec![
                Step::new("s1", "Concept", "About <Topic>"),
                Step::new("s2", "Prompt", "Use [[1]]"),
            ],
        };
        let project = Project::from_template(&template, "Demo", 1, |_| false);
        let project = set_step_output(&project, "s1", "a forest", 2);
        let project = set_override(&project, "s2", "Render [[Concept]] <0>", 3);

        let text = bake(&project, &template, "2026-01-02 03:04:05");

        assert_eq!(
            text,
            "Project: Demo\nExported: 2026-01-02 03:04:05\n\n\
             ### Concept\nAbout cats\n\n\
             ### Prompt\nRender a forest cats\n\n"
        );
    }

    #[test]
    fn template_without_steps_bakes_header_only() {
        let template = Template { id: "t".into(), name: "T".into(), inputs: vec![], steps: vec![] };
        let project = Project::from_template(&template, "Empty", 1, |_| false);
        assert_eq!(bake(&project, &template, "now"), "Project: Empty\nExported: now\n\n");
        assert_eq!(default_file_name(&project), "Empty_baked.txt");
    }
}
