use std::path::PathBuf;

use clap::Subcommand;

use super::{confirm, read_text};
use crate::app::api;
use crate::app::commands::template;
use crate::domain::resolver::{global_tag, step_tag};
use crate::domain::{AppError, InputPatch, StepPatch, Template};

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List templates
    #[clap(visible_alias = "ls")]
    List,
    /// Show a template's inputs and steps with their tags
    Show {
        /// Template id or name
        template: String,
    },
    /// Create a starter template
    New {
        /// Name for the template
        name: Option<String>,
    },
    /// Copy a template
    #[clap(visible_alias = "dup")]
    Duplicate { template: String },
    /// Save a project's current values and steps as a new template
    Extract {
        /// Project id or name
        project: String,
    },
    Rename { template: String, name: String },
    /// Delete a template (its projects are kept)
    #[clap(visible_alias = "rm")]
    Delete {
        template: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Edit a template's inputs
    Input {
        #[command(subcommand)]
        command: InputCommands,
    },
    /// Edit a template's steps
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}

#[derive(Subcommand)]
pub enum InputCommands {
    Add {
        template: String,
        label: String,
        #[arg(long)]
        default: Option<String>,
    },
    /// Change an input's label or default value
    Update {
        template: String,
        /// Input id or label
        input: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, conflicts_with = "clear_default")]
        default: Option<String>,
        #[arg(long)]
        clear_default: bool,
    },
    #[clap(visible_alias = "rm")]
    Remove { template: String, input: String },
}

#[derive(Subcommand)]
pub enum StepCommands {
    Add {
        template: String,
        name: String,
        /// Step content (read from --file or stdin when omitted)
        content: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Change a step's name, description or content
    Update {
        template: String,
        /// Step id, name or 1-based position
        step: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        /// Read the new content from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    #[clap(visible_alias = "rm")]
    Remove { template: String, step: String },
}

pub fn run(data_dir: Option<PathBuf>, command: TemplateCommands) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    match command {
        TemplateCommands::List => {
            let templates = template::list(&ctx)?;
            if templates.is_empty() {
                println!("No templates");
            }
            for t in templates {
                println!(
                    "{}  {}  ({} input(s), {} step(s), {} project(s))",
                    t.id, t.name, t.inputs, t.steps, t.projects
                );
            }
        }
        TemplateCommands::Show { template } => print_template(&template::show(&ctx, &template)?),
        TemplateCommands::New { name } => {
            let t = template::create(&ctx, name)?;
            println!("✅ Created template '{}' ({})", t.name, t.id);
        }
        TemplateCommands::Duplicate { template } => {
            let t = template::duplicate(&ctx, &template)?;
            println!("✅ Created template '{}' ({})", t.name, t.id);
        }
        TemplateCommands::Extract { project } => {
            let t = template::extract(&ctx, &project)?;
            println!("✅ Created template '{}' ({})", t.name, t.id);
        }
        TemplateCommands::Rename { template, name } => {
            let t = template::rename(&ctx, &template, &name)?;
            println!("✅ Renamed template {} to '{}'", t.id, t.name);
        }
        TemplateCommands::Delete { template, yes } => {
            let target = template::show(&ctx, &template)?;
            confirm(&format!("Delete template '{}'?", target.name), yes)?;
            let deleted = template::delete(&ctx, &target.id)?;
            println!("✅ Deleted template '{}'", deleted.template.name);
            if deleted.orphaned > 0 {
                println!("ℹ️ {} project(s) now have no template", deleted.orphaned);
            }
        }
        TemplateCommands::Input { command } => {
            let t = match command {
                InputCommands::Add { template, label, default } => {
                    template::add_input(&ctx, &template, &label, default)?
                }
                InputCommands::Update { template, input, label, default, clear_default } => {
                    let default_value = if clear_default { Some(None) } else { default.map(Some) };
                    template::update_input(&ctx, &template, &input, InputPatch { label, default_value })?
                }
                InputCommands::Remove { template, input } => {
                    template::remove_input(&ctx, &template, &input)?
                }
            };
            println!("✅ Updated template '{}'", t.name);
            print_inputs(&t);
        }
        TemplateCommands::Step { command } => {
            let t = match command {
                StepCommands::Add { template, name, content, file } => {
                    let content = read_text(content, file)?;
                    template::add_step(&ctx, &template, &name, &content)?
                }
                StepCommands::Update { template, step, name, description, content, file } => {
                    let content = match (content, file) {
                        (None, None) => None,
                        (content, file) => Some(read_text(content, file)?),
                    };
                    let description = description.map(|d| Some(d).filter(|d| !d.is_empty()));
                    template::update_step(&ctx, &template, &step, StepPatch { name, description, content })?
                }
                StepCommands::Remove { template, step } => {
                    template::remove_step(&ctx, &template, &step)?
                }
            };
            println!("✅ Updated template '{}'", t.name);
            print_steps(&t);
        }
    }
    Ok(())
}

fn print_template(t: &Template) {
    println!("{} ({})", t.name, t.id);
    print_inputs(t);
    print_steps(t);
}

fn print_inputs(t: &Template) {
    println!("\nInputs:");
    for (index, input) in t.inputs.iter().enumerate() {
        let default = input
            .default_value
            .as_deref()
            .map(|d| format!(" = {:?}", d))
            .unwrap_or_default();
        println!("  {}  <{}>{}  [{}]", global_tag(index), input.label, default, input.id);
    }
}

fn print_steps(t: &Template) {
    println!("\nSteps:");
    for (index, step) in t.steps.iter().enumerate() {
        println!("  {}  [[{}]]  [{}]", step_tag(index), step.name, step.id);
        if let Some(description) = &step.description {
            println!("      {}", description);
        }
        for line in step.content.lines() {
            println!("      | {}", line);
        }
    }
}
