use std::path::PathBuf;

use clap::Subcommand;

use super::{confirm, format_time};
use crate::app::api::{self, ProjectSummary};
use crate::app::commands::{library, project, variable};
use crate::domain::{AppError, SortKey};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects
    #[clap(visible_alias = "ls")]
    List {
        /// Sort by modified, created, name or opened
        #[arg(long, default_value_t = SortKey::LastModified)]
        sort: SortKey,
        /// Group projects by template
        #[arg(short, long)]
        group: bool,
    },
    /// Create a project from a template
    New {
        /// Template id or name
        template: String,
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Mark a project as opened and show it
    Open { project: String },
    /// Show a project's variables and step state
    Show { project: String },
    Rename { project: String, name: String },
    #[clap(visible_alias = "rm")]
    Delete {
        project: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(data_dir: Option<PathBuf>, command: ProjectCommands) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    match command {
        ProjectCommands::List { sort, group } => {
            if group {
                for group in library::grouped(&ctx, sort)? {
                    println!("{}", group.name);
                    for summary in &group.projects {
                        println!("  {}", summary_line(summary));
                    }
                }
            } else {
                let projects = library::list(&ctx, sort)?;
                if projects.is_empty() {
                    println!("No projects");
                }
                for summary in &projects {
                    println!("{}", summary_line(summary));
                }
            }
        }
        ProjectCommands::New { template, name } => {
            let p = project::create(&ctx, &template, name)?;
            println!("✅ Created project '{}' ({})", p.name, p.id);
        }
        ProjectCommands::Open { project: key } => {
            let p = project::open(&ctx, &key)?;
            print_project(&ctx, &p.id)?;
        }
        ProjectCommands::Show { project: key } => print_project(&ctx, &key)?,
        ProjectCommands::Rename { project: key, name } => {
            let p = project::rename(&ctx, &key, &name)?;
            println!("✅ Renamed project {} to '{}'", p.id, p.name);
        }
        ProjectCommands::Delete { project: key, yes } => {
            let target = project::get(&ctx, &key)?;
            confirm(&format!("Delete project '{}'?", target.name), yes)?;
            let removed = project::delete(&ctx, &target.id)?;
            println!("✅ Deleted project '{}'", removed.name);
        }
    }
    Ok(())
}

fn summary_line(summary: &ProjectSummary) -> String {
    format!(
        "{}  {}  [{}]  modified {}",
        summary.id,
        summary.name,
        summary.template_name.as_deref().unwrap_or("missing template"),
        format_time(summary.last_modified_at)
    )
}

fn print_project(ctx: &api::FilesystemContext, key: &str) -> Result<(), AppError> {
    let p = project::get(ctx, key)?;
    println!("{} ({})", p.name, p.id);
    println!("Created {}, modified {}", format_time(p.created_at), format_time(p.last_modified_at));

    println!("\nVariables:");
    for row in variable::list(ctx, &p.id)? {
        println!("  {}  <{}> = {:?}", row.scope.tag(), row.label, row.value);
    }
    if !p.step_overrides.is_empty() {
        println!("\n{} step override(s)", p.step_overrides.len());
    }
    if !p.step_outputs.is_empty() {
        println!("{} step output(s) recorded", p.step_outputs.len());
    }
    Ok(())
}
