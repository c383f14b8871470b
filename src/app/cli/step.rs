use std::path::PathBuf;

use clap::Subcommand;

use super::read_text;
use crate::app::api;
use crate::app::commands::step;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum StepCommands {
    /// Override a step's content for one project
    Edit {
        project: String,
        /// Step id, name or 1-based position
        step: String,
        /// New content (read from --file or stdin when omitted)
        content: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Drop a project's override so the template content applies again
    Revert { project: String, step: String },
    /// Save the project's version of a step into the template
    Promote { project: String, step: String },
    /// Record a step's output for [[N]] references
    Output {
        project: String,
        step: String,
        value: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn run(data_dir: Option<PathBuf>, command: StepCommands) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    match command {
        StepCommands::Edit { project, step: key, content, file } => {
            let content = read_text(content, file)?;
            let s = step::edit(&ctx, &project, &key, &content)?;
            println!("✅ Step {} '{}' overridden", s.position, s.name);
        }
        StepCommands::Revert { project, step: key } => {
            let s = step::revert(&ctx, &project, &key)?;
            println!("✅ Step {} '{}' reverted to template content", s.position, s.name);
        }
        StepCommands::Promote { project, step: key } => {
            let s = step::promote(&ctx, &project, &key)?;
            println!("✅ Step {} '{}' saved to template", s.position, s.name);
        }
        StepCommands::Output { project, step: key, value, file } => {
            let value = read_text(value, file)?;
            let s = step::set_output(&ctx, &project, &key, &value)?;
            println!("✅ Recorded output of step {} '{}'", s.position, s.name);
        }
    }
    Ok(())
}
