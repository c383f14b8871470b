use std::path::PathBuf;

use clap::Subcommand;

use super::confirm;
use crate::app::api;
use crate::app::commands::backup;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Write every project and template to one JSON file
    Export {
        /// Output file (defaults to "prompt_splicer_backup_<date>.json")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all projects and templates with a backup's contents
    Import {
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(data_dir: Option<PathBuf>, command: BackupCommands) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    match command {
        BackupCommands::Export { output } => {
            let (path, counts) = backup::export(&ctx, output)?;
            println!(
                "✅ Exported {} project(s) and {} template(s) to {}",
                counts.projects,
                counts.templates,
                path.display()
            );
        }
        BackupCommands::Import { file, yes } => {
            let document = backup::load(&file)?;
            confirm("Replace all projects and templates with this backup?", yes)?;
            let counts = backup::import(&ctx, document)?;
            println!(
                "✅ Imported {} project(s) and {} template(s)",
                counts.projects, counts.templates
            );
        }
    }
    Ok(())
}
