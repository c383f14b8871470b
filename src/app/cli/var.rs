use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::app::commands::variable;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum VarCommands {
    /// List a project's global and local variables
    #[clap(visible_alias = "ls")]
    List { project: String },
    /// Set a variable by id or label
    Set { project: String, variable: String, value: String },
    /// Add a project-local variable
    Add { project: String, label: String },
    /// Remove a project-local variable by id or label
    #[clap(visible_alias = "rm")]
    Remove { project: String, variable: String },
}

pub fn run(data_dir: Option<PathBuf>, command: VarCommands) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    match command {
        VarCommands::List { project } => {
            for row in variable::list(&ctx, &project)? {
                println!("{}\t{}\t{}", row.scope.tag(), row.label, row.value);
            }
        }
        VarCommands::Set { project, variable: key, value } => {
            let row = variable::set(&ctx, &project, &key, &value)?;
            println!("✅ {} <{}> = {:?}", row.scope.tag(), row.label, row.value);
        }
        VarCommands::Add { project, label } => match variable::add(&ctx, &project, &label)? {
            Some(row) => println!("✅ Added {} <{}>", row.scope.tag(), row.label),
            None => println!("ℹ️ Empty label, nothing added"),
        },
        VarCommands::Remove { project, variable: key } => {
            let row = variable::remove(&ctx, &project, &key)?;
            println!("✅ Removed <{}>; later local tags shift up by one", row.label);
        }
    }
    Ok(())
}
