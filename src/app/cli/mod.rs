//! CLI Adapter.

mod backup;
mod project;
mod render;
mod settings;
mod step;
mod template;
mod var;

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;

use crate::domain::{AppError, Timestamp};

#[derive(Parser)]
#[command(name = "splicer")]
#[command(version)]
#[command(about = "Build multi-step prompt chains from reusable templates", long_about = None)]
struct Cli {
    /// Data directory (defaults to $SPLICER_HOME, then ~/.splicer)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and edit templates
    #[clap(visible_alias = "t")]
    Template {
        #[command(subcommand)]
        command: template::TemplateCommands,
    },
    /// Create, list and manage projects
    #[clap(visible_alias = "p")]
    Project {
        #[command(subcommand)]
        command: project::ProjectCommands,
    },
    /// Read and write a project's variables
    #[clap(visible_alias = "v")]
    Var {
        #[command(subcommand)]
        command: var::VarCommands,
    },
    /// Override step content or record step output for a project
    #[clap(visible_alias = "s")]
    Step {
        #[command(subcommand)]
        command: step::StepCommands,
    },
    /// Print a project's steps with every placeholder resolved
    #[clap(visible_alias = "r")]
    Render {
        /// Project id or name
        project: String,
        /// Only this step (id, name or 1-based position)
        #[arg(long)]
        step: Option<String>,
        /// Print the raw effective content next to the resolved text
        #[arg(long)]
        raw: bool,
    },
    /// Export a project as one flattened text document
    #[clap(visible_alias = "b")]
    Bake {
        /// Project id or name
        project: String,
        /// Output file (defaults to "<project name>_baked.txt")
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,
        /// Write the document to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
    /// Export or import every project and template
    Backup {
        #[command(subcommand)]
        command: backup::BackupCommands,
    },
    /// Show or change display settings
    Settings {
        #[command(subcommand)]
        command: settings::SettingsCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result: Result<(), AppError> = match cli.command {
        Commands::Template { command } => template::run(data_dir, command),
        Commands::Project { command } => project::run(data_dir, command),
        Commands::Var { command } => var::run(data_dir, command),
        Commands::Step { command } => step::run(data_dir, command),
        Commands::Render { project, step, raw } => {
            render::run_render(data_dir, &project, step.as_deref(), raw)
        }
        Commands::Bake { project, output, stdout } => {
            render::run_bake(data_dir, &project, output, stdout)
        }
        Commands::Backup { command } => backup::run(data_dir, command),
        Commands::Settings { command } => settings::run(data_dir, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Ask before a destructive change. `--yes` skips the prompt; without a
/// terminal the change is refused.
fn confirm(prompt: &str, yes: bool) -> Result<(), AppError> {
    if yes {
        return Ok(());
    }
    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        return Err(AppError::Cancelled);
    }
    let accepted = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|err| AppError::config_error(format!("Failed to read confirmation: {}", err)))?;
    if accepted { Ok(()) } else { Err(AppError::Cancelled) }
}

/// Text given inline, read from a file, or piped on stdin when neither is set.
fn read_text(inline: Option<String>, file: Option<PathBuf>) -> Result<String, AppError> {
    if let Some(text) = inline {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    if std::io::stdin().is_terminal() {
        return Err(AppError::config_error("No text given: pass it inline, with --file, or on stdin"));
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn format_time(millis: Timestamp) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}
