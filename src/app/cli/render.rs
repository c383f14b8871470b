use std::path::PathBuf;

use crate::app::api;
use crate::app::commands::{bake, render};
use crate::domain::AppError;

pub fn run_render(
    data_dir: Option<PathBuf>,
    project: &str,
    step: Option<&str>,
    raw: bool,
) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    let outcome = render::execute(&ctx, project, step)?;

    // A single step prints bare so it can be piped.
    if step.is_some() && !raw {
        for s in &outcome.steps {
            println!("{}", s.resolved);
        }
        return Ok(());
    }

    for s in &outcome.steps {
        let marker = if s.overridden { " (edited)" } else { "" };
        println!("### {}. {}{}", s.position + 1, s.name, marker);
        if raw {
            println!("--- raw");
            println!("{}", s.raw);
            println!("--- resolved");
        }
        println!("{}\n", s.resolved);
    }
    Ok(())
}

pub fn run_bake(
    data_dir: Option<PathBuf>,
    project: &str,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    if stdout {
        print!("{}", bake::render(&ctx, project)?.text);
        return Ok(());
    }
    let path = bake::write(&ctx, project, output)?;
    println!("✅ Baked to {}", path.display());
    Ok(())
}
