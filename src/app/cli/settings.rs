use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::app::commands::settings;
use crate::domain::{AppError, Density, Settings, SettingsChange, UiScale};

#[derive(Subcommand)]
pub enum SettingsCommands {
    Show,
    /// Change one or more settings
    Set {
        /// Root font size in px: 8, 11, 14, 16, 18, 19, 20, 22 or 24
        #[arg(long)]
        ui_scale: Option<u8>,
        /// compact, standard or comfortable
        #[arg(long)]
        density: Option<Density>,
        #[arg(long)]
        sidebar_width: Option<u32>,
        #[arg(long)]
        sidebar_open: Option<bool>,
        #[arg(long)]
        right_panel_width: Option<u32>,
        #[arg(long)]
        right_panel_open: Option<bool>,
    },
}

pub fn run(data_dir: Option<PathBuf>, command: SettingsCommands) -> Result<(), AppError> {
    let ctx = api::context(data_dir)?;
    match command {
        SettingsCommands::Show => print_settings(&settings::show(&ctx)?),
        SettingsCommands::Set {
            ui_scale,
            density,
            sidebar_width,
            sidebar_open,
            right_panel_width,
            right_panel_open,
        } => {
            let mut changes = Vec::new();
            if let Some(px) = ui_scale {
                changes.push(SettingsChange::UiScale(UiScale::try_from(px)?));
            }
            changes.extend(density.map(SettingsChange::Density));
            changes.extend(sidebar_width.map(SettingsChange::SidebarWidth));
            changes.extend(sidebar_open.map(SettingsChange::SidebarOpen));
            changes.extend(right_panel_width.map(SettingsChange::RightPanelWidth));
            changes.extend(right_panel_open.map(SettingsChange::RightPanelOpen));
            if changes.is_empty() {
                return Err(AppError::InvalidSetting("no setting given".to_string()));
            }
            let updated = settings::update(&ctx, changes)?;
            println!("✅ Settings saved");
            print_settings(&updated);
        }
    }
    Ok(())
}

fn print_settings(s: &Settings) {
    println!("ui_scale = {}px ({}%)", s.ui_scale.px(), s.ui_scale.percent());
    println!("density = {}", s.density);
    println!("sidebar_width = {}", s.sidebar_width);
    println!("sidebar_open = {}", s.sidebar_open);
    println!("right_panel_width = {}", s.right_panel_width);
    println!("right_panel_open = {}", s.right_panel_open);
}
