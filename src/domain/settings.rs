//! Display settings persisted alongside projects and templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Root font size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UiScale {
    #[default]
    Px8,
    Px11,
    Px14,
    Px16,
    Px18,
    Px19,
    Px20,
    Px22,
    Px24,
}

impl UiScale {
    pub const ALL: [UiScale; 9] = [
        UiScale::Px8,
        UiScale::Px11,
        UiScale::Px14,
        UiScale::Px16,
        UiScale::Px18,
        UiScale::Px19,
        UiScale::Px20,
        UiScale::Px22,
        UiScale::Px24,
    ];

    pub fn px(self) -> u8 {
        match self {
            UiScale::Px8 => 8,
            UiScale::Px11 => 11,
            UiScale::Px14 => 14,
            UiScale::Px16 => 16,
            UiScale::Px18 => 18,
            UiScale::Px19 => 19,
            UiScale::Px20 => 20,
            UiScale::Px22 => 22,
            UiScale::Px24 => 24,
        }
    }

    /// Scale relative to the 16px browser default, rounded to a whole percent.
    pub fn percent(self) -> u32 {
        (u32::from(self.px()) * 100 + 8) / 16
    }
}

impl TryFrom<u8> for UiScale {
    type Error = AppError;

    fn try_from(px: u8) -> Result<Self, Self::Error> {
        UiScale::ALL.into_iter().find(|s| s.px() == px).ok_or_else(|| {
            let allowed: Vec<String> = UiScale::ALL.iter().map(|s| s.px().to_string()).collect();
            AppError::InvalidSetting(format!(
                "ui scale {}px is not one of {}",
                px,
                allowed.join(", ")
            ))
        })
    }
}

impl From<UiScale> for u8 {
    fn from(scale: UiScale) -> Self {
        scale.px()
    }
}

/// Spacing and text size of rendered content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[serde(alias = "text-xs")]
    Compact,
    #[default]
    #[serde(alias = "text-sm")]
    Standard,
    #[serde(alias = "text-base")]
    Comfortable,
}

impl Density {
    pub fn as_str(self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Standard => "standard",
            Density::Comfortable => "comfortable",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text-xs" => Ok(Density::Compact),
            "standard" | "text-sm" => Ok(Density::Standard),
            "comfortable" | "text-base" => Ok(Density::Comfortable),
            other => Err(AppError::InvalidSetting(format!(
                "density '{}' must be compact, standard or comfortable",
                other
            ))),
        }
    }
}

/// Exclusive bounds for the sidebar width in pixels.
pub const SIDEBAR_WIDTH_RANGE: (u32, u32) = (180, 600);
/// Exclusive bounds for the right panel width in pixels.
pub const RIGHT_PANEL_WIDTH_RANGE: (u32, u32) = (250, 1000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub ui_scale: UiScale,
    #[serde(alias = "fontSize")]
    pub density: Density,
    pub sidebar_width: u32,
    #[serde(rename = "isSidebarOpen")]
    pub sidebar_open: bool,
    pub right_panel_width: u32,
    #[serde(rename = "isRightPanelOpen")]
    pub right_panel_open: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_scale: UiScale::default(),
            density: Density::default(),
            sidebar_width: 300,
            sidebar_open: true,
            right_panel_width: 400,
            right_panel_open: true,
        }
    }
}

/// One settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    UiScale(UiScale),
    Density(Density),
    SidebarWidth(u32),
    SidebarOpen(bool),
    RightPanelWidth(u32),
    RightPanelOpen(bool),
}

impl Settings {
    /// Apply `change`, rejecting widths outside their ranges.
    pub fn apply(&self, change: SettingsChange) -> Result<Self, AppError> {
        let mut next = self.clone();
        match change {
            SettingsChange::UiScale(scale) => next.ui_scale = scale,
            SettingsChange::Density(density) => next.density = density,
            SettingsChange::SidebarWidth(width) => {
                next.sidebar_width = check_width("sidebar", width, SIDEBAR_WIDTH_RANGE)?
            }
            SettingsChange::SidebarOpen(open) => next.sidebar_open = open,
            SettingsChange::RightPanelWidth(width) => {
                next.right_panel_width = check_width("right panel", width, RIGHT_PANEL_WIDTH_RANGE)?
            }
            SettingsChange::RightPanelOpen(open) => next.right_panel_open = open,
        }
        Ok(next)
    }
}

fn check_width(what: &str, width: u32, (min, max): (u32, u32)) -> Result<u32, AppError> {
    if width > min && width < max {
        Ok(width)
    } else {
        Err(AppError::InvalidSetting(format!(
            "{} width {} must be between {} and {} (exclusive)",
            what, width, min, max
        )))
    }
}
