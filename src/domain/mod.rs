pub mod backup;
pub mod bake;
pub mod config;
pub mod error;
pub mod ids;
pub mod library;
pub mod project;
pub mod resolver;
pub mod settings;
pub mod state;
pub mod step_chain;
pub mod template;
pub mod variables;

pub use backup::Backup;
pub use config::{AppConfig, ExportConfig, StorageConfig};
pub use error::AppError;
pub use ids::Timestamp;
pub use library::{ProjectGroup, SortKey};
pub use project::{Project, StepOverride};
pub use resolver::{Binding, ResolutionContext, resolve};
pub use settings::{Density, Settings, SettingsChange, UiScale};
pub use state::{Action, AppState};
pub use step_chain::RenderedStep;
pub use template::{Input, InputPatch, Step, StepPatch, Template};
pub use variables::{LocalVariableOutcome, VariableScope, VariableTable};
