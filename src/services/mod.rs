mod builtin_templates;
mod filesystem_store;
mod system_clock;

pub use builtin_templates::builtin_templates;
pub use filesystem_store::{FilesystemStateStore, PROJECTS_FILE, SETTINGS_FILE, TEMPLATES_FILE};
pub use system_clock::SystemClock;
