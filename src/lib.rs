//! splicer: local-first prompt templates with chained steps.
//!
//! Templates declare inputs and ordered steps; projects instantiate a template,
//! hold variable values, per-step overrides and outputs, and resolve every
//! placeholder into final prompt text.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use domain::{
    Action, AppConfig, AppError, AppState, Backup, Input, Project, ResolutionContext, Settings,
    Step, Template, resolve,
};
pub use ports::{Clock, StateStore};
pub use services::{FilesystemStateStore, SystemClock, builtin_templates};
