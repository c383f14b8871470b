use crate::domain::{Action, AppConfig, AppError, AppState};
use crate::ports::{Clock, StateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: StateStore, C: Clock> {
    store: S,
    clock: C,
    config: AppConfig,
}

impl<S: StateStore, C: Clock> AppContext<S, C> {
    pub fn new(store: S, clock: C, config: AppConfig) -> Self {
        Self { store, clock, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current state as stored.
    pub fn state(&self) -> Result<AppState, AppError> {
        self.store.load_state()
    }

    /// Load, apply `action` at the current time, persist what changed, and
    /// return the new state.
    pub fn dispatch(&self, action: Action) -> Result<AppState, AppError> {
        let before = self.store.load_state()?;
        let after = before.apply(action, self.clock.now_millis())?;
        self.store.save_changes(&before, &after)?;
        Ok(after)
    }
}
