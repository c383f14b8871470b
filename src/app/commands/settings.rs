use crate::app::AppContext;
use crate::domain::{Action, AppError, Settings, SettingsChange};
use crate::ports::{Clock, StateStore};

pub fn show<S: StateStore, C: Clock>(ctx: &AppContext<S, C>) -> Result<Settings, AppError> {
    ctx.store().load_settings()
}

/// Apply each change in order. Nothing is saved if any of them is rejected.
pub fn update<S: StateStore, C: Clock>(
    ctx: &AppContext<S, C>,
    changes: Vec<SettingsChange>,
) -> Result<Settings, AppError> {
    let before = ctx.state()?;
    let mut after = before.clone();
    for change in changes {
        after = after.apply(Action::UpdateSettings(change), ctx.clock().now_millis())?;
    }
    ctx.store().save_changes(&before, &after)?;
    Ok(after.settings)
}
