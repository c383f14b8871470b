mod clock;
mod state_store;

pub use clock::Clock;
pub use state_store::StateStore;
