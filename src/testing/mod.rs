mod fixed_clock;
mod memory_store;

#[allow(unused_imports)]
pub use fixed_clock::FixedClock;
#[allow(unused_imports)]
pub use memory_store::MemoryStateStore;
