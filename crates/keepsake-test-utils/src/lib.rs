//! Test helpers shared across keepsake crates.

pub mod context;
pub mod memory;
pub mod tools;

pub use context::base_tool_context;
pub use memory::StubMemoryStore;
pub use tools::{StubScheduleStore, StubWeatherProvider};
