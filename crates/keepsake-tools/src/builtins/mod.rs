//! Built-in tools bundled with keepsake.

mod schedule;
mod utils;
mod weather;

use crate::ToolRegistry;
use log::info;
use std::sync::Arc;

pub use schedule::ScheduleTool;
pub use weather::WeatherTool;

/// Register all built-in tools with the provided registry.
pub fn register_builtin_tools(registry: &ToolRegistry) {
    registry.register(Arc::new(WeatherTool));
    registry.register(Arc::new(ScheduleTool));
    info!("registered built-in tools");
}

/// Build a registry pre-populated with built-in tools.
pub fn builtin_tool_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    register_builtin_tools(&registry);
    registry
}
