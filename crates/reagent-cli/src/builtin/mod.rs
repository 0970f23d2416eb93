//! Built-in tools for the agent runner

mod file_read;
mod glob_tool;
mod web_fetch;

pub use file_read::FileReadTool;
pub use glob_tool::GlobTool;
pub use web_fetch::WebFetchTool;

use anyhow::Result;
use reagent_core::tools::registry::ToolRegistry;

/// Create a registry with the default tool set
pub fn create_default_registry() -> Result<ToolRegistry> {
    let mut registry = ToolRegistry::new();

    registry.register(FileReadTool)?;
    registry.register(GlobTool)?;
    registry.register(WebFetchTool::new())?;

    Ok(registry)
}
