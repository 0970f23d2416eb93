//! reagent-core: ReAct-style agent execution engine
//!
//! Provides:
//! - Append-only chat history fed to the model each turn
//! - Tag-delimited response parsing (thought / tool_call / response)
//! - Tool registry, argument validation, and dispatch
//! - The bounded Thought -> Action -> Observation loop

pub mod agent;
pub mod error;
pub mod history;
pub mod model;
pub mod observation;
pub mod parser;
pub mod prompt;
pub mod tools;

pub use agent::{AgentConfig, AgentLoop, AgentState};
pub use error::{AgentError, ToolError};
pub use history::{ChatHistory, Message, Role};
pub use model::ModelClient;
pub use observation::{Observation, ObservationMap};
pub use parser::{ParseWarning, ParsedOutput, TagRegions};
pub use tools::dispatch::ToolDispatcher;
pub use tools::registry::ToolRegistry;
pub use tools::{ParameterProperty, ParameterSchema, Tool, ToolCall, ToolContext};
