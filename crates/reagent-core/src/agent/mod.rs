//! Agent loop: the bounded Thought -> Action -> Observation cycle

mod agent_loop;
mod state;

pub use agent_loop::AgentLoop;
pub use state::{AgentConfig, AgentState};
