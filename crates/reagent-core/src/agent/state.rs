//! Agent configuration and run state

use std::path::PathBuf;

use crate::history::ChatHistory;
use crate::parser::ParseWarning;

/// Default turn ceiling for a run
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Configuration for the agent loop
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model identifier passed to the client on every invocation
    pub model: String,
    /// System prompt instructions; the default is used when absent
    pub system_prompt: Option<String>,
    /// Maximum full model round-trips before the fallback invocation
    pub max_turns: usize,
    /// Working directory handed to tools
    pub working_dir: PathBuf,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "llama3.2".to_string(),
            system_prompt: None,
            max_turns: DEFAULT_MAX_TURNS,
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl AgentConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }
}

/// State accumulated over one agent run.
///
/// Owned exclusively by the loop while running, returned to the caller
/// on completion.
#[derive(Debug, Default)]
pub struct AgentState {
    /// Full role-tagged message log
    pub history: ChatHistory,
    /// Completed model round-trips (the fallback invocation does not
    /// count)
    pub turn: usize,
    /// Whether a terminal state was reached
    pub finished: bool,
    /// The returned text: a clean response region's content, or the
    /// best-effort final completion
    pub final_response: Option<String>,
    /// Parse warnings accumulated across all turns
    pub warnings: Vec<ParseWarning>,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_turn(&mut self) {
        self.turn += 1;
    }

    pub fn mark_finished(&mut self, response: String) {
        self.finished = true;
        self.final_response = Some(response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = AgentConfig::new("test-model")
            .with_system_prompt("You are helpful")
            .with_max_turns(3);

        assert_eq!(config.model, "test-model");
        assert_eq!(config.system_prompt, Some("You are helpful".to_string()));
        assert_eq!(config.max_turns, 3);
    }

    #[test]
    fn test_default_max_turns() {
        assert_eq!(AgentConfig::default().max_turns, DEFAULT_MAX_TURNS);
    }

    #[test]
    fn test_state_transitions() {
        let mut state = AgentState::new();
        assert_eq!(state.turn, 0);
        assert!(!state.finished);

        state.increment_turn();
        assert_eq!(state.turn, 1);

        state.mark_finished("Done".to_string());
        assert!(state.finished);
        assert_eq!(state.final_response, Some("Done".to_string()));
    }
}
