//! The agent loop state machine
//!
//! Drives AwaitingModel -> Parsing -> {DispatchingTools -> AwaitingModel}
//! | Terminated. Each turn is one full model round-trip plus the
//! dispatch of whatever tool calls it produced; the loop is synchronous
//! per turn and bounded by `max_turns`, after which one unconditional
//! fallback invocation returns whatever text comes back.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::AgentError;
use crate::history::Message;
use crate::model::ModelClient;
use crate::observation::render_observations;
use crate::parser::parse_completion;
use crate::prompt::build_system_prompt;
use crate::tools::dispatch::ToolDispatcher;
use crate::tools::registry::ToolRegistry;
use crate::tools::{ToolCall, ToolContext};

use super::state::{AgentConfig, AgentState};

/// Loop states. `Parsing` and `DispatchingTools` carry the data the
/// transition consumes, so every step is a plain move through the
/// machine.
enum LoopState {
    AwaitingModel,
    Parsing { completion: String },
    DispatchingTools { calls: Vec<ToolCall> },
    Terminated { response: String },
}

/// The agent loop orchestrator.
///
/// Owns the run's chat history and per-turn observation map; the tool
/// registry is shared read-only across turns.
pub struct AgentLoop {
    client: Arc<dyn ModelClient>,
    registry: Arc<ToolRegistry>,
    dispatcher: ToolDispatcher,
    config: AgentConfig,
}

impl AgentLoop {
    pub fn new(client: Arc<dyn ModelClient>, registry: ToolRegistry, config: AgentConfig) -> Self {
        let registry = Arc::new(registry);
        let dispatcher = ToolDispatcher::new(Arc::clone(&registry));
        Self {
            client,
            registry,
            dispatcher,
            config,
        }
    }

    /// Run the agent on a task until a response region, the turn
    /// ceiling, or a fatal model failure.
    ///
    /// Tool-level failures never abort the run: they become error
    /// observations the model sees on its next turn. Only a failed
    /// model invocation surfaces as `AgentError::Model`.
    #[instrument(skip(self, task), fields(model = %self.config.model, max_turns = self.config.max_turns))]
    pub async fn run(&self, task: &str) -> Result<AgentState, AgentError> {
        info!(task_len = task.len(), tools = self.registry.len(), "Starting agent run");
        let mut state = AgentState::new();

        let system = build_system_prompt(self.config.system_prompt.as_deref(), &self.registry);
        state.history.push(Message::system(system));
        state.history.push(Message::user(task));

        // With no tools registered there is nothing to cycle over:
        // exactly one invocation, raw text returned.
        if self.registry.is_empty() {
            debug!("No tools registered, single model invocation");
            let completion = self.invoke_model(&state).await?;
            state.history.push(Message::assistant(completion.clone()));
            state.increment_turn();
            state.mark_finished(completion);
            return Ok(state);
        }

        let tool_ctx = ToolContext::new(self.config.working_dir.clone());
        let mut current = LoopState::AwaitingModel;

        loop {
            current = match current {
                LoopState::AwaitingModel => {
                    if state.turn >= self.config.max_turns {
                        // Designed fallback, not a failure: one final
                        // unconditional invocation, returned raw.
                        warn!(turns = state.turn, "Turn limit reached, final fallback invocation");
                        let completion = self.invoke_model(&state).await?;
                        state.history.push(Message::assistant(completion.clone()));
                        LoopState::Terminated {
                            response: completion,
                        }
                    } else {
                        state.increment_turn();
                        debug!(turn = state.turn, messages = state.history.len(), "Invoking model");
                        let completion = self.invoke_model(&state).await?;
                        state.history.push(Message::assistant(completion.clone()));
                        LoopState::Parsing { completion }
                    }
                }

                LoopState::Parsing { completion } => {
                    let parsed = parse_completion(&completion);
                    state.warnings.extend(parsed.warnings.iter().cloned());

                    // A response region ends the run even when tool
                    // calls appear in the same completion.
                    if let Some(response) = parsed.response {
                        info!(turn = state.turn, "Response region found");
                        LoopState::Terminated { response }
                    } else {
                        LoopState::DispatchingTools {
                            calls: parsed.tool_calls,
                        }
                    }
                }

                LoopState::DispatchingTools { calls } => {
                    debug!(count = calls.len(), "Dispatching tool calls");
                    let observations = self.dispatcher.dispatch_all(&calls, &tool_ctx).await;
                    // One user entry per turn, even when the map is
                    // empty, so the history keeps its
                    // [assistant, observations] alternation.
                    state
                        .history
                        .push(Message::user(render_observations(&observations)));
                    LoopState::AwaitingModel
                }

                LoopState::Terminated { response } => {
                    state.mark_finished(response);
                    break;
                }
            };
        }

        info!(
            turns = state.turn,
            messages = state.history.len(),
            warnings = state.warnings.len(),
            "Agent run completed"
        );
        Ok(state)
    }

    async fn invoke_model(&self, state: &AgentState) -> Result<String, AgentError> {
        self.client
            .invoke(state.history.messages(), &self.config.model)
            .await
            .map_err(AgentError::Model)
    }
}
