//! Tool dispatch
//!
//! Executes validated tool calls and produces observations keyed by
//! call id. Lookup failures, validation failures, and tool-body errors
//! all become error-marker observations; nothing here aborts the loop.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::ToolError;
use crate::observation::{Observation, ObservationMap};

use super::registry::ToolRegistry;
use super::validate::validate_arguments;
use super::{ToolCall, ToolContext};

/// Dispatcher for validated tool calls
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Execute a single call, folding any failure into an error-marker
    /// observation.
    #[instrument(skip(self, ctx), fields(tool = %call.name, call_id = call.id))]
    pub async fn dispatch(&self, call: &ToolCall, ctx: &ToolContext) -> Observation {
        match self.try_dispatch(call, ctx).await {
            Ok(value) => {
                info!(tool = %call.name, "Tool executed successfully");
                Observation::value(value)
            }
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool call failed");
                Observation::error(e.to_string())
            }
        }
    }

    /// Execute all calls sequentially, in extraction order, collecting
    /// observations keyed by call id. A duplicate id overwrites the
    /// earlier entry (last-write-wins).
    pub async fn dispatch_all(&self, calls: &[ToolCall], ctx: &ToolContext) -> ObservationMap {
        let mut observations = ObservationMap::new();
        for call in calls {
            let observation = self.dispatch(call, ctx).await;
            if observations.insert(call.id, observation).is_some() {
                warn!(call_id = call.id, "Duplicate call id in one turn, keeping the later result");
            }
        }
        observations
    }

    async fn try_dispatch(&self, call: &ToolCall, ctx: &ToolContext) -> Result<Value, ToolError> {
        // Unknown-tool is checked before argument validation.
        let tool = self
            .registry
            .get(&call.name)
            .ok_or_else(|| ToolError::UnknownTool(call.name.clone()))?;

        validate_arguments(&call.name, &tool.parameters_schema(), &call.arguments)?;

        debug!(tool = %call.name, "Executing tool");
        tool.execute(&Value::Object(call.arguments.clone()), ctx)
            .await
            .map_err(|e| ToolError::Execution {
                tool: call.name.clone(),
                message: format!("{e:#}"),
            })
    }
}

impl std::fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDispatcher")
            .field("registry", &self.registry)
            .finish()
    }
}
