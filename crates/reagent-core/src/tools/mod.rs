//! Tool framework: trait, signatures, and call shapes

pub mod dispatch;
pub mod registry;
pub mod validate;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Schema for a single tool parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterProperty {
    /// Parameter type (string, number, integer, boolean, array, object)
    #[serde(rename = "type")]
    pub param_type: String,
    /// Parameter description
    pub description: String,
}

impl ParameterProperty {
    pub fn new(param_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            param_type: param_type.into(),
            description: description.into(),
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new("string", description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new("number", description)
    }

    pub fn integer(description: impl Into<String>) -> Self {
        Self::new("integer", description)
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self::new("boolean", description)
    }

    pub fn array(description: impl Into<String>) -> Self {
        Self::new("array", description)
    }

    pub fn object(description: impl Into<String>) -> Self {
        Self::new("object", description)
    }
}

/// Schema describing a tool's parameters.
///
/// Enumerates parameter names and types; the validator checks calls
/// against it before dispatch, and the prompt renderer serializes it
/// into the system prompt. Properties are kept ordered so the rendered
/// signature is stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSchema {
    pub properties: BTreeMap<String, ParameterProperty>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl ParameterSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: impl Into<String>, prop: ParameterProperty) -> Self {
        self.properties.insert(name.into(), prop);
        self
    }

    pub fn with_required(mut self, name: impl Into<String>, prop: ParameterProperty) -> Self {
        let name = name.into();
        self.properties.insert(name.clone(), prop);
        self.required.push(name);
        self
    }
}

/// A structured tool call extracted from model output.
///
/// The id is assigned by the model and keys the observation produced
/// for this call. Each call is consumed exactly once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Context handed to tools during execution
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Working directory for filesystem-touching tools
    pub working_dir: PathBuf,
    /// Maximum output length before truncation
    pub max_output_len: usize,
}

impl Default for ToolContext {
    fn default() -> Self {
        Self {
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            max_output_len: 50_000,
        }
    }
}

impl ToolContext {
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            ..Default::default()
        }
    }

    pub fn with_max_output_len(mut self, len: usize) -> Self {
        self.max_output_len = len;
        self
    }
}

/// The Tool trait that all tools must implement.
///
/// Tools are registered once at agent construction and shared read-only
/// across turns. Execution may perform arbitrary external I/O; the
/// dispatcher catches failures, it does not sandbox them.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name, unique within a registry
    fn name(&self) -> &str;

    /// What the tool does, rendered into the system prompt
    fn description(&self) -> &str;

    /// Declared parameter signature
    fn parameters_schema(&self) -> ParameterSchema;

    /// Execute with validated arguments, returning a JSON value
    async fn execute(&self, args: &Value, ctx: &ToolContext) -> Result<Value>;
}
