//! Model invocation seam
//!
//! The engine treats the language model as an opaque, possibly remote,
//! text-in/text-out collaborator. Latency and retry policy belong to
//! the implementor, not the loop.

use anyhow::Result;
use async_trait::async_trait;

use crate::history::Message;

/// A client capable of producing one completion from the full chat
/// history.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Invoke the model with the ordered history and return the raw
    /// completion text.
    async fn invoke(&self, history: &[Message], model: &str) -> Result<String>;
}
