//! System prompt rendering
//!
//! Renders the instructions, the registered tool signatures, and the
//! output framing convention the parser expects. The tag names here and
//! in `parser.rs` are the two ends of one wire contract.

use crate::tools::registry::ToolRegistry;

const DEFAULT_INSTRUCTIONS: &str =
    "You are an assistant that solves tasks step by step, using the available tools when they help.";

/// Build the system prompt that seeds every run.
///
/// When tools are registered, the prompt carries their rendered
/// signatures and the framing convention; with an empty registry only
/// the instructions are emitted.
pub fn build_system_prompt(instructions: Option<&str>, registry: &ToolRegistry) -> String {
    let mut prompt = String::new();
    prompt.push_str(instructions.unwrap_or(DEFAULT_INSTRUCTIONS));
    prompt.push_str("\n\n");

    if registry.is_empty() {
        return prompt;
    }

    prompt.push_str("## Available Tools\n");
    prompt.push_str(&format_tool_list(registry));
    prompt.push_str("\n\n");

    prompt.push_str(
        r#"## Output Format
On each turn, reason inside <thought>...</thought> tags. To invoke a tool, emit one
<tool_call>...</tool_call> block per call, each containing a JSON object:

<tool_call>{"name": "<tool name>", "arguments": {<parameter>: <value>}, "id": <integer>}</tool_call>

Assign each call a distinct integer id; results come back keyed by that id inside
<observation>...</observation> in the next user message. When the task is complete,
emit exactly one final answer inside <response>...</response> and nothing else."#,
    );

    prompt
}

/// Render each tool as name, description, and JSON signature.
fn format_tool_list(registry: &ToolRegistry) -> String {
    registry
        .all_tools()
        .iter()
        .map(|t| {
            let schema = serde_json::to_string(&t.parameters_schema())
                .unwrap_or_else(|_| "{}".to_string());
            format!("- {}: {}\n  parameters: {}", t.name(), t.description(), schema)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
