//! Tag-delimited response parsing
//!
//! Model completions frame their structured regions with
//! `<thought>...</thought>`, `<tool_call>...</tool_call>`, and
//! `<response>...</response>` tags. Regions may repeat or be absent;
//! nothing here assumes well-formedness. A tool-call region that does
//! not decode as `{name, arguments, id}` is skipped and surfaced as a
//! warning so the remaining regions still parse.
//!
//! The framing convention is a wire contract with the system prompt
//! rendered in `prompt.rs`; the two change together.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::tools::ToolCall;

pub const THOUGHT_TAG: &str = "thought";
pub const TOOL_CALL_TAG: &str = "tool_call";
pub const RESPONSE_TAG: &str = "response";

static THOUGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<thought>(.*?)</thought>").expect("valid thought pattern"));
static TOOL_CALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<tool_call>(.*?)</tool_call>").expect("valid tool_call pattern"));
static RESPONSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<response>(.*?)</response>").expect("valid response pattern"));

/// Extraction result for one tag kind: whether any region was found and
/// the trimmed contents in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagRegions {
    pub found: bool,
    pub contents: Vec<String>,
}

/// A malformed region that was dropped rather than aborting extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// The offending region content (truncated for logging)
    pub snippet: String,
    /// Why it was dropped
    pub reason: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.reason, self.snippet)
    }
}

/// Structured regions extracted from one raw model completion.
#[derive(Debug, Clone, Default)]
pub struct ParsedOutput {
    /// Free-text reasoning spans
    pub thoughts: TagRegions,
    /// Raw tool-call region contents, before JSON decoding
    pub raw_tool_calls: TagRegions,
    /// Tool calls that decoded successfully, in order of appearance
    pub tool_calls: Vec<ToolCall>,
    /// Final response, if present. Its presence terminates the loop
    /// regardless of co-present tool calls.
    pub response: Option<String>,
    /// Regions dropped during extraction
    pub warnings: Vec<ParseWarning>,
}

impl ParsedOutput {
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }
}

fn extract_regions(re: &Regex, text: &str) -> TagRegions {
    let contents: Vec<String> = re
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    TagRegions {
        found: !contents.is_empty(),
        contents,
    }
}

fn truncate_snippet(region: &str) -> String {
    const MAX: usize = 120;
    if region.len() > MAX {
        let mut end = MAX;
        while !region.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &region[..end])
    } else {
        region.to_string()
    }
}

/// Parse one raw completion into its structured regions.
pub fn parse_completion(text: &str) -> ParsedOutput {
    let thoughts = extract_regions(&THOUGHT_RE, text);
    let raw_tool_calls = extract_regions(&TOOL_CALL_RE, text);
    let responses = extract_regions(&RESPONSE_RE, text);

    let mut warnings = Vec::new();
    let mut tool_calls = Vec::new();

    for region in &raw_tool_calls.contents {
        match serde_json::from_str::<ToolCall>(region) {
            Ok(call) => tool_calls.push(call),
            Err(e) => {
                warn!(error = %e, "Dropping malformed tool_call region");
                warnings.push(ParseWarning {
                    snippet: truncate_snippet(region),
                    reason: format!("malformed tool_call region: {e}"),
                });
            }
        }
    }

    // A single response span is expected; if the model emitted more,
    // the first wins.
    let mut responses_iter = responses.contents.into_iter();
    let response = responses_iter.next();
    for extra in responses_iter {
        warnings.push(ParseWarning {
            snippet: truncate_snippet(&extra),
            reason: "extra response region ignored".to_string(),
        });
    }

    debug!(
        thoughts = thoughts.contents.len(),
        tool_calls = tool_calls.len(),
        has_response = response.is_some(),
        warnings = warnings.len(),
        "Parsed completion"
    );

    ParsedOutput {
        thoughts,
        raw_tool_calls,
        tool_calls,
        response,
        warnings,
    }
}
