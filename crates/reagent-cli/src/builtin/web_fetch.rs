//! Web fetch tool

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use reagent_core::tools::{ParameterProperty, ParameterSchema, Tool, ToolContext};

/// Tool for fetching a URL and returning its body text
pub struct WebFetchTool {
    client: reqwest::Client,
}

impl WebFetchTool {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

impl Default for WebFetchTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WebFetchTool {
    fn name(&self) -> &str {
        "web_fetch"
    }

    fn description(&self) -> &str {
        "Fetch a URL with HTTP GET and return the response body as text."
    }

    fn parameters_schema(&self) -> ParameterSchema {
        ParameterSchema::new().with_required(
            "url",
            ParameterProperty::string("The http or https URL to fetch"),
        )
    }

    async fn execute(&self, args: &Value, ctx: &ToolContext) -> Result<Value> {
        let url = args.get("url").and_then(|v| v.as_str()).unwrap_or_default();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!("only http and https URLs are supported: {url}");
        }

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?;

        let status = resp.status().as_u16();
        let mut body = resp
            .text()
            .await
            .with_context(|| format!("failed to read body from {url}"))?;

        if body.len() > ctx.max_output_len {
            let mut end = ctx.max_output_len;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
            body.push_str("\n[truncated]");
        }

        Ok(json!({
            "status": status,
            "body": body,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_http_schemes() {
        let err = WebFetchTool::new()
            .execute(
                &json!({"url": "file:///etc/passwd"}),
                &ToolContext::default(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("only http and https"));
    }
}
