//! Glob pattern matching tool

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use reagent_core::tools::{ParameterProperty, ParameterSchema, Tool, ToolContext};

const MAX_MATCHES: usize = 200;

/// Tool for finding files by glob pattern under the working directory
pub struct GlobTool;

#[async_trait]
impl Tool for GlobTool {
    fn name(&self) -> &str {
        "glob"
    }

    fn description(&self) -> &str {
        "Find files matching a glob pattern, relative to the working directory."
    }

    fn parameters_schema(&self) -> ParameterSchema {
        ParameterSchema::new().with_required(
            "pattern",
            ParameterProperty::string("Glob pattern, e.g. src/**/*.rs"),
        )
    }

    async fn execute(&self, args: &Value, ctx: &ToolContext) -> Result<Value> {
        let pattern = args
            .get("pattern")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        let full_pattern = ctx.working_dir.join(pattern);
        let full_pattern = full_pattern.to_string_lossy();

        let paths = glob::glob(&full_pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?;

        let mut matches = Vec::new();
        let mut truncated = false;
        for entry in paths {
            let path = entry.context("failed to read directory entry")?;
            if matches.len() >= MAX_MATCHES {
                truncated = true;
                break;
            }
            let display = path
                .strip_prefix(&ctx.working_dir)
                .unwrap_or(&path)
                .display()
                .to_string();
            matches.push(Value::String(display));
        }

        Ok(json!({
            "matches": matches,
            "truncated": truncated,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_glob_matches_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.rs"), "").unwrap();
        fs::write(dir.path().join("src/b.rs"), "").unwrap();
        fs::write(dir.path().join("src/c.txt"), "").unwrap();

        let result = GlobTool
            .execute(
                &json!({"pattern": "src/*.rs"}),
                &ToolContext::new(dir.path().to_path_buf()),
            )
            .await
            .unwrap();

        let matches = result["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(result["truncated"], false);
    }

    #[tokio::test]
    async fn test_glob_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let result = GlobTool
            .execute(
                &json!({"pattern": "*.nothing"}),
                &ToolContext::new(dir.path().to_path_buf()),
            )
            .await
            .unwrap();
        assert!(result["matches"].as_array().unwrap().is_empty());
    }
}
