//! File read tool

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

use reagent_core::tools::{ParameterProperty, ParameterSchema, Tool, ToolContext};

/// Tool for reading file contents
pub struct FileReadTool;

#[async_trait]
impl Tool for FileReadTool {
    fn name(&self) -> &str {
        "file_read"
    }

    fn description(&self) -> &str {
        "Read the contents of a text file, with optional line offset and limit."
    }

    fn parameters_schema(&self) -> ParameterSchema {
        ParameterSchema::new()
            .with_required(
                "path",
                ParameterProperty::string("Path to the file (absolute or relative to the working directory)"),
            )
            .with_property(
                "offset",
                ParameterProperty::integer("Line number to start reading from (1-indexed)"),
            )
            .with_property(
                "limit",
                ParameterProperty::integer("Maximum number of lines to read"),
            )
    }

    async fn execute(&self, args: &Value, ctx: &ToolContext) -> Result<Value> {
        let path_str = args
            .get("path")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        let offset = args
            .get("offset")
            .and_then(|v| v.as_u64())
            .map(|v| v.saturating_sub(1) as usize)
            .unwrap_or(0);

        let limit = args.get("limit").and_then(|v| v.as_u64()).map(|v| v as usize);

        let path = if PathBuf::from(path_str).is_absolute() {
            PathBuf::from(path_str)
        } else {
            ctx.working_dir.join(path_str)
        };

        if !path.is_file() {
            bail!("not a readable file: {}", path.display());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;

        let total_lines = content.lines().count();
        let mut selected = content
            .lines()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .collect::<Vec<_>>()
            .join("\n");

        if selected.len() > ctx.max_output_len {
            let mut end = ctx.max_output_len;
            while !selected.is_char_boundary(end) {
                end -= 1;
            }
            selected.truncate(end);
            selected.push_str("\n[truncated]");
        }

        Ok(json!({
            "path": path.display().to_string(),
            "total_lines": total_lines,
            "content": selected,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ctx_for(dir: &std::path::Path) -> ToolContext {
        ToolContext::new(dir.to_path_buf())
    }

    #[tokio::test]
    async fn test_read_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "alpha\nbeta\ngamma").unwrap();

        let result = FileReadTool
            .execute(&json!({"path": "notes.txt"}), &ctx_for(dir.path()))
            .await
            .unwrap();

        assert_eq!(result["total_lines"], 3);
        assert_eq!(result["content"], "alpha\nbeta\ngamma");
    }

    #[tokio::test]
    async fn test_offset_and_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();

        let result = FileReadTool
            .execute(
                &json!({"path": "notes.txt", "offset": 2, "limit": 2}),
                &ctx_for(dir.path()),
            )
            .await
            .unwrap();

        assert_eq!(result["content"], "two\nthree");
    }

    #[tokio::test]
    async fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileReadTool
            .execute(&json!({"path": "absent.txt"}), &ctx_for(dir.path()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a readable file"));
    }
}
