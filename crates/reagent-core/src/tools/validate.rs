//! Pre-dispatch argument validation
//!
//! Pure and side-effect free: a call is checked against its tool's
//! declared signature strictly before execution.

use serde_json::{Map, Value};

use crate::error::ToolError;

use super::ParameterSchema;

/// Validate a call's arguments against the tool's declared schema.
///
/// Every required parameter must be present, every supplied parameter
/// must be declared, and each value's JSON type must match the declared
/// type. The first violation is reported with the offending parameter
/// name.
pub fn validate_arguments(
    tool: &str,
    schema: &ParameterSchema,
    args: &Map<String, Value>,
) -> Result<(), ToolError> {
    for required in &schema.required {
        if !args.contains_key(required) {
            return Err(ToolError::InvalidArguments {
                tool: tool.to_string(),
                parameter: required.clone(),
                reason: "is required but missing".to_string(),
            });
        }
    }

    for (name, value) in args {
        let prop = schema.properties.get(name).ok_or_else(|| ToolError::InvalidArguments {
            tool: tool.to_string(),
            parameter: name.clone(),
            reason: "is not declared in the tool signature".to_string(),
        })?;

        if !matches_type(&prop.param_type, value) {
            return Err(ToolError::InvalidArguments {
                tool: tool.to_string(),
                parameter: name.clone(),
                reason: format!(
                    "expected {}, got {}",
                    prop.param_type,
                    json_type_name(value)
                ),
            });
        }
    }

    Ok(())
}

/// Whether a JSON value satisfies a declared parameter type.
///
/// `number` accepts both integers and floats; `integer` accepts only
/// integers.
fn matches_type(declared: &str, value: &Value) -> bool {
    match declared {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        // Unknown declared type: accept anything rather than reject
        // calls over a schema authoring mistake.
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ParameterProperty;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn schema() -> ParameterSchema {
        ParameterSchema::new()
            .with_required("path", ParameterProperty::string("file path"))
            .with_property("limit", ParameterProperty::integer("max lines"))
            .with_property("ratio", ParameterProperty::number("scale factor"))
    }

    #[test]
    fn test_valid_arguments_pass() {
        let result = validate_arguments(
            "file_read",
            &schema(),
            &args(json!({"path": "a.txt", "limit": 10})),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_required_parameter() {
        let err =
            validate_arguments("file_read", &schema(), &args(json!({"limit": 10}))).unwrap_err();
        match err {
            ToolError::InvalidArguments { parameter, .. } => assert_eq!(parameter, "path"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undeclared_parameter_rejected() {
        let err = validate_arguments(
            "file_read",
            &schema(),
            &args(json!({"path": "a.txt", "mode": "fast"})),
        )
        .unwrap_err();
        match err {
            ToolError::InvalidArguments { parameter, .. } => assert_eq!(parameter, "mode"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let err = validate_arguments(
            "file_read",
            &schema(),
            &args(json!({"path": 42})),
        )
        .unwrap_err();
        match err {
            ToolError::InvalidArguments { parameter, reason, .. } => {
                assert_eq!(parameter, "path");
                assert!(reason.contains("expected string"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_number_accepts_integer_and_float() {
        assert!(validate_arguments(
            "file_read",
            &schema(),
            &args(json!({"path": "a", "ratio": 2}))
        )
        .is_ok());
        assert!(validate_arguments(
            "file_read",
            &schema(),
            &args(json!({"path": "a", "ratio": 2.5}))
        )
        .is_ok());
    }

    #[test]
    fn test_integer_rejects_float() {
        let err = validate_arguments(
            "file_read",
            &schema(),
            &args(json!({"path": "a", "limit": 2.5})),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { parameter, .. } if parameter == "limit"));
    }

    #[test]
    fn test_empty_schema_accepts_empty_arguments() {
        assert!(validate_arguments("noop", &ParameterSchema::new(), &Map::new()).is_ok());
    }
}
