//! Tool argument validation: JSON Schema checks plus typed accessors.

use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Compiles a tool's input schema.
pub fn compile_schema(tool: &'static str, schema: &Value) -> Result<Validator, ToolError> {
    jsonschema::draft202012::new(schema).map_err(|e| ToolError::InvalidSchema {
        tool,
        reason: e.to_string(),
    })
}

/// Checks `args` against a compiled schema. A missing argument object is
/// treated as `{}`.
pub fn validate_arguments<'a>(
    validator: &Validator,
    args: &'a Value,
) -> Result<Arguments<'a>, ToolError> {
    static EMPTY: OnceLock<Value> = OnceLock::new();

    let args = if args.is_null() {
        EMPTY.get_or_init(|| Value::Object(Map::new()))
    } else {
        args
    };
    let Value::Object(map) = args else {
        return Err(ToolError::InvalidInput(format!(
            "arguments must be an object, got {}",
            json_type(args)
        )));
    };
    validator
        .validate(args)
        .map_err(|e| ToolError::InvalidInput(e.to_string()))?;
    Ok(Arguments(map))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validated tool arguments.
///
/// Accessors report a missing or mistyped value as `InvalidInput`; `null`
/// counts as absent for the optional ones.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a>(&'a Map<String, Value>);

impl<'a> Arguments<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self(map)
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str, ToolError> {
        self.optional_str(key)?
            .ok_or_else(|| ToolError::InvalidInput(format!("missing required parameter: {}", key)))
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>, ToolError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(mistyped(key, "string", other)),
        }
    }

    pub fn optional_int(&self, key: &str) -> Result<Option<i64>, ToolError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => as_integer(v).map(Some).ok_or_else(|| mistyped(key, "integer", v)),
        }
    }

    /// A required integer that must be at least 1.
    pub fn positive_int(&self, key: &str) -> Result<i64, ToolError> {
        let value = self
            .optional_int(key)?
            .ok_or_else(|| ToolError::InvalidInput(format!("missing required parameter: {}", key)))?;
        if value < 1 {
            return Err(ToolError::InvalidInput(format!(
                "{} must be a positive integer, got {}",
                key, value
            )));
        }
        Ok(value)
    }

    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, ToolError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(mistyped(key, "boolean", other)),
        }
    }
}

/// Accepts integral floats such as `5.0`, which JSON Schema counts as integers.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn mistyped(key: &str, expected: &str, actual: &Value) -> ToolError {
    ToolError::InvalidInput(format!(
        "{} must be a {}, got {}",
        key,
        expected,
        json_type(actual)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "account_id": { "type": "string" },
                "limit": { "type": "integer", "minimum": 1, "maximum": 100 }
            },
            "required": ["account_id"]
        })
    }

    #[test]
    fn valid_arguments_pass() {
        let validator = compile_schema("t", &schema()).unwrap();
        let args = json!({"account_id": "acc_1", "limit": 10});
        let parsed = validate_arguments(&validator, &args).unwrap();
        assert_eq!(parsed.required_str("account_id").unwrap(), "acc_1");
        assert_eq!(parsed.optional_int("limit").unwrap(), Some(10));
    }

    #[test]
    fn missing_required_is_rejected() {
        let validator = compile_schema("t", &schema()).unwrap();
        let err = validate_arguments(&validator, &json!({})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
        assert!(err.to_string().contains("account_id"));
    }

    #[test]
    fn null_arguments_are_treated_as_empty() {
        let validator = compile_schema("t", &json!({"type": "object", "properties": {}})).unwrap();
        let args = Value::Null;
        assert!(validate_arguments(&validator, &args).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let validator = compile_schema("t", &schema()).unwrap();
        let args = json!({"account_id": "acc_1", "limit": 101});
        assert!(validate_arguments(&validator, &args).is_err());
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let validator = compile_schema("t", &schema()).unwrap();
        let err = validate_arguments(&validator, &json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: arguments must be an object, got array");
    }

    #[test]
    fn accessors_treat_null_as_absent() {
        let map = json!({"since": null, "flag": null});
        let args = Arguments::new(map.as_object().unwrap());
        assert_eq!(args.optional_str("since").unwrap(), None);
        assert_eq!(args.optional_bool("flag").unwrap(), None);
        assert!(args.required_str("since").is_err());
    }

    #[test]
    fn positive_int_accepts_integral_float() {
        let map = json!({"amount": 1000.0});
        let args = Arguments::new(map.as_object().unwrap());
        assert_eq!(args.positive_int("amount").unwrap(), 1000);
    }

    #[test]
    fn positive_int_rejects_zero_and_fractions() {
        let zero = json!({"amount": 0});
        assert!(Arguments::new(zero.as_object().unwrap()).positive_int("amount").is_err());
        let frac = json!({"amount": 1.5});
        assert!(Arguments::new(frac.as_object().unwrap()).positive_int("amount").is_err());
    }

    #[test]
    fn mistyped_value_is_reported() {
        let map = json!({"expand_merchant": "yes"});
        let err = Arguments::new(map.as_object().unwrap())
            .optional_bool("expand_merchant")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: expand_merchant must be a boolean, got string"
        );
    }
}
