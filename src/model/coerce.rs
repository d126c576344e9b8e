//! Ansible-style argument checking: unsupported keys, type coercion, required keys, choices.

use serde_json::{Map, Value};

use super::params::MODULE_NAME;
use crate::error::ModuleError;

#[derive(Clone, Copy, Debug)]
pub(super) enum ParamKind {
    Str,
    Bool,
    Choice(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub(super) struct ParamSpec {
    pub(super) name: &'static str,
    pub(super) kind: ParamKind,
    pub(super) required: bool,
}

/// Checks `args` against `schema` and returns the coerced parameters.
///
/// `_ansible_*` control keys are skipped and `null` counts as absent, so the
/// returned map only holds schema keys with values of the declared kind.
pub(super) fn coerce_args(
    args: &Map<String, Value>,
    schema: &[ParamSpec],
) -> Result<Map<String, Value>, ModuleError> {
    let mut unsupported: Vec<&str> = args
        .keys()
        .map(String::as_str)
        .filter(|k| !k.starts_with("_ansible_"))
        .filter(|k| !schema.iter().any(|p| p.name == *k))
        .collect();
    if !unsupported.is_empty() {
        unsupported.sort_unstable();
        let mut supported: Vec<&str> = schema.iter().map(|p| p.name).collect();
        supported.sort_unstable();
        return Err(ModuleError::InvalidArguments(format!(
            "Unsupported parameters for ({}) module: {}. Supported parameters include: {}.",
            MODULE_NAME,
            unsupported.join(", "),
            supported.join(", ")
        )));
    }

    let mut out = Map::new();
    let mut missing = Vec::new();
    for spec in schema {
        match args.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    missing.push(spec.name);
                }
            }
            Some(value) => {
                out.insert(spec.name.to_string(), coerce_value(spec, value)?);
            }
        }
    }

    if !missing.is_empty() {
        return Err(ModuleError::InvalidArguments(format!(
            "missing required arguments: {}",
            missing.join(", ")
        )));
    }

    Ok(out)
}

fn coerce_value(spec: &ParamSpec, value: &Value) -> Result<Value, ModuleError> {
    match spec.kind {
        ParamKind::Str => to_text(spec.name, value).map(Value::String),
        ParamKind::Bool => to_bool(spec.name, value).map(Value::Bool),
        ParamKind::Choice(choices) => {
            let text = to_text(spec.name, value)?;
            if choices.contains(&text.as_str()) {
                Ok(Value::String(text))
            } else {
                Err(ModuleError::InvalidArguments(format!(
                    "value of {} must be one of: {}, got: {}",
                    spec.name,
                    choices.join(", "),
                    text
                )))
            }
        }
    }
}

fn to_text(name: &str, value: &Value) -> Result<String, ModuleError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        // Matches the text Python gives a boolean.
        Value::Bool(b) => Ok(if *b { "True" } else { "False" }.to_string()),
        other => Err(ModuleError::InvalidArguments(format!(
            "argument '{}' is of type {} and we were unable to convert to str",
            name,
            type_name(other)
        ))),
    }
}

fn to_bool(name: &str, value: &Value) -> Result<bool, ModuleError> {
    let text = match value {
        Value::Bool(b) => return Ok(*b),
        Value::String(s) => s.trim().to_ascii_lowercase(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(ModuleError::InvalidArguments(format!(
                "argument '{}' is of type {} and we were unable to convert to bool",
                name,
                type_name(other)
            )));
        }
    };

    match text.as_str() {
        "yes" | "y" | "true" | "t" | "on" | "1" => Ok(true),
        "no" | "n" | "false" | "f" | "off" | "0" => Ok(false),
        _ => Err(ModuleError::InvalidArguments(format!(
            "argument '{}' is of type str and we were unable to convert to bool: \
             The value '{}' is not a valid boolean",
            name, text
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
