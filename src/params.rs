//! Parameter builder
//!
//! Turns caller arguments into a [`WireRequest`] according to an operation's
//! field list. Fields are processed in declaration order, which keeps the
//! emitted query byte-identical for identical inputs:
//!
//! 1. unset optional fields are dropped entirely (never sent as null or "")
//! 2. unset defaulted fields are sent with their default
//! 3. booleans render as `true` / `false`
//! 4. enum values are checked against their allowed set
//! 5. lists are repeated or comma-joined as the field dictates
//! 6. values travel under the field's wire name
//!
//! Path placeholders are filled before the query is assembled, and are not
//! percent-encoded.

use serde_json::{json, Map, Number, Value};

use crate::tools::types::{Field, Kind, ListEncoding, LocalOp, Operation, Placement, Presence, Target};
use crate::transport::{Method, WireRequest};
use crate::{Error, Result};

/// Caller-supplied arguments, keyed by caller-facing field name
pub type Arguments = Map<String, Value>;

/// GraphQL endpoint path, relative to the adapter's base URL
pub const GRAPHQL_PATH: &str = "/graphql";

/// Outcome of building a call
#[derive(Debug, Clone, PartialEq)]
pub enum Prepared {
    /// Send this request
    Request(WireRequest),
    /// Compute locally from these normalized inputs
    Local(LocalOp, Map<String, Value>),
}

/// Validate `args` against `op` and build what the call needs
pub fn build(op: &Operation, args: &Arguments) -> Result<Prepared> {
    match op.target {
        Target::Rest { method, path } => build_rest(op, method, path, args).map(Prepared::Request),
        Target::GraphQl { document, fixed } => {
            build_graphql(op, document, fixed(), args).map(Prepared::Request)
        }
        Target::Local(local) => {
            let mut values = Map::new();
            for field in op.inputs {
                if let Some(value) = resolve(field, args)? {
                    values.insert(field.wire.to_string(), value);
                }
            }
            Ok(Prepared::Local(local, values))
        }
    }
}

/// Body of a GraphQL POST, with null variables dropped
pub fn graphql_request(document: &str, variables: Map<String, Value>) -> WireRequest {
    let variables: Map<String, Value> = variables
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .collect();
    WireRequest::post_json(
        GRAPHQL_PATH,
        json!({
            "query": document,
            "variables": variables
        }),
    )
}

fn build_rest(
    op: &Operation,
    method: Method,
    template: &str,
    args: &Arguments,
) -> Result<WireRequest> {
    let mut resolved = Vec::with_capacity(op.inputs.len());
    for field in op.inputs {
        if let Some(value) = resolve(field, args)? {
            resolved.push((field, value));
        }
    }

    let mut path = template.to_string();
    for (field, value) in resolved.iter().filter(|(f, _)| f.placement == Placement::Path) {
        let placeholder = format!("{{{}}}", field.wire);
        path = path.replace(&placeholder, &render_joined(value));
    }

    let mut query = Vec::new();
    for (field, value) in resolved.iter().filter(|(f, _)| f.placement == Placement::Query) {
        match (field.kind, value) {
            (Kind::StringList(ListEncoding::Repeated) | Kind::IntegerList, Value::Array(items)) => {
                for item in items {
                    query.push((field.wire.to_string(), render_scalar(item)));
                }
            }
            _ => query.push((field.wire.to_string(), render_joined(value))),
        }
    }

    Ok(WireRequest {
        method,
        path,
        query,
        body: None,
    })
}

fn build_graphql(
    op: &Operation,
    document: &str,
    mut variables: Map<String, Value>,
    args: &Arguments,
) -> Result<WireRequest> {
    for field in op.inputs {
        let Some(value) = resolve(field, args)? else {
            continue;
        };
        match field.placement {
            Placement::NestedVariable(parent) => {
                let slot = variables
                    .entry(parent.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(members) = slot {
                    members.insert(field.wire.to_string(), value);
                }
            }
            _ => {
                variables.insert(field.wire.to_string(), value);
            }
        }
    }
    Ok(graphql_request(document, variables))
}

/// Apply a field's presence rule, returning the normalized value to send
fn resolve(field: &Field, args: &Arguments) -> Result<Option<Value>> {
    let supplied = args.get(field.name).filter(|v| !v.is_null());
    match (supplied, field.presence) {
        (Some(raw), presence) => {
            let value = normalize(field, raw)?;
            if presence == Presence::OptionalNonEmpty && is_empty(&value) {
                Ok(None)
            } else {
                Ok(Some(value))
            }
        }
        (None, Presence::Required) => Err(Error::InvalidArgument(format!(
            "Missing required argument '{}'",
            field.name
        ))),
        (None, Presence::Default(default)) => Ok(Some(default.to_json())),
        (None, Presence::Optional | Presence::OptionalNonEmpty) => Ok(None),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(members) => members.is_empty(),
        _ => false,
    }
}

/// Check a raw argument against the field kind and coerce it to canonical JSON.
///
/// Coercion is lax in the usual places: integer-valued strings and floats for
/// integers, numeric strings for floats, "true"/"false" for booleans and a
/// bare string for a string list.
pub(crate) fn normalize(field: &Field, raw: &Value) -> Result<Value> {
    match field.kind {
        Kind::String => match raw {
            Value::String(_) => Ok(raw.clone()),
            _ => Err(invalid(field, "a string")),
        },
        Kind::Integer => to_integer(raw)
            .map(Value::from)
            .ok_or_else(|| invalid(field, "an integer")),
        Kind::Float => to_float(raw)
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| invalid(field, "a number")),
        Kind::Boolean => match raw {
            Value::Bool(_) => Ok(raw.clone()),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            _ => Err(invalid(field, "a boolean")),
        },
        Kind::Enum(allowed) => match raw.as_str() {
            Some(s) if allowed.contains(&s) => Ok(raw.clone()),
            _ => {
                let choices: Vec<String> = allowed.iter().map(|a| format!("'{}'", a)).collect();
                Err(Error::InvalidArgument(format!(
                    "Invalid value {} for '{}': must be one of {}",
                    raw,
                    field.name,
                    choices.join(", ")
                )))
            }
        },
        Kind::StringList(_) => match raw {
            Value::String(s) => Ok(json!([s])),
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(raw.clone()),
            _ => Err(invalid(field, "a list of strings")),
        },
        Kind::IntegerList => match raw {
            Value::Array(items) => items
                .iter()
                .map(|item| to_integer(item).map(Value::from))
                .collect::<Option<Vec<_>>>()
                .map(Value::Array)
                .ok_or_else(|| invalid(field, "a list of integers")),
            _ => Err(invalid(field, "a list of integers")),
        },
        Kind::Object => match raw {
            Value::Object(_) => Ok(raw.clone()),
            _ => Err(invalid(field, "an object")),
        },
    }
}

fn invalid(field: &Field, expected: &str) -> Error {
    Error::InvalidArgument(format!(
        "Invalid value for '{}': expected {}",
        field.name, expected
    ))
}

fn to_integer(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_float(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Text form of a single value on the wire
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        other => other.to_string(),
    }
}

/// Text form of a value, comma-joining lists
fn render_joined(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(","),
        other => render_scalar(other),
    }
}
