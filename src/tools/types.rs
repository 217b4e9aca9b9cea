//! Operation descriptors.
//!
//! Every tool an adapter exposes is a static [`Operation`]: a name, a
//! one-line description, an ordered field list and a target. Fields carry
//! all of their wire behaviour as data (wire name, kind, presence rule and
//! placement) so a single builder can turn any call into a request.

use serde_json::{json, Map, Value};

use crate::transport::Method;

/// How a list-typed field is put on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEncoding {
    /// One query pair per element (`chains=a&chains=b`)
    Repeated,
    /// A single comma-joined value (`a,b`)
    CommaJoined,
}

/// Value type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Float,
    Boolean,
    Enum(&'static [&'static str]),
    StringList(ListEncoding),
    IntegerList,
    Object,
}

/// A default value sent when the caller leaves a field unset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl DefaultValue {
    pub fn to_json(self) -> Value {
        match self {
            DefaultValue::Str(s) => Value::from(s),
            DefaultValue::Int(i) => Value::from(i),
            DefaultValue::Bool(b) => Value::from(b),
        }
    }
}

/// Inclusion rule for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence {
    Required,
    /// Always sent; the default fills in when the caller omits it
    Default(DefaultValue),
    /// Sent only when the caller supplies a value
    Optional,
    /// Sent only when the caller supplies a non-empty value
    OptionalNonEmpty,
}

/// Where a field lands in the outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted for `{wire}` in the path template
    Path,
    Query,
    /// Top-level GraphQL variable
    Variable,
    /// Member of an object-valued GraphQL variable
    NestedVariable(&'static str),
}

/// One input of an operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Caller-facing name
    pub name: &'static str,
    /// Name the remote API expects
    pub wire: &'static str,
    pub kind: Kind,
    pub presence: Presence,
    pub placement: Placement,
    pub description: &'static str,
}

impl Field {
    const fn new(name: &'static str, kind: Kind, presence: Presence, placement: Placement) -> Self {
        Self {
            name,
            wire: name,
            kind,
            presence,
            placement,
            description: "",
        }
    }

    /// Required path parameter
    pub const fn path(name: &'static str, kind: Kind) -> Self {
        Self::new(name, kind, Presence::Required, Placement::Path)
    }

    /// Optional query parameter
    pub const fn query(name: &'static str, kind: Kind) -> Self {
        Self::new(name, kind, Presence::Optional, Placement::Query)
    }

    /// Optional GraphQL variable
    pub const fn variable(name: &'static str, kind: Kind) -> Self {
        Self::new(name, kind, Presence::Optional, Placement::Variable)
    }

    /// Optional member of an object-valued GraphQL variable
    pub const fn nested(parent: &'static str, name: &'static str, kind: Kind) -> Self {
        Self::new(
            name,
            kind,
            Presence::Optional,
            Placement::NestedVariable(parent),
        )
    }

    pub const fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    pub const fn non_empty(mut self) -> Self {
        self.presence = Presence::OptionalNonEmpty;
        self
    }

    pub const fn default_str(mut self, value: &'static str) -> Self {
        self.presence = Presence::Default(DefaultValue::Str(value));
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.presence = Presence::Default(DefaultValue::Int(value));
        self
    }

    pub const fn default_bool(mut self, value: bool) -> Self {
        self.presence = Presence::Default(DefaultValue::Bool(value));
        self
    }

    /// Send under a different name than the caller uses
    pub const fn wire(mut self, wire: &'static str) -> Self {
        self.wire = wire;
        self
    }

    pub const fn doc(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }

    /// JSON schema fragment advertised to callers
    pub fn schema(&self) -> Value {
        let mut schema = match self.kind {
            Kind::String => json!({"type": "string"}),
            Kind::Integer => json!({"type": "integer"}),
            Kind::Float => json!({"type": "number"}),
            Kind::Boolean => json!({"type": "boolean"}),
            Kind::Enum(allowed) => json!({"type": "string", "enum": allowed}),
            Kind::StringList(_) => json!({"type": "array", "items": {"type": "string"}}),
            Kind::IntegerList => json!({"type": "array", "items": {"type": "integer"}}),
            Kind::Object => json!({"type": "object"}),
        };
        if let Presence::Default(default) = self.presence {
            schema["default"] = default.to_json();
        }
        if !self.description.is_empty() {
            schema["description"] = Value::from(self.description);
        }
        schema
    }
}

/// Computations answered without any network call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOp {
    CurrentTime,
    DateToTimestamp,
    TimestampToDate,
}

/// What an operation does once its inputs are built
#[derive(Debug, Clone, Copy)]
pub enum Target {
    Rest {
        method: Method,
        path: &'static str,
    },
    GraphQl {
        document: &'static str,
        /// Variables present on every call, before caller fields are applied
        fixed: fn() -> Map<String, Value>,
    },
    Local(LocalOp),
}

/// Static descriptor of one exposed tool
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: &'static [Field],
    pub target: Target,
}

impl Operation {
    /// `GET` operation against `path`
    pub const fn get(
        name: &'static str,
        path: &'static str,
        description: &'static str,
        inputs: &'static [Field],
    ) -> Self {
        Self {
            name,
            description,
            inputs,
            target: Target::Rest {
                method: Method::Get,
                path,
            },
        }
    }

    /// GraphQL operation; `fixed` supplies variables sent on every call
    pub const fn graphql(
        name: &'static str,
        document: &'static str,
        fixed: fn() -> Map<String, Value>,
        description: &'static str,
        inputs: &'static [Field],
    ) -> Self {
        Self {
            name,
            description,
            inputs,
            target: Target::GraphQl { document, fixed },
        }
    }

    pub const fn local(
        name: &'static str,
        op: LocalOp,
        description: &'static str,
        inputs: &'static [Field],
    ) -> Self {
        Self {
            name,
            description,
            inputs,
            target: Target::Local(op),
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.inputs.iter().find(|f| f.name == name)
    }

    /// JSON schema of the operation's arguments
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .inputs
            .iter()
            .map(|f| (f.name.to_string(), f.schema()))
            .collect();
        let required: Vec<&str> = self
            .inputs
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[Field] = &[
        Field::path("id", Kind::String),
        Field::query("sparkline", Kind::Boolean).default_bool(false),
        Field::query("interval", Kind::Enum(&["daily", "hourly"]))
            .required()
            .doc("Data interval"),
        Field::query("from_", Kind::Integer).wire("from"),
    ];

    const OP: Operation = Operation::get("get_thing", "things/{id}", "Get a thing.", FIELDS);

    #[test]
    fn test_builders_set_presence_and_wire_name() {
        assert_eq!(FIELDS[0].presence, Presence::Required);
        assert_eq!(
            FIELDS[1].presence,
            Presence::Default(DefaultValue::Bool(false))
        );
        assert_eq!(FIELDS[3].wire, "from");
        assert_eq!(FIELDS[3].name, "from_");
        assert_eq!(FIELDS[3].presence, Presence::Optional);
    }

    #[test]
    fn test_input_schema() {
        let schema = OP.input_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["id", "interval"]));
        assert_eq!(schema["properties"]["sparkline"]["default"], json!(false));
        assert_eq!(
            schema["properties"]["interval"]["enum"],
            json!(["daily", "hourly"])
        );
        assert_eq!(
            schema["properties"]["interval"]["description"],
            "Data interval"
        );
        assert_eq!(schema["properties"]["from_"]["type"], "integer");
    }

    #[test]
    fn test_field_lookup() {
        assert!(OP.field("sparkline").is_some());
        assert!(OP.field("from").is_none());
    }
}
