//! Schema types and builders
//!
//! A [`Schema`] is an immutable description of an expected value shape.
//! Builders consume `self` and return a new value, so a schema that has been
//! handed to a validator can never change underneath it. Child schemas are
//! shared through `Arc`, which keeps clones cheap and makes every schema
//! `Send + Sync`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::SchemaError;

/// Closed set of schema kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Tuple,
    Union,
    Intersection,
}

impl SchemaKind {
    /// Stable lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Tuple => "tuple",
            Self::Union => "union",
            Self::Intersection => "intersection",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presence marker for a schema used as an object field
///
/// `Default` is resolved by the surrounding context: plain object fields treat
/// it as optional, fields of an intersection member treat it as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// No explicit marker
    #[default]
    Default,

    /// Absence is a `missing_field` issue
    Required,

    /// Absence is always accepted
    Optional,
}

impl Presence {
    /// Whether an absent value is acceptable
    ///
    /// `default_required` decides what an unmarked field means in the
    /// current context.
    pub fn allows_absent(self, default_required: bool) -> bool {
        match self {
            Self::Required => false,
            Self::Optional => true,
            Self::Default => !default_required,
        }
    }
}

/// Adds `required()` / `optional()` / `presence()` to a builder with a
/// `presence` field.
macro_rules! presence_builders {
    ($ty:ty) => {
        impl $ty {
            /// Mark the schema as required when used as an object field
            pub fn required(mut self) -> Self {
                self.presence = Presence::Required;
                self
            }

            /// Mark the schema as optional when used as an object field
            pub fn optional(mut self) -> Self {
                self.presence = Presence::Optional;
                self
            }

            /// Presence marker
            pub fn presence(&self) -> Presence {
                self.presence
            }
        }
    };
}

/// String schema with optional email format and length bounds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringSchema {
    email: bool,
    min_len: Option<usize>,
    max_len: Option<usize>,
    presence: Presence,
}

impl StringSchema {
    /// Require an `local-part@domain.tld` shaped value
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Minimum length in characters (replaces any earlier minimum)
    pub fn min(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Maximum length in characters (replaces any earlier maximum)
    pub fn max(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub fn is_email(&self) -> bool {
        self.email
    }

    pub fn min_len(&self) -> Option<usize> {
        self.min_len
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

presence_builders!(StringSchema);

/// Number schema with value bounds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberSchema {
    min: Option<f64>,
    max: Option<f64>,
    integer: bool,
    coerce: bool,
    presence: Presence,
}

impl NumberSchema {
    /// Inclusive lower bound (replaces any earlier lower bound)
    pub fn min(mut self, value: f64) -> Self {
        self.min = Some(value);
        self
    }

    /// Inclusive upper bound (replaces any earlier upper bound)
    pub fn max(mut self, value: f64) -> Self {
        self.max = Some(value);
        self
    }

    /// Reject numbers with a fractional part
    pub fn int(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Accept numeric strings and normalize them to numbers
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max
    }

    pub fn is_integer(&self) -> bool {
        self.integer
    }

    pub fn is_coercing(&self) -> bool {
        self.coerce
    }
}

presence_builders!(NumberSchema);

/// Boolean schema
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanSchema {
    presence: Presence,
}

presence_builders!(BooleanSchema);

/// Object schema: ordered field declarations
///
/// Fields not declared here are accepted and passed through unexamined.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Arc<Schema>)>,
    presence: Presence,
}

impl ObjectSchema {
    /// Declare a field. Redeclaring a name replaces the earlier schema in place.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let name = name.into();
        let schema = Arc::new(schema.into());

        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }

        self
    }

    /// Declared fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(name, schema)| (name.as_str(), schema.as_ref()))
    }

    /// Find a declared field by name
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, schema)| schema.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

presence_builders!(ObjectSchema);

/// Array schema: element schema plus length bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    element: Arc<Schema>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    presence: Presence,
}

impl ArraySchema {
    /// Minimum length (replaces any earlier minimum)
    pub fn min(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Maximum length (replaces any earlier maximum)
    pub fn max(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Exact length
    pub fn length(self, len: usize) -> Self {
        self.min(len).max(len)
    }

    pub fn element(&self) -> &Schema {
        &self.element
    }

    pub fn min_len(&self) -> Option<usize> {
        self.min_len
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

presence_builders!(ArraySchema);

/// Tuple schema: one schema per position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupleSchema {
    positions: Vec<Arc<Schema>>,
    presence: Presence,
}

impl TupleSchema {
    pub fn positions(&self) -> impl Iterator<Item = &Schema> {
        self.positions.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

presence_builders!(TupleSchema);

/// Union schema: at least one member must accept
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    members: Vec<Arc<Schema>>,
    presence: Presence,
}

impl UnionSchema {
    /// Members in declaration order
    pub fn members(&self) -> impl Iterator<Item = &Schema> {
        self.members.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

presence_builders!(UnionSchema);

/// Intersection schema: every member must accept
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSchema {
    members: Vec<Arc<Schema>>,
    presence: Presence,
}

impl IntersectionSchema {
    /// Members in declaration order
    pub fn members(&self) -> impl Iterator<Item = &Schema> {
        self.members.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

presence_builders!(IntersectionSchema);

/// A schema of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Tuple(TupleSchema),
    Union(UnionSchema),
    Intersection(IntersectionSchema),
}

impl Schema {
    /// Kind tag
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::String(_) => SchemaKind::String,
            Self::Number(_) => SchemaKind::Number,
            Self::Boolean(_) => SchemaKind::Boolean,
            Self::Object(_) => SchemaKind::Object,
            Self::Array(_) => SchemaKind::Array,
            Self::Tuple(_) => SchemaKind::Tuple,
            Self::Union(_) => SchemaKind::Union,
            Self::Intersection(_) => SchemaKind::Intersection,
        }
    }

    /// Presence marker
    pub fn presence(&self) -> Presence {
        match self {
            Self::String(s) => s.presence(),
            Self::Number(s) => s.presence(),
            Self::Boolean(s) => s.presence(),
            Self::Object(s) => s.presence(),
            Self::Array(s) => s.presence(),
            Self::Tuple(s) => s.presence(),
            Self::Union(s) => s.presence(),
            Self::Intersection(s) => s.presence(),
        }
    }

    /// Mark as required when used as an object field
    pub fn required(self) -> Self {
        self.map_presence(Presence::Required)
    }

    /// Mark as optional when used as an object field
    pub fn optional(self) -> Self {
        self.map_presence(Presence::Optional)
    }

    fn map_presence(self, presence: Presence) -> Self {
        match self {
            Self::String(s) => Self::String(StringSchema { presence, ..s }),
            Self::Number(s) => Self::Number(NumberSchema { presence, ..s }),
            Self::Boolean(_) => Self::Boolean(BooleanSchema { presence }),
            Self::Object(s) => Self::Object(ObjectSchema { presence, ..s }),
            Self::Array(s) => Self::Array(ArraySchema { presence, ..s }),
            Self::Tuple(s) => Self::Tuple(TupleSchema { presence, ..s }),
            Self::Union(s) => Self::Union(UnionSchema { presence, ..s }),
            Self::Intersection(s) => Self::Intersection(IntersectionSchema { presence, ..s }),
        }
    }

    /// Short human-readable description used in issue messages
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) if n.is_integer() => "integer".to_string(),
            Self::Array(a) => format!("array<{}>", a.element().describe()),
            Self::Tuple(t) => {
                let positions: Vec<String> = t.positions().map(|p| p.describe()).collect();
                format!("[{}]", positions.join(", "))
            }
            Self::Union(u) => {
                let members: Vec<String> = u.members().map(|m| m.describe()).collect();
                members.join(" | ")
            }
            Self::Intersection(i) => {
                let members: Vec<String> = i.members().map(|m| m.describe()).collect();
                members.join(" & ")
            }
            other => other.kind().to_string(),
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Self::String(schema)
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Self::Number(schema)
    }
}

impl From<BooleanSchema> for Schema {
    fn from(schema: BooleanSchema) -> Self {
        Self::Boolean(schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Self::Object(schema)
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Self::Array(schema)
    }
}

impl From<TupleSchema> for Schema {
    fn from(schema: TupleSchema) -> Self {
        Self::Tuple(schema)
    }
}

impl From<UnionSchema> for Schema {
    fn from(schema: UnionSchema) -> Self {
        Self::Union(schema)
    }
}

impl From<IntersectionSchema> for Schema {
    fn from(schema: IntersectionSchema) -> Self {
        Self::Intersection(schema)
    }
}

/// Create a string schema
pub fn string() -> StringSchema {
    StringSchema::default()
}

/// Create a number schema
pub fn number() -> NumberSchema {
    NumberSchema::default()
}

/// Create a boolean schema
pub fn boolean() -> BooleanSchema {
    BooleanSchema::default()
}

/// Create an object schema from `(name, schema)` pairs
pub fn object<I, K, S>(fields: I) -> ObjectSchema
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<String>,
    S: Into<Schema>,
{
    fields
        .into_iter()
        .fold(ObjectSchema::default(), |obj, (name, schema)| obj.field(name, schema))
}

/// Create an array schema
pub fn array(element: impl Into<Schema>) -> ArraySchema {
    ArraySchema {
        element: Arc::new(element.into()),
        min_len: None,
        max_len: None,
        presence: Presence::Default,
    }
}

/// Create a tuple schema
pub fn tuple<I, S>(positions: I) -> TupleSchema
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    TupleSchema {
        positions: positions.into_iter().map(|s| Arc::new(s.into())).collect(),
        presence: Presence::Default,
    }
}

/// Create a union schema
///
/// Fails with [`SchemaError::EmptyUnion`] when no members are given.
pub fn union<I, S>(members: I) -> Result<UnionSchema, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let members: Vec<Arc<Schema>> = members.into_iter().map(|s| Arc::new(s.into())).collect();
    if members.is_empty() {
        return Err(SchemaError::EmptyUnion);
    }

    Ok(UnionSchema {
        members,
        presence: Presence::Default,
    })
}

/// Create an intersection schema
///
/// Fails with [`SchemaError::EmptyIntersection`] when no members are given.
pub fn intersection<I, S>(members: I) -> Result<IntersectionSchema, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: Into<Schema>,
{
    let members: Vec<Arc<Schema>> = members.into_iter().map(|s| Arc::new(s.into())).collect();
    if members.is_empty() {
        return Err(SchemaError::EmptyIntersection);
    }

    Ok(IntersectionSchema {
        members,
        presence: Presence::Default,
    })
}
