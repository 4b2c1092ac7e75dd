//! Built-in scenarios
//!
//! One scenario per schema from the comparison table, with the literal inputs
//! and the outcome each one is documented to produce.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shapecheck_core::{
    array, intersection, number, object, string, tuple, union, IssueCode, Schema, SchemaError,
};

/// Documented outcome of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "code", rename_all = "snake_case")]
pub enum Expectation {
    /// Input is accepted
    Accept,

    /// Input is rejected with (at least) this issue code
    Reject(IssueCode),
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accept => write!(f, "accept"),
            Self::Reject(code) => write!(f, "reject ({})", code),
        }
    }
}

/// A literal input and its expected outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// Short label (usually the input rendered as JSON)
    pub label: String,

    pub input: Value,

    pub expect: Expectation,
}

impl Case {
    pub fn accept(input: Value) -> Self {
        Self {
            label: input.to_string(),
            input,
            expect: Expectation::Accept,
        }
    }

    pub fn reject(input: Value, code: IssueCode) -> Self {
        Self {
            label: input.to_string(),
            input,
            expect: Expectation::Reject(code),
        }
    }
}

/// A schema plus the cases run against it
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,

    pub description: String,

    pub schema: Schema,

    pub cases: Vec<Case>,
}

impl Scenario {
    fn new(name: &str, description: &str, schema: impl Into<Schema>, cases: Vec<Case>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schema: schema.into(),
            cases,
        }
    }
}

/// The comparison table
pub fn builtin_scenarios() -> Result<Vec<Scenario>, SchemaError> {
    Ok(vec![
        Scenario::new(
            "string",
            "string()",
            string(),
            vec![
                Case::accept(json!("hi")),
                Case::reject(json!(1), IssueCode::TypeMismatch),
            ],
        ),
        Scenario::new(
            "email",
            "string().email()",
            string().email(),
            vec![
                Case::accept(json!("a@b.com")),
                Case::reject(json!("hi"), IssueCode::FormatMismatch),
            ],
        ),
        Scenario::new(
            "object",
            "object({ name: string().required(), age: number() })",
            object([
                ("name", Schema::from(string().required())),
                ("age", number().into()),
            ]),
            vec![
                Case::accept(json!({"name": "John"})),
                Case::reject(json!({}), IssueCode::MissingField),
                Case::reject(json!({"name": "John", "age": true}), IssueCode::TypeMismatch),
            ],
        ),
        Scenario::new(
            "array-min-chain",
            "array(number()).min(2).min(4)",
            array(number()).min(2).min(4),
            vec![
                Case::reject(json!([1, 2]), IssueCode::LengthOutOfRange),
                Case::accept(json!([1, 2, 3, 4])),
                Case::reject(json!([1]), IssueCode::LengthOutOfRange),
                Case::accept(json!([1, 2, 3, 4, 5])),
            ],
        ),
        Scenario::new(
            "array-window",
            "array(number()).min(2).max(4)",
            array(number()).min(2).max(4),
            vec![
                Case::accept(json!([1, 2])),
                Case::accept(json!([1, 2, 3, 4])),
                Case::reject(json!([1]), IssueCode::LengthOutOfRange),
                Case::reject(json!([1, 2, 3, 4, 5]), IssueCode::LengthOutOfRange),
                Case::reject(json!(["foo", "bar"]), IssueCode::TypeMismatch),
            ],
        ),
        Scenario::new(
            "tuple",
            "tuple([string(), number()])",
            tuple([Schema::from(string()), number().into()]),
            vec![
                Case::accept(json!(["hi", 2])),
                Case::reject(json!([null, null]), IssueCode::TypeMismatch),
                Case::reject(json!(["hi"]), IssueCode::LengthMismatch),
            ],
        ),
        Scenario::new(
            "union",
            "union([string(), number()])",
            union([Schema::from(string()), number().into()])?,
            vec![
                Case::accept(json!("hi")),
                Case::accept(json!(1)),
                Case::reject(json!(true), IssueCode::NoUnionMemberMatched),
            ],
        ),
        Scenario::new(
            "intersection",
            "intersection([object({ name: string() }), object({ age: number() })])",
            intersection([object([("name", string())]), object([("age", number())])])?,
            vec![
                Case::accept(json!({"name": "John", "age": 30})),
                Case::reject(json!({"name": "John"}), IssueCode::MissingField),
                Case::reject(json!({"age": "John"}), IssueCode::TypeMismatch),
            ],
        ),
    ])
}

/// Find a built-in scenario by name
pub fn find_scenario(name: &str) -> Result<Option<Scenario>, SchemaError> {
    Ok(builtin_scenarios()?
        .into_iter()
        .find(|scenario| scenario.name == name))
}
