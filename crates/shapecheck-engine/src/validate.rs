//! Schema evaluation
//!
//! Every validator is a pure function of `(schema, input, options)`. Expected
//! rule violations are collected as [`ValidationIssue`]s and never raised.
//! Object, array, and tuple validators collect every issue before returning
//! unless [`ValidateOptions::abort_early`] is set.

use serde_json::{Map, Value};
use shapecheck_core::issue::type_name;
use shapecheck_core::{
    ArraySchema, BooleanSchema, IntersectionSchema, IssueCode, IssuePath, NumberSchema,
    ObjectSchema, Schema, SchemaKind, StringSchema, TupleSchema, UnionReport, UnionSchema, ValidateOptions,
    ValidationIssue, ValidationResult,
};

use crate::format;
use crate::merge::deep_merge;

type Outcome = Result<Value, Vec<ValidationIssue>>;

/// Anything that can validate a JSON value
pub trait Validator {
    /// Validate with explicit options
    fn validate_with(&self, input: &Value, options: &ValidateOptions) -> ValidationResult;

    /// Validate with default options
    fn validate(&self, input: &Value) -> ValidationResult {
        self.validate_with(input, &ValidateOptions::default())
    }
}

/// Validate `input` against `schema` with default options
pub fn validate(schema: &Schema, input: &Value) -> ValidationResult {
    validate_with(schema, input, &ValidateOptions::default())
}

/// Validate `input` against `schema`
pub fn validate_with(schema: &Schema, input: &Value, options: &ValidateOptions) -> ValidationResult {
    let evaluator = Evaluator { options };
    finish(schema.kind().as_str(), evaluator.eval(schema, input, &IssuePath::root()))
}

fn finish(kind: &str, outcome: Outcome) -> ValidationResult {
    match outcome {
        Ok(value) => ValidationResult::Success(value),
        Err(issues) => {
            tracing::debug!(kind, issues = issues.len(), "validation failed");
            ValidationResult::Failure(issues)
        }
    }
}

impl Validator for Schema {
    fn validate_with(&self, input: &Value, options: &ValidateOptions) -> ValidationResult {
        validate_with(self, input, options)
    }
}

/// Implements [`Validator`] for a builder by calling its evaluator method at
/// the root path.
macro_rules! builder_validator {
    ($ty:ty, $method:ident, $kind:expr) => {
        impl Validator for $ty {
            fn validate_with(&self, input: &Value, options: &ValidateOptions) -> ValidationResult {
                let evaluator = Evaluator { options };
                finish($kind.as_str(), evaluator.$method(self, input, &IssuePath::root()))
            }
        }
    };
}

builder_validator!(StringSchema, eval_string, SchemaKind::String);
builder_validator!(NumberSchema, eval_number, SchemaKind::Number);
builder_validator!(BooleanSchema, eval_boolean, SchemaKind::Boolean);
builder_validator!(ArraySchema, eval_array, SchemaKind::Array);
builder_validator!(TupleSchema, eval_tuple, SchemaKind::Tuple);
builder_validator!(UnionSchema, eval_union, SchemaKind::Union);
builder_validator!(IntersectionSchema, eval_intersection, SchemaKind::Intersection);

impl Validator for ObjectSchema {
    fn validate_with(&self, input: &Value, options: &ValidateOptions) -> ValidationResult {
        let evaluator = Evaluator { options };
        finish(SchemaKind::Object.as_str(), evaluator.eval_object(self, input, &IssuePath::root(), false))
    }
}

struct Evaluator<'o> {
    options: &'o ValidateOptions,
}

impl Evaluator<'_> {
    fn eval(&self, schema: &Schema, input: &Value, path: &IssuePath) -> Outcome {
        match schema {
            Schema::String(s) => self.eval_string(s, input, path),
            Schema::Number(s) => self.eval_number(s, input, path),
            Schema::Boolean(s) => self.eval_boolean(s, input, path),
            Schema::Object(s) => self.eval_object(s, input, path, false),
            Schema::Array(s) => self.eval_array(s, input, path),
            Schema::Tuple(s) => self.eval_tuple(s, input, path),
            Schema::Union(s) => self.eval_union(s, input, path),
            Schema::Intersection(s) => self.eval_intersection(s, input, path),
        }
    }

    fn eval_string(&self, schema: &StringSchema, input: &Value, path: &IssuePath) -> Outcome {
        let Value::String(text) = input else {
            return Err(vec![type_mismatch("string", input, path)]);
        };

        let mut issues = Vec::new();
        let len = text.chars().count();

        if let Some(min) = schema.min_len() {
            if len < min {
                issues.push(length_issue(path, format!("at least {} characters", min), len));
            }
        }
        if let Some(max) = schema.max_len() {
            if len > max {
                issues.push(length_issue(path, format!("at most {} characters", max), len));
            }
        }

        if schema.is_email() && !format::is_email(text) {
            issues.push(
                ValidationIssue::new(IssueCode::FormatMismatch, path.clone(), "Invalid email address")
                    .with_comparison("email", text.clone()),
            );
        }

        if issues.is_empty() {
            Ok(input.clone())
        } else {
            Err(issues)
        }
    }

    fn eval_number(&self, schema: &NumberSchema, input: &Value, path: &IssuePath) -> Outcome {
        let (number, output) = match input {
            Value::Number(n) => match n.as_f64() {
                Some(number) => (number, input.clone()),
                None => return Err(vec![type_mismatch("number", input, path)]),
            },
            Value::String(text) if schema.is_coercing() => match text.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => (number, number_value(number)),
                _ => {
                    return Err(vec![ValidationIssue::new(
                        IssueCode::TypeMismatch,
                        path.clone(),
                        format!("Expected number, received non-numeric string {:?}", text),
                    )
                    .with_comparison("number", "string")])
                }
            },
            _ => return Err(vec![type_mismatch("number", input, path)]),
        };

        let mut issues = Vec::new();

        if schema.is_integer() && number.fract() != 0.0 {
            issues.push(
                ValidationIssue::new(IssueCode::TypeMismatch, path.clone(), "Expected integer, received float")
                    .with_comparison("integer", "float"),
            );
        }
        if let Some(min) = schema.min_value() {
            if number < min {
                issues.push(
                    ValidationIssue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("Number must be greater than or equal to {}", min),
                    )
                    .with_comparison(format!(">= {}", min), number.to_string()),
                );
            }
        }
        if let Some(max) = schema.max_value() {
            if number > max {
                issues.push(
                    ValidationIssue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!("Number must be less than or equal to {}", max),
                    )
                    .with_comparison(format!("<= {}", max), number.to_string()),
                );
            }
        }

        if issues.is_empty() {
            Ok(output)
        } else {
            Err(issues)
        }
    }

    fn eval_boolean(&self, _schema: &BooleanSchema, input: &Value, path: &IssuePath) -> Outcome {
        match input {
            Value::Bool(_) => Ok(input.clone()),
            _ => Err(vec![type_mismatch("boolean", input, path)]),
        }
    }

    /// `default_required` resolves unmarked fields; it is only set for the
    /// direct members of an intersection.
    fn eval_object(
        &self,
        schema: &ObjectSchema,
        input: &Value,
        path: &IssuePath,
        default_required: bool,
    ) -> Outcome {
        let Value::Object(fields) = input else {
            return Err(vec![type_mismatch("object", input, path)]);
        };

        // Undeclared fields pass through untouched
        let mut output: Map<String, Value> = fields.clone();
        let mut issues = Vec::new();

        for (name, field_schema) in schema.fields() {
            let field_path = path.key(name);

            match fields.get(name) {
                None => {
                    if !field_schema.presence().allows_absent(default_required) {
                        issues.push(
                            ValidationIssue::new(
                                IssueCode::MissingField,
                                field_path,
                                format!("Required field '{}' is missing", name),
                            )
                            .with_comparison(field_schema.describe(), "undefined"),
                        );
                    }
                }
                Some(value) => match self.eval(field_schema, value, &field_path) {
                    Ok(normalized) => {
                        output.insert(name.to_string(), normalized);
                    }
                    Err(mut field_issues) => issues.append(&mut field_issues),
                },
            }

            if self.options.abort_early && !issues.is_empty() {
                break;
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(issues)
        }
    }

    fn eval_array(&self, schema: &ArraySchema, input: &Value, path: &IssuePath) -> Outcome {
        let Value::Array(items) = input else {
            return Err(vec![type_mismatch("array", input, path)]);
        };

        let mut issues = Vec::new();

        if let Some(min) = schema.min_len() {
            if items.len() < min {
                issues.push(length_issue(path, format!("at least {} items", min), items.len()));
            }
        }
        if let Some(max) = schema.max_len() {
            if items.len() > max {
                issues.push(length_issue(path, format!("at most {} items", max), items.len()));
            }
        }
        if self.options.abort_early && !issues.is_empty() {
            return Err(issues);
        }

        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.eval(schema.element(), item, &path.index(index)) {
                Ok(normalized) => output.push(normalized),
                Err(mut item_issues) => {
                    issues.append(&mut item_issues);
                    if self.options.abort_early {
                        break;
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(Value::Array(output))
        } else {
            Err(issues)
        }
    }

    fn eval_tuple(&self, schema: &TupleSchema, input: &Value, path: &IssuePath) -> Outcome {
        let Value::Array(items) = input else {
            return Err(vec![type_mismatch("tuple", input, path)]);
        };

        // Length is checked before any position is examined
        if items.len() != schema.len() {
            return Err(vec![ValidationIssue::new(
                IssueCode::LengthMismatch,
                path.clone(),
                format!("Expected tuple of {} items, received {}", schema.len(), items.len()),
            )
            .with_comparison(schema.len().to_string(), items.len().to_string())]);
        }

        let mut output = Vec::with_capacity(items.len());
        let mut issues = Vec::new();

        for (index, (position, item)) in schema.positions().zip(items).enumerate() {
            match self.eval(position, item, &path.index(index)) {
                Ok(normalized) => output.push(normalized),
                Err(mut position_issues) => {
                    issues.append(&mut position_issues);
                    if self.options.abort_early {
                        break;
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(Value::Array(output))
        } else {
            Err(issues)
        }
    }

    fn eval_union(&self, schema: &UnionSchema, input: &Value, path: &IssuePath) -> Outcome {
        let mut member_issues = Vec::with_capacity(schema.len());

        for (member_index, member) in schema.members().enumerate() {
            match self.eval(member, input, path) {
                Ok(normalized) => {
                    tracing::trace!(%path, member_index, "union member matched");
                    return Ok(normalized);
                }
                Err(issues) => {
                    tracing::trace!(%path, member_index, issues = issues.len(), "union member rejected");
                    member_issues.push(issues);
                }
            }
        }

        match self.options.union_report {
            UnionReport::Summary => {
                let expected = Schema::from(schema.clone()).describe();
                Err(vec![ValidationIssue::new(
                    IssueCode::NoUnionMemberMatched,
                    path.clone(),
                    format!("Expected {}, received {}", expected, type_name(input)),
                )
                .with_comparison(expected, type_name(input))
                .with_union_errors(member_issues)])
            }
            UnionReport::AllMembers => Err(member_issues.into_iter().flatten().collect()),
        }
    }

    fn eval_intersection(&self, schema: &IntersectionSchema, input: &Value, path: &IssuePath) -> Outcome {
        let mut outputs = Vec::with_capacity(schema.len());
        let mut issues = Vec::new();

        for member in schema.members() {
            match self.eval_intersection_member(member, input, path) {
                Ok(normalized) => outputs.push(normalized),
                Err(mut member_issues) => {
                    issues.append(&mut member_issues);
                    if self.options.abort_early {
                        break;
                    }
                }
            }
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        let mut outputs = outputs.into_iter();
        let Some(first) = outputs.next() else {
            return Ok(input.clone());
        };

        outputs
            .try_fold(first, |merged, next| deep_merge(merged, next, Some(input), path))
            .map_err(|issue| vec![issue])
    }

    /// Object members of an intersection treat unmarked fields as required,
    /// so a field demanded by one branch is never relaxed by another.
    fn eval_intersection_member(&self, member: &Schema, input: &Value, path: &IssuePath) -> Outcome {
        match member {
            Schema::Object(object) => self.eval_object(object, input, path, true),
            other => self.eval(other, input, path),
        }
    }
}

fn type_mismatch(expected: &str, input: &Value, path: &IssuePath) -> ValidationIssue {
    let received = type_name(input);
    ValidationIssue::new(
        IssueCode::TypeMismatch,
        path.clone(),
        format!("Expected {}, received {}", expected, received),
    )
    .with_comparison(expected, received)
}

fn length_issue(path: &IssuePath, expected: String, actual: usize) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::LengthOutOfRange,
        path.clone(),
        format!("Expected {}, received {}", expected, actual),
    )
    .with_comparison(expected, actual.to_string())
}

/// Integral values become JSON integers so coerced output compares equal to
/// a literal integer.
fn number_value(number: f64) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;

    if number.fract() == 0.0 && number.abs() <= MAX_SAFE {
        Value::from(number as i64)
    } else {
        serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shapecheck_core::{array, boolean, intersection, number, object, string, tuple, union};

    fn codes(result: &ValidationResult) -> Vec<IssueCode> {
        result.codes()
    }

    fn paths(result: &ValidationResult) -> Vec<String> {
        result.issues().iter().map(|i| i.path.to_string()).collect()
    }

    #[test]
    fn string_type_check() {
        assert!(string().validate(&json!("hi")).is_success());

        let result = string().validate(&json!(1));
        assert_eq!(codes(&result), vec![IssueCode::TypeMismatch]);
        assert_eq!(result.issues()[0].message, "Expected string, received number");
    }

    #[test]
    fn null_never_satisfies_a_primitive() {
        assert!(string().validate(&Value::Null).is_failure());
        assert!(number().validate(&Value::Null).is_failure());
        assert!(boolean().validate(&Value::Null).is_failure());
    }

    #[test]
    fn string_length_bounds() {
        let schema = string().min(2).max(3);
        assert!(schema.validate(&json!("ab")).is_success());
        assert_eq!(codes(&schema.validate(&json!("a"))), vec![IssueCode::LengthOutOfRange]);
        assert_eq!(codes(&schema.validate(&json!("abcd"))), vec![IssueCode::LengthOutOfRange]);
        // Length counts characters, not bytes
        assert!(schema.validate(&json!("äö")).is_success());
    }

    #[test]
    fn email_collects_with_length_issues() {
        let result = string().email().min(10).validate(&json!("hi"));
        assert_eq!(
            codes(&result),
            vec![IssueCode::LengthOutOfRange, IssueCode::FormatMismatch]
        );
    }

    #[test]
    fn number_bounds_and_integers() {
        let schema = number().min(0.0).max(10.0).int();
        assert!(schema.validate(&json!(5)).is_success());
        assert_eq!(codes(&schema.validate(&json!(-1))), vec![IssueCode::TooSmall]);
        assert_eq!(codes(&schema.validate(&json!(11))), vec![IssueCode::TooBig]);
        assert_eq!(codes(&schema.validate(&json!(2.5))), vec![IssueCode::TypeMismatch]);
    }

    #[test]
    fn number_min_is_last_wins() {
        let schema = number().min(2.0).min(4.0);
        assert!(schema.validate(&json!(4)).is_success());
        assert_eq!(codes(&schema.validate(&json!(3))), vec![IssueCode::TooSmall]);

        let relaxed = number().min(4.0).min(2.0);
        assert!(relaxed.validate(&json!(3)).is_success());
    }

    #[test]
    fn no_string_coercion_by_default() {
        let result = number().validate(&json!("42"));
        assert_eq!(codes(&result), vec![IssueCode::TypeMismatch]);
    }

    #[test]
    fn explicit_coercion_normalizes() {
        let schema = number().coerce();
        assert_eq!(schema.validate(&json!("42")), ValidationResult::Success(json!(42)));
        assert_eq!(schema.validate(&json!(" 1.5 ")), ValidationResult::Success(json!(1.5)));
        assert_eq!(codes(&schema.validate(&json!("forty"))), vec![IssueCode::TypeMismatch]);
        assert_eq!(codes(&schema.validate(&json!("inf"))), vec![IssueCode::TypeMismatch]);
    }

    #[test]
    fn boolean_is_literal() {
        assert!(boolean().validate(&json!(true)).is_success());
        assert!(boolean().validate(&json!(false)).is_success());
        assert!(boolean().validate(&json!("true")).is_failure());
        assert!(boolean().validate(&json!(0)).is_failure());
    }

    #[test]
    fn object_collects_every_issue() {
        let schema = object([
            ("name", Schema::from(string().required())),
            ("age", number().into()),
            ("email", string().email().required().into()),
        ]);

        let result = schema.validate(&json!({"age": "old"}));
        assert_eq!(
            codes(&result),
            vec![IssueCode::MissingField, IssueCode::TypeMismatch, IssueCode::MissingField]
        );
        assert_eq!(paths(&result), vec!["$.name", "$.age", "$.email"]);
    }

    #[test]
    fn object_abort_early_stops_at_first_issue() {
        let schema = object([
            ("name", Schema::from(string().required())),
            ("age", number().required().into()),
        ]);
        let options = ValidateOptions::default().with_abort_early(true);

        let result = schema.validate_with(&json!({}), &options);
        assert_eq!(paths(&result), vec!["$.name"]);
    }

    #[test]
    fn object_passes_unknown_fields_through() {
        let schema = object([("name", string())]);
        let input = json!({"name": "John", "nickname": "JJ", "tags": [1, 2]});

        assert_eq!(schema.validate(&input), ValidationResult::Success(input.clone()));
    }

    #[test]
    fn object_output_carries_normalized_fields() {
        let schema = object([("age", number().coerce())]);
        let result = schema.validate(&json!({"age": "30", "extra": true}));
        assert_eq!(result, ValidationResult::Success(json!({"age": 30, "extra": true})));
    }

    #[test]
    fn optional_field_still_type_checked_when_present() {
        let schema = object([("age", number().optional())]);
        assert!(schema.validate(&json!({})).is_success());
        assert_eq!(codes(&schema.validate(&json!({"age": true}))), vec![IssueCode::TypeMismatch]);
    }

    #[test]
    fn nested_paths() {
        let schema = object([(
            "users",
            array(object([("email", string().email().required())])),
        )]);

        let result = schema.validate(&json!({"users": [{"email": "a@b.com"}, {"email": "nope"}, {}]}));
        assert_eq!(paths(&result), vec!["$.users[1].email", "$.users[2].email"]);
        assert_eq!(codes(&result), vec![IssueCode::FormatMismatch, IssueCode::MissingField]);
    }

    #[test]
    fn array_bounds_and_elements_reported_together() {
        let schema = array(number()).min(3);
        let result = schema.validate(&json!([1, "two"]));

        assert_eq!(codes(&result), vec![IssueCode::LengthOutOfRange, IssueCode::TypeMismatch]);
        assert_eq!(paths(&result), vec!["$", "$[1]"]);
    }

    #[test]
    fn array_abort_early_skips_elements_after_length_issue() {
        let schema = array(number()).min(3);
        let options = ValidateOptions::default().with_abort_early(true);

        let result = schema.validate_with(&json!([1, "two"]), &options);
        assert_eq!(codes(&result), vec![IssueCode::LengthOutOfRange]);
        assert_eq!(paths(&result), vec!["$"]);
    }

    #[test]
    fn array_abort_early_stops_at_first_bad_element() {
        let options = ValidateOptions::default().with_abort_early(true);

        let result = array(number()).validate_with(&json!(["a", 2, "c"]), &options);
        assert_eq!(paths(&result), vec!["$[0]"]);
    }

    #[test]
    fn empty_array_edges() {
        assert!(array(number()).min(0).validate(&json!([])).is_success());
        assert!(array(number()).validate(&json!([])).is_success());
        assert_eq!(
            codes(&array(number()).min(1).validate(&json!([]))),
            vec![IssueCode::LengthOutOfRange]
        );
    }

    #[test]
    fn exact_array_length() {
        let schema = array(boolean()).length(2);
        assert!(schema.validate(&json!([true, false])).is_success());
        assert!(schema.validate(&json!([true])).is_failure());
        assert!(schema.validate(&json!([true, true, true])).is_failure());
    }

    #[test]
    fn tuple_length_mismatch_skips_positions() {
        let schema = tuple([Schema::from(string()), number().into()]);

        let result = schema.validate(&json!(["hi", 2, 3]));
        assert_eq!(codes(&result), vec![IssueCode::LengthMismatch]);

        let result = schema.validate(&json!([1]));
        assert_eq!(codes(&result), vec![IssueCode::LengthMismatch]);
    }

    #[test]
    fn tuple_positions_validated_independently() {
        let schema = tuple([Schema::from(string()), number().into()]);
        let result = schema.validate(&json!([2, "hi"]));

        assert_eq!(codes(&result), vec![IssueCode::TypeMismatch, IssueCode::TypeMismatch]);
        assert_eq!(paths(&result), vec!["$[0]", "$[1]"]);
    }

    #[test]
    fn tuple_abort_early_stops_at_first_bad_position() {
        let schema = tuple([Schema::from(string()), number().into()]);
        let options = ValidateOptions::default().with_abort_early(true);

        assert_eq!(paths(&schema.validate(&json!([1, "x"]))), vec!["$[0]", "$[1]"]);
        assert_eq!(paths(&schema.validate_with(&json!([1, "x"]), &options)), vec!["$[0]"]);
    }

    #[test]
    fn empty_tuple_accepts_empty_array() {
        let schema = tuple(Vec::<Schema>::new());
        assert!(schema.validate(&json!([])).is_success());
        assert!(schema.validate(&json!([1])).is_failure());
    }

    #[test]
    fn union_returns_first_match() {
        let schema = union([Schema::from(number().coerce()), string().into()]).unwrap();
        // The coercing member comes first, so numeric strings normalize
        assert_eq!(schema.validate(&json!("7")), ValidationResult::Success(json!(7)));
        assert_eq!(schema.validate(&json!("x")), ValidationResult::Success(json!("x")));
    }

    #[test]
    fn union_summary_carries_member_issues() {
        let schema = union([Schema::from(string()), number().into()]).unwrap();
        let result = schema.validate(&json!(true));

        assert_eq!(codes(&result), vec![IssueCode::NoUnionMemberMatched]);
        let issue = &result.issues()[0];
        assert_eq!(issue.message, "Expected string | number, received boolean");
        assert_eq!(issue.union_errors.len(), 2);
        assert_eq!(issue.union_errors[0][0].code, IssueCode::TypeMismatch);
    }

    #[test]
    fn union_all_members_report() {
        let schema = union([Schema::from(string()), number().into()]).unwrap();
        let options = ValidateOptions::default().with_union_report(UnionReport::AllMembers);

        let result = schema.validate_with(&json!(true), &options);
        assert_eq!(codes(&result), vec![IssueCode::TypeMismatch, IssueCode::TypeMismatch]);
    }

    #[test]
    fn intersection_merges_outputs() {
        let schema = intersection([
            object([("name", string())]),
            object([("age", number())]),
        ])
        .unwrap();

        let input = json!({"name": "John", "age": 30});
        assert_eq!(schema.validate(&input), ValidationResult::Success(input.clone()));
    }

    #[test]
    fn intersection_requires_each_branch_fields() {
        let schema = intersection([
            object([("name", string())]),
            object([("age", number())]),
        ])
        .unwrap();

        let result = schema.validate(&json!({"name": "John"}));
        assert_eq!(codes(&result), vec![IssueCode::MissingField]);
        assert_eq!(paths(&result), vec!["$.age"]);
    }

    #[test]
    fn intersection_reports_all_branch_failures() {
        let schema = intersection([
            object([("name", string())]),
            object([("age", number())]),
        ])
        .unwrap();

        let result = schema.validate(&json!({"age": "John"}));
        assert_eq!(paths(&result), vec!["$.name", "$.age"]);
        assert_eq!(codes(&result), vec![IssueCode::MissingField, IssueCode::TypeMismatch]);
    }

    #[test]
    fn intersection_respects_explicit_optional() {
        let schema = intersection([
            object([("name", string())]),
            object([("age", number().optional())]),
        ])
        .unwrap();

        assert!(schema.validate(&json!({"name": "John"})).is_success());
    }

    #[test]
    fn intersection_strictness_does_not_reach_nested_objects() {
        let schema = intersection([object([(
            "profile",
            object([("bio", string())]),
        )])])
        .unwrap();

        assert!(schema.validate(&json!({"profile": {}})).is_success());
        assert_eq!(codes(&schema.validate(&json!({}))), vec![IssueCode::MissingField]);
    }

    #[test]
    fn intersection_of_primitives() {
        let schema = intersection([string(), string().email()]).unwrap();
        assert!(schema.validate(&json!("a@b.com")).is_success());
        assert_eq!(codes(&schema.validate(&json!("hi"))), vec![IssueCode::FormatMismatch]);
    }

    #[test]
    fn intersection_keeps_coercion_over_plain_check() {
        let schema = intersection([
            object([("age", number().coerce())]),
            object([("age", string())]),
        ])
        .unwrap();

        let result = schema.validate(&json!({"age": "30"}));
        assert_eq!(result, ValidationResult::Success(json!({"age": 30})));
    }

    #[test]
    fn intersection_coercion_survives_undeclaring_branch() {
        let schema = intersection([
            object([("age", number().coerce())]),
            object([("name", string())]),
        ])
        .unwrap();

        let result = schema.validate(&json!({"age": "30", "name": "J"}));
        assert_eq!(result, ValidationResult::Success(json!({"age": 30, "name": "J"})));

        let reversed = intersection([
            object([("name", string())]),
            object([("age", number().coerce())]),
        ])
        .unwrap();
        assert_eq!(reversed.validate(&json!({"age": "30", "name": "J"})), result);
    }

    #[test]
    fn intersection_abort_early_stops_after_first_branch() {
        let schema = intersection([
            object([("name", string())]),
            object([("age", number())]),
        ])
        .unwrap();
        let options = ValidateOptions::default().with_abort_early(true);

        assert_eq!(paths(&schema.validate(&json!({}))), vec!["$.name", "$.age"]);
        assert_eq!(paths(&schema.validate_with(&json!({}), &options)), vec!["$.name"]);
    }

    #[test]
    fn erased_and_builder_validation_agree() {
        let schema = array(number()).min(2);
        let erased = Schema::from(schema.clone());

        for input in [json!([1]), json!([1, 2]), json!("no")] {
            assert_eq!(schema.validate(&input), validate(&erased, &input));
        }
    }
}
