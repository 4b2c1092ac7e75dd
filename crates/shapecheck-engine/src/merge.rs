//! Deep merge of intersection member outputs

use serde_json::Value;
use shapecheck_core::{IssueCode, IssuePath, ValidationIssue};

/// Merge two normalized outputs of the same `original` input
///
/// Objects merge key-wise, equal-length arrays merge element-wise. Where the
/// two sides differ, a side that still holds the original value gives way to
/// the side that normalized it; two different normalizations conflict.
pub(crate) fn deep_merge(
    left: Value,
    right: Value,
    original: Option<&Value>,
    path: &IssuePath,
) -> Result<Value, ValidationIssue> {
    match (left, right) {
        (Value::Object(mut merged), Value::Object(right)) => {
            for (key, right_value) in right {
                let value = match merged.remove(&key) {
                    Some(left_value) => deep_merge(
                        left_value,
                        right_value,
                        original.and_then(|o| o.get(&key)),
                        &path.key(key.as_str()),
                    )?,
                    None => right_value,
                };
                merged.insert(key, value);
            }
            Ok(Value::Object(merged))
        }
        (Value::Array(left), Value::Array(right)) if left.len() == right.len() => left
            .into_iter()
            .zip(right)
            .enumerate()
            .map(|(index, (l, r))| deep_merge(l, r, original.and_then(|o| o.get(index)), &path.index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (left, right) if left == right => Ok(left),
        (left, right) if original == Some(&left) => Ok(right),
        (left, right) if original == Some(&right) => Ok(left),
        (left, right) => Err(ValidationIssue::new(
            IssueCode::IntersectionConflict,
            path.clone(),
            "Intersection members produced values that cannot be merged",
        )
        .with_comparison(left.to_string(), right.to_string())),
    }
}
