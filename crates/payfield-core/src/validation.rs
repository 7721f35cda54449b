use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FormatVariant};
use crate::schema::{FieldSchema, field_schema};

/// Rule identifier for a single validation violation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    RequiredField,
    LengthInvalid,
    LengthExceeded,
    FormatInvalid,
}

/// One broken rule with its user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Violation {
    pub code: ViolationCode,
    pub message: String,
}

/// Result of validating one raw value against one field schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ValidationOutcome {
    /// Input value, unmodified.
    pub value: String,
    pub is_valid: bool,
    /// Violations in rule order; empty when valid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

/// Validate a raw value against the schema for `(kind, variant)`.
///
/// Total over any string, including empty: malformed input is reported as
/// violations, never as an error. A value that breaks both the length rule
/// and the format rule reports both.
pub fn validate(kind: FieldKind, variant: FormatVariant, raw_value: &str) -> ValidationOutcome {
    let schema = field_schema(kind, variant);

    if raw_value.is_empty() {
        return ValidationOutcome {
            value: String::new(),
            is_valid: false,
            violations: vec![Violation {
                code: ViolationCode::RequiredField,
                message: format!("{} is required", kind.label()),
            }],
        };
    }

    let mut violations = Vec::new();
    let length = raw_value.chars().count();
    if length < schema.min_length || length > schema.max_length {
        violations.push(length_violation(schema, length));
    }

    if !raw_value.chars().all(|c| schema.char_class.allows(c)) {
        violations.push(Violation {
            code: ViolationCode::FormatInvalid,
            message: format!(
                "{} must contain {}",
                kind.label(),
                schema.char_class.description()
            ),
        });
    }

    ValidationOutcome {
        value: raw_value.to_string(),
        is_valid: violations.is_empty(),
        violations,
    }
}

fn length_violation(schema: &FieldSchema, actual: usize) -> Violation {
    if schema.is_fixed_width() {
        Violation {
            code: ViolationCode::LengthInvalid,
            message: format!(
                "{} must be exactly {} digits (got {})",
                schema.kind.label(),
                schema.max_length,
                actual
            ),
        }
    } else {
        Violation {
            code: ViolationCode::LengthExceeded,
            message: format!(
                "{} cannot exceed {} characters (got {})",
                schema.kind.label(),
                schema.max_length,
                actual
            ),
        }
    }
}
