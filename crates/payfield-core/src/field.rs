use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logical identifier fields affected by the width migration.
///
/// The source systems expose each of these under several naming-convention
/// aliases; callers resolve aliases before reaching this crate.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Bin,
    ProviderId,
    ProductServiceId,
}

impl FieldKind {
    /// All field kinds in registry order.
    pub const ALL: [FieldKind; 3] = [
        FieldKind::Bin,
        FieldKind::ProviderId,
        FieldKind::ProductServiceId,
    ];

    /// Display label used in violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Bin => "Bin Number",
            FieldKind::ProviderId => "Provider ID",
            FieldKind::ProductServiceId => "Product/Service ID",
        }
    }
}

/// Schema generation a value is validated against.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FormatVariant {
    Legacy,
    New,
}

/// Accepted character set for a field schema.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Digits,
    Alphanumeric,
    AlphanumericDashUnderscore,
}

impl CharClass {
    /// Returns true when `c` belongs to the class.
    pub fn allows(&self, c: char) -> bool {
        match self {
            CharClass::Digits => c.is_ascii_digit(),
            CharClass::Alphanumeric => c.is_ascii_alphanumeric(),
            CharClass::AlphanumericDashUnderscore => {
                c.is_ascii_alphanumeric() || c == '-' || c == '_'
            }
        }
    }

    /// Wording used in format violation messages.
    pub fn description(&self) -> &'static str {
        match self {
            CharClass::Digits => "only digits",
            CharClass::Alphanumeric => "only alphanumeric characters",
            CharClass::AlphanumericDashUnderscore => {
                "only alphanumeric characters, hyphens, and underscores"
            }
        }
    }
}
