use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::{CharClass, FieldKind, FormatVariant};

/// Length and format rules for one (field kind, format variant) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub variant: FormatVariant,
    /// Minimum accepted length in characters.
    pub min_length: usize,
    /// Maximum accepted length in characters.
    pub max_length: usize,
    pub char_class: CharClass,
}

impl FieldSchema {
    /// Returns true when the bounds pin the value to a single width.
    pub fn is_fixed_width(&self) -> bool {
        self.min_length == self.max_length
    }
}

/// Static schema registry covering every kind/variant pair.
///
/// Entries are process-wide constants; extending the migration is a data
/// change here, not a code change elsewhere.
const FIELD_SCHEMAS: [FieldSchema; 6] = [
    FieldSchema {
        kind: FieldKind::Bin,
        variant: FormatVariant::Legacy,
        min_length: 6,
        max_length: 6,
        char_class: CharClass::Digits,
    },
    FieldSchema {
        kind: FieldKind::Bin,
        variant: FormatVariant::New,
        min_length: 8,
        max_length: 8,
        char_class: CharClass::Digits,
    },
    FieldSchema {
        kind: FieldKind::ProviderId,
        variant: FormatVariant::Legacy,
        min_length: 1,
        max_length: 15,
        char_class: CharClass::Alphanumeric,
    },
    FieldSchema {
        kind: FieldKind::ProviderId,
        variant: FormatVariant::New,
        min_length: 1,
        max_length: 35,
        char_class: CharClass::AlphanumericDashUnderscore,
    },
    FieldSchema {
        kind: FieldKind::ProductServiceId,
        variant: FormatVariant::Legacy,
        min_length: 1,
        max_length: 19,
        char_class: CharClass::AlphanumericDashUnderscore,
    },
    FieldSchema {
        kind: FieldKind::ProductServiceId,
        variant: FormatVariant::New,
        min_length: 1,
        max_length: 40,
        char_class: CharClass::AlphanumericDashUnderscore,
    },
];

/// Look up the schema for a field kind and format variant.
pub fn field_schema(kind: FieldKind, variant: FormatVariant) -> &'static FieldSchema {
    let idx = match (kind, variant) {
        (FieldKind::Bin, FormatVariant::Legacy) => 0,
        (FieldKind::Bin, FormatVariant::New) => 1,
        (FieldKind::ProviderId, FormatVariant::Legacy) => 2,
        (FieldKind::ProviderId, FormatVariant::New) => 3,
        (FieldKind::ProductServiceId, FormatVariant::Legacy) => 4,
        (FieldKind::ProductServiceId, FormatVariant::New) => 5,
    };
    &FIELD_SCHEMAS[idx]
}

/// All registry entries in registry order.
pub fn all_field_schemas() -> impl Iterator<Item = &'static FieldSchema> {
    FIELD_SCHEMAS.iter()
}

/// Validate internal consistency of the schema registry.
///
/// This checks:
/// - `min_length` is positive and does not exceed `max_length`
/// - the registry entry matches its lookup position
/// - the new format is strictly wider than the legacy format per kind
pub fn verify_registry() -> Result<()> {
    for schema in &FIELD_SCHEMAS {
        if schema.min_length == 0 || schema.min_length > schema.max_length {
            return Err(Error::InvalidSchema(format!(
                "bad length bounds for {} ({:?}): {}..{}",
                schema.kind.label(),
                schema.variant,
                schema.min_length,
                schema.max_length
            )));
        }
        let looked_up = field_schema(schema.kind, schema.variant);
        if looked_up != schema {
            return Err(Error::InvalidSchema(format!(
                "registry entry for {} ({:?}) is out of position",
                schema.kind.label(),
                schema.variant
            )));
        }
    }

    for kind in FieldKind::ALL {
        let legacy = field_schema(kind, FormatVariant::Legacy);
        let new = field_schema(kind, FormatVariant::New);
        if new.max_length <= legacy.max_length {
            return Err(Error::InvalidSchema(format!(
                "new format for {} does not expand the legacy width",
                kind.label()
            )));
        }
    }

    Ok(())
}
