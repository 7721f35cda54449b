use payfield_core::{FieldKind, FormatVariant};

/// Resolve a source-system field name to its canonical (kind, variant) slot.
///
/// The source systems expose each logical field under camelCase, snake_case,
/// and UPPER_CASE aliases. Naming convention is a presentation concern;
/// everything here collapses onto the schema registry's canonical pairs.
/// Mixed-convention names carry new-format values.
pub fn resolve_field_alias(name: &str) -> Option<(FieldKind, FormatVariant)> {
    match name {
        "legacyBinNumber" => Some((FieldKind::Bin, FormatVariant::Legacy)),
        "legacy_provider_id" => Some((FieldKind::ProviderId, FormatVariant::Legacy)),
        "LEGACY_PRODUCT_SERVICE_ID" => Some((FieldKind::ProductServiceId, FormatVariant::Legacy)),
        "newBinNumber" => Some((FieldKind::Bin, FormatVariant::New)),
        "new_provider_id" => Some((FieldKind::ProviderId, FormatVariant::New)),
        "NEW_PRODUCT_SERVICE_ID" => Some((FieldKind::ProductServiceId, FormatVariant::New)),
        "binNumberValue" | "bin_number_field" | "BIN_NUM" => {
            Some((FieldKind::Bin, FormatVariant::New))
        }
        "providerIdCode" | "provider_id_field" | "PROVIDER_CODE" => {
            Some((FieldKind::ProviderId, FormatVariant::New))
        }
        "productServiceIdentifier" | "product_service_id_field" | "PROD_SVC_ID" => {
            Some((FieldKind::ProductServiceId, FormatVariant::New))
        }
        _ => None,
    }
}
