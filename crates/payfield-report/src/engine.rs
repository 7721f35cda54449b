use std::collections::BTreeMap;

use payfield_core::{FieldKind, FormatVariant, all_field_schemas, validate};
use payfield_migrate::check_consistency_with;
use tracing::debug;

use crate::metrics::{
    AnalysisSummary, ConsistencyMismatch, FieldCounts, MigrationCandidate, SUMMARY_VERSION,
};
use crate::model::{AnalyzeOptions, FieldRecord};

/// Batch analyzer over field records.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzeOptions,
}

impl Analyzer {
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Reduce a batch of records into an analysis summary.
    ///
    /// Aggregate counts do not depend on record order; the mismatch and
    /// candidate lists preserve input order for reporting.
    pub fn run(&self, records: &[FieldRecord]) -> AnalysisSummary {
        debug!(records = records.len(), "analyzing field batch");

        let mut tallies: BTreeMap<(FieldKind, FormatVariant), FieldCounts> = all_field_schemas()
            .map(|schema| {
                (
                    (schema.kind, schema.variant),
                    FieldCounts::zero(schema.kind, schema.variant),
                )
            })
            .collect();
        let mut migration_candidates = Vec::new();
        let mut mismatches = Vec::new();

        for (record_index, record) in records.iter().enumerate() {
            let mut needs = Vec::new();

            for kind in FieldKind::ALL {
                let pair = record.pair(kind);

                for (variant, value) in [
                    (FormatVariant::Legacy, pair.legacy.as_deref()),
                    (FormatVariant::New, pair.new.as_deref()),
                ] {
                    let Some(value) = value else {
                        continue;
                    };
                    let outcome = validate(kind, variant, value);
                    let counts = tallies
                        .entry((kind, variant))
                        .or_insert_with(|| FieldCounts::zero(kind, variant));
                    if outcome.is_valid {
                        counts.valid += 1;
                    } else {
                        counts.invalid += 1;
                        for violation in &outcome.violations {
                            if counts.sample_violations.len() < self.options.max_examples {
                                counts.sample_violations.push(violation.message.clone());
                            }
                        }
                    }
                }

                match (pair.legacy.as_deref(), pair.new.as_deref()) {
                    (Some(legacy), Some(new)) => {
                        let result =
                            check_consistency_with(&self.options.severity, kind, legacy, new);
                        if !result.is_consistent
                            && let (Some(expected), Some(severity)) =
                                (result.expected, result.severity)
                        {
                            mismatches.push(ConsistencyMismatch {
                                record_index,
                                record_id: record.record_id.clone(),
                                kind,
                                legacy: legacy.to_string(),
                                new: new.to_string(),
                                expected,
                                severity,
                            });
                        }
                    }
                    (Some(_), None) => needs.push(kind),
                    _ => {}
                }
            }

            if !needs.is_empty() {
                migration_candidates.push(MigrationCandidate {
                    record_index,
                    record_id: record.record_id.clone(),
                    needs,
                });
            }
        }

        debug!(
            mismatches = mismatches.len(),
            candidates = migration_candidates.len(),
            "field batch analyzed"
        );

        AnalysisSummary {
            summary_version: SUMMARY_VERSION.to_string(),
            total_records: records.len() as u64,
            fields: tallies.into_values().collect(),
            migration_candidates,
            mismatches,
        }
    }
}

/// Analyze a batch with default options.
pub fn analyze(records: &[FieldRecord]) -> AnalysisSummary {
    Analyzer::default().run(records)
}
