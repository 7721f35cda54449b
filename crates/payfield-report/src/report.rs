use payfield_core::{FieldKind, FormatVariant};
use payfield_migrate::MismatchSeverity;

use crate::metrics::AnalysisSummary;

/// Render a deterministic markdown report from an analysis summary.
pub fn render_report(summary: &AnalysisSummary) -> String {
    let mut lines = Vec::new();

    lines.push("# Field Migration Analysis Report".to_string());
    lines.push(String::new());
    lines.push("## Batch summary".to_string());
    lines.push(format!("- summary_version: {}", summary.summary_version));
    lines.push(format!("- total_records: {}", summary.total_records));
    lines.push(format!(
        "- migration_candidates: {}",
        summary.migration_candidates.len()
    ));
    lines.push(format!("- mismatches: {}", summary.mismatches.len()));
    lines.push(String::new());

    lines.push("## Field validation".to_string());
    lines.push("| field | variant | valid | invalid |".to_string());
    lines.push("| --- | --- | --- | --- |".to_string());
    for counts in &summary.fields {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            counts.kind.label(),
            variant_label(counts.variant),
            counts.valid,
            counts.invalid
        ));
    }
    lines.push(String::new());

    let sampled: Vec<_> = summary
        .fields
        .iter()
        .filter(|counts| !counts.sample_violations.is_empty())
        .collect();
    if !sampled.is_empty() {
        lines.push("## Sample violations".to_string());
        for counts in sampled {
            for message in &counts.sample_violations {
                lines.push(format!(
                    "- {} ({}): {}",
                    counts.kind.label(),
                    variant_label(counts.variant),
                    message
                ));
            }
        }
        lines.push(String::new());
    }

    if !summary.mismatches.is_empty() {
        lines.push("## Consistency mismatches".to_string());
        for mismatch in &summary.mismatches {
            let id = mismatch
                .record_id
                .as_ref()
                .map(|id| format!(" ({id})"))
                .unwrap_or_default();
            lines.push(format!(
                "- record {}{}: {} '{}' -> '{}', expected '{}' [{}]",
                mismatch.record_index,
                id,
                mismatch.kind.label(),
                mismatch.legacy,
                mismatch.new,
                mismatch.expected,
                severity_label(mismatch.severity)
            ));
        }
        lines.push(String::new());
    }

    if !summary.migration_candidates.is_empty() {
        lines.push("## Migration candidates".to_string());
        for candidate in &summary.migration_candidates {
            let id = candidate
                .record_id
                .as_ref()
                .map(|id| format!(" ({id})"))
                .unwrap_or_default();
            let needs: Vec<_> = candidate
                .needs
                .iter()
                .map(|kind| kind.label())
                .collect();
            lines.push(format!(
                "- record {}{}: missing new-format {}",
                candidate.record_index,
                id,
                needs.join(", ")
            ));
        }
        lines.push(String::new());
    }

    lines.push("## Recommendations".to_string());
    lines.extend(recommendations(summary));
    lines.join("\n")
}

fn variant_label(variant: FormatVariant) -> &'static str {
    match variant {
        FormatVariant::Legacy => "legacy",
        FormatVariant::New => "new",
    }
}

fn severity_label(severity: MismatchSeverity) -> &'static str {
    match severity {
        MismatchSeverity::Informational => "informational",
        MismatchSeverity::Blocking => "blocking",
    }
}

fn recommendations(summary: &AnalysisSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let mismatched = |kind: FieldKind| summary.mismatches.iter().any(|m| m.kind == kind);

    if mismatched(FieldKind::Bin) {
        lines.push("- review bin number migration logic to ensure consistency.".to_string());
    }
    if mismatched(FieldKind::ProviderId) {
        lines.push(
            "- verify provider ID migration mapping against established patterns.".to_string(),
        );
    }
    if mismatched(FieldKind::ProductServiceId) {
        lines.push("- review product/service migration mapping for consistency.".to_string());
    }
    if !summary.migration_candidates.is_empty() {
        lines.push("- backfill new-format values for migration candidate records.".to_string());
    }
    if summary.fields.iter().any(|counts| counts.invalid > 0) {
        lines.push("- correct invalid field values before migrating.".to_string());
    }
    if lines.is_empty() {
        lines.push("- no issues detected; compare summaries across batches for drift.".to_string());
    }
    lines
}
