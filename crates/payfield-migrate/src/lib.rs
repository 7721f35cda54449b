//! Curated migration mappings and legacy/new consistency checks.
//!
//! The tables here are reference data maintained ahead of the migration;
//! the consistency check confirms known migrations, it does not derive new
//! identifiers from legacy ones.

pub mod consistency;
pub mod mappings;

pub use consistency::{
    ConsistencyResult, MismatchSeverity, SeverityPolicy, check_consistency, check_consistency_with,
};
pub use mappings::{expected_new_bin, expected_new_value};
