//! Domain logic for the hiretrack recruitment dashboard.
//!
//! This crate has no database dependency. Entities, validation, the
//! headcount chart layout and the dashboard derivations all operate on
//! data passed in by the caller.

pub mod attrition;
pub mod bottleneck;
pub mod candidate;
pub mod dashboard;
pub mod error;
pub mod headcount;
pub mod headcount_chart;
pub mod interview;
pub mod metrics;
pub mod offer;
pub mod role;
pub mod sample_data;
pub mod ta_owner;
pub mod types;
pub mod validation;
