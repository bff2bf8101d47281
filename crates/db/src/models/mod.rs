//! Row types for each table and their conversions to domain entities.
//!
//! Rows mirror the snake_case columns. Stage and status columns are stored
//! as their display labels and parsed on the way out, so a row with an
//! unknown label fails conversion instead of being silently coerced.

pub mod attrition;
pub mod bottleneck;
pub mod candidate;
pub mod headcount;
pub mod interview;
pub mod offer;
pub mod role;
pub mod ta_owner;
