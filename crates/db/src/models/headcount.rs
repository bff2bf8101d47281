use sqlx::FromRow;

use hiretrack_core::headcount::HeadcountRecord;
use hiretrack_core::types::DbId;

/// A row from the `headcount_summary` table. Name lists may be NULL.
#[derive(Debug, Clone, FromRow)]
pub struct HeadcountRow {
    pub id: DbId,
    pub month: String,
    pub existing_headcount: i32,
    pub new_joinees: i32,
    pub joiner_names: Option<String>,
    pub exits: i32,
    pub exiter_names: Option<String>,
    pub expected_joiners: i32,
    pub expected_joiner_roles: Option<String>,
}

impl From<HeadcountRow> for HeadcountRecord {
    fn from(row: HeadcountRow) -> Self {
        HeadcountRecord {
            id: row.id,
            month: row.month,
            existing_headcount: row.existing_headcount,
            new_joinees: row.new_joinees,
            joiner_names: row.joiner_names.unwrap_or_default(),
            exits: row.exits,
            exiter_names: row.exiter_names.unwrap_or_default(),
            expected_joiners: row.expected_joiners,
            expected_joiner_roles: row.expected_joiner_roles.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_name_lists_become_empty() {
        let record = HeadcountRecord::from(HeadcountRow {
            id: DbId::from_u128(1),
            month: "Jan'25".to_string(),
            existing_headcount: 45,
            new_joinees: 0,
            joiner_names: None,
            exits: 1,
            exiter_names: Some("Kiran".to_string()),
            expected_joiners: 0,
            expected_joiner_roles: None,
        });
        assert_eq!(record.joiner_names, "");
        assert_eq!(record.exiter_names, "Kiran");
        assert_eq!(record.expected_joiner_roles, "");
    }
}
