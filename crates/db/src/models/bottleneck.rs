use sqlx::FromRow;

use hiretrack_core::bottleneck::Bottleneck;
use hiretrack_core::types::DbId;

/// A row from the `bottlenecks` table.
#[derive(Debug, Clone, FromRow)]
pub struct BottleneckRow {
    pub id: DbId,
    pub description: String,
    pub role_title: String,
}

impl From<BottleneckRow> for Bottleneck {
    fn from(row: BottleneckRow) -> Self {
        Bottleneck {
            id: row.id,
            description: row.description,
            role_title: row.role_title,
        }
    }
}
