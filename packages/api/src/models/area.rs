use sqlx::FromRow;
use store::Area;

/// Row from the `areas` table.
#[derive(Debug, Clone, FromRow)]
pub struct AreaRow {
    pub id: i32,
    pub name: String,
}

impl AreaRow {
    pub fn into_area(self) -> Area {
        Area {
            id: self.id,
            name: self.name,
        }
    }
}
