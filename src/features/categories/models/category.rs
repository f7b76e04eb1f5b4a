use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
