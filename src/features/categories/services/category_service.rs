use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::shared::validation::parse_id;

/// Service for category lookups
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list categories: {:?}", e);
                    AppError::Store(e)
                })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by id
    pub async fn get_by_id(&self, raw_id: &str) -> Result<CategoryResponseDto> {
        let id = parse_id(raw_id, "category")?;

        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get category by id: {:?}", e);
                    AppError::Store(e)
                })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
