use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::SaveProductDto;
use crate::features::products::models::Product;
use crate::features::products::ProductRepository;
use crate::shared::validation::{parse_id, validate_dto};

/// Service for product operations.
///
/// Parses identifiers and validates payloads before the repository is
/// touched; repository errors pass through unchanged.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// List all products ordered by id
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        self.repository
            .list_all()
            .await
            .inspect_err(|e| log_failure("list products", e))
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<Product> {
        let id = parse_id(raw_id, "product")?;

        self.repository
            .get_by_id(id)
            .await
            .inspect_err(|e| log_failure("get product", e))
    }

    /// Create a product. The returned value carries no category name.
    pub async fn create(&self, dto: SaveProductDto) -> Result<Product> {
        let dto = dto.normalized();
        validate_dto(&dto)?;

        let product = self
            .repository
            .create(dto.into_draft())
            .await
            .inspect_err(|e| log_failure("create product", e))?;

        tracing::info!(
            "Product created: id={}, category_id={:?}",
            product.id,
            product.category_id
        );

        Ok(product)
    }

    /// Replace every mutable field of product `raw_id` and return the written values
    pub async fn update(&self, raw_id: &str, dto: SaveProductDto) -> Result<Product> {
        let id = parse_id(raw_id, "product")?;
        let dto = dto.normalized();
        validate_dto(&dto)?;

        let product = dto.into_draft().into_product(id);
        self.repository
            .update(&product)
            .await
            .inspect_err(|e| log_failure("update product", e))?;

        tracing::info!(
            "Product updated: id={}, category_id={:?}",
            product.id,
            product.category_id
        );

        Ok(product)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let id = parse_id(raw_id, "product")?;

        self.repository
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete product", e))?;

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }
}

fn log_failure(operation: &str, err: &AppError) {
    match err {
        AppError::NotFound(msg) => tracing::warn!("Failed to {}: {}", operation, msg),
        other => tracing::error!("Failed to {}: {:?}", operation, other),
    }
}
