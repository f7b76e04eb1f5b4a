use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{Product, ProductDraft};

/// Persistence contract for products.
///
/// Implementations report a missing row as `AppError::NotFound` and any
/// backend failure, including a dangling `category_id`, as
/// `AppError::Store`. Nothing is retried.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by ascending id, with category names joined in
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> Result<Product>;

    /// Insert the draft and return it with the assigned id.
    /// `category_name` is not populated on the returned value.
    async fn create(&self, draft: ProductDraft) -> Result<Product>;

    /// Replace name, price, stock and category of an existing product
    async fn update(&self, product: &Product) -> Result<()>;

    async fn delete(&self, id: i32) -> Result<()>;
}

const LIST_PRODUCTS: &str = r#"
    SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name AS category_name
    FROM products p
    LEFT JOIN categories c ON p.category_id = c.id
    ORDER BY p.id
"#;

const GET_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name AS category_name
    FROM products p
    LEFT JOIN categories c ON p.category_id = c.id
    WHERE p.id = $1
"#;

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, price, stock, category_id)
    VALUES ($1, $2, $3, $4)
    RETURNING id
"#;

const UPDATE_PRODUCT: &str = r#"
    UPDATE products
    SET name = $1, price = $2, stock = $3, category_id = $4
    WHERE id = $5
"#;

const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = $1";

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}

/// Postgres-backed product store over an injected pool
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(LIST_PRODUCTS)
            .fetch_all(&self.pool)
            .await?;

        Ok(products.into_iter().map(Product::normalized).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product> {
        sqlx::query_as::<_, Product>(GET_PRODUCT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Product::normalized)
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        // INSERT ... RETURNING assigns and reports the id in one statement
        let id = sqlx::query_scalar::<_, i32>(INSERT_PRODUCT)
            .bind(&draft.name)
            .bind(draft.price)
            .bind(draft.stock)
            .bind(draft.category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(draft.into_product(id))
    }

    async fn update(&self, product: &Product) -> Result<()> {
        // Existence is the affected-row count of this same statement
        let result = sqlx::query(UPDATE_PRODUCT)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .bind(product.category_id)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(product.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query(DELETE_PRODUCT)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
