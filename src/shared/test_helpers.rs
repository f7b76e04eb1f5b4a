use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use fake::faker::lorem::en::Word;
use fake::Fake;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::SaveProductDto;
use crate::features::products::models::{Product, ProductDraft};
use crate::features::products::repositories::ProductRepository;
use crate::features::products::{routes as products_routes, ProductService};

#[derive(Default)]
struct State {
    last_id: i32,
    rows: BTreeMap<i32, ProductDraft>,
    categories: HashMap<i32, String>,
}

/// Product store kept in memory with the same contract as the Postgres one:
/// ids come from a counter that never goes back, unknown categories are
/// rejected like a foreign key violation, and mutations on missing ids are
/// `NotFound`.
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<State>,
    calls: AtomicUsize,
    unavailable: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: &[(i32, &str)]) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for (id, name) in categories {
                state.categories.insert(*id, name.to_string());
            }
        }
        repo
    }

    /// Every call fails as if the backend could not be reached
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, State>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(AppError::Store(sqlx::Error::PoolTimedOut));
        }
        Ok(self.state.lock().unwrap())
    }
}

fn foreign_key_violation(category_id: i32) -> AppError {
    AppError::Store(sqlx::Error::Protocol(format!(
        "insert or update on table \"products\" violates foreign key constraint: category_id={}",
        category_id
    )))
}

fn check_category(state: &State, category_id: Option<i32>) -> Result<()> {
    match category_id {
        Some(id) if !state.categories.contains_key(&id) => Err(foreign_key_violation(id)),
        _ => Ok(()),
    }
}

fn joined(state: &State, id: i32, row: &ProductDraft) -> Product {
    let mut product = row.clone().into_product(id);
    product.category_name = row
        .category_id
        .and_then(|category_id| state.categories.get(&category_id).cloned());
    product
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let state = self.enter()?;
        Ok(state
            .rows
            .iter()
            .map(|(id, row)| joined(&state, *id, row))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product> {
        let state = self.enter()?;
        state
            .rows
            .get(&id)
            .map(|row| joined(&state, id, row))
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        let mut state = self.enter()?;
        check_category(&state, draft.category_id)?;

        state.last_id += 1;
        let id = state.last_id;
        state.rows.insert(id, draft.clone());
        Ok(draft.into_product(id))
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let mut state = self.enter()?;
        if !state.rows.contains_key(&product.id) {
            return Err(AppError::NotFound(format!(
                "Product {} not found",
                product.id
            )));
        }
        check_category(&state, product.category_id)?;

        state.rows.insert(
            product.id,
            ProductDraft {
                name: product.name.clone(),
                price: product.price,
                stock: product.stock,
                category_id: product.category_id,
            },
        );
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut state = self.enter()?;
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }
}

/// Random but valid product payload
pub fn fake_save_dto(category_id: Option<i32>) -> SaveProductDto {
    SaveProductDto {
        name: Word().fake::<String>(),
        price: (0..1_000_000).fake::<i32>(),
        stock: (0..1_000).fake::<i32>(),
        category_id,
    }
}

/// Product routes wired to an in-memory store
pub fn products_router(repo: Arc<InMemoryProductRepository>) -> Router {
    products_routes::routes(Arc::new(ProductService::new(repo)))
}
