//! Product catalog: CRUD over products with an optional category.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/produk` | No | List all products ordered by id |
//! | POST | `/api/produk` | No | Create a product |
//! | GET | `/api/produk/{id}` | No | Get a product with its category name |
//! | PUT | `/api/produk/{id}` | No | Replace name, price, stock and category |
//! | DELETE | `/api/produk/{id}` | No | Delete a product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgProductRepository, ProductRepository};
pub use services::ProductService;
