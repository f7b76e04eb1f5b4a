//! Read-only category listing.
//!
//! Categories are managed outside this service; products only reference
//! them by id. These endpoints let clients pick a valid `category_id`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories ordered by id |
//! | GET | `/api/categories/{id}` | No | Get category by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
