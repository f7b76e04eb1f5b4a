use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{ProductResponseDto, SaveProductDto};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// List all products
///
/// Products are ordered by id. Category fields are omitted for products without a category.
#[utoipa::path(
    get,
    path = "/api/produk",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 500, description = "Database error")
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products: Vec<ProductResponseDto> = service
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::total(products.len());

    Ok(Json(ApiResponse::success(Some(products), None, Some(meta))))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/produk/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(product.into()), None, None)))
}

/// Create a product
///
/// The response does not include `category_name`; fetch the product again to get it.
#[utoipa::path(
    post,
    path = "/api/produk",
    request_body = SaveProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Database error, including an unknown category_id")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<SaveProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    let product = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(product.into()),
            Some("Produk berhasil ditambahkan".to_string()),
            None,
        )),
    ))
}

/// Replace a product
///
/// Name, price, stock and category are all overwritten; sending no `category_id` clears it.
#[utoipa::path(
    put,
    path = "/api/produk/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = SaveProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<SaveProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.update(&id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(product.into()),
        Some("Produk berhasil diperbarui".to_string()),
        None,
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/produk/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Produk berhasil dihapus".to_string()),
        None,
    )))
}
