use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    products::{
        dto::{CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest},
        repo::Product,
    },
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = Product::create(
        &state.db,
        &payload.name,
        payload.description.as_deref(),
        payload.price,
        payload.category_id,
    )
    .await?;
    info!(product_id = %product.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product created successfully",
            product,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = Product::list(&state.db).await?;
    Ok(Json(ProductListResponse {
        message: "All Products",
        products,
    }))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = Product::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    Ok(Json(product))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = Product::update(
        &state.db,
        id,
        payload.name.as_deref(),
        payload.price,
        payload.description.as_ref().map(|d| d.as_deref()),
        payload.category_id,
    )
    .await?
    .ok_or(ApiError::NotFound("Product"))?;
    info!(product_id = %product.id, "product updated");
    Ok(Json(ProductResponse {
        message: "Product updated successfully",
        product,
    }))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = Product::delete(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    info!(product_id = %product.id, "product deleted");
    Ok(Json(ProductResponse {
        message: "Product deleted successfully",
        product,
    }))
}
