use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    categories::{
        dto::{CategoryListResponse, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest},
        repo::Category,
    },
    error::ApiError,
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let category = Category::create(&state.db, &payload.name).await?;
    info!(category_id = %category.id, "category created");
    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse {
            message: "Category created successfully",
            category,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = Category::list(&state.db).await?;
    Ok(Json(CategoryListResponse {
        message: "All Categories",
        categories,
    }))
}

#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    let category = Category::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Category"))?;
    Ok(Json(category))
}

#[instrument(skip(state, payload))]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = Category::update(&state.db, id, payload.name.as_deref())
        .await?
        .ok_or(ApiError::NotFound("Category"))?;
    info!(category_id = %category.id, "category updated");
    Ok(Json(CategoryResponse {
        message: "Category updated successfully",
        category,
    }))
}

#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = Category::delete(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Category"))?;
    info!(category_id = %category.id, "category deleted");
    Ok(Json(CategoryResponse {
        message: "Category deleted successfully",
        category,
    }))
}
