use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/category", post(handlers::create_category))
        .route("/allCategories", get(handlers::list_categories))
        .route("/category/:id", get(handlers::get_category))
        .route("/category/:id", put(handlers::update_category))
        .route("/category/:id", delete(handlers::delete_category))
}
