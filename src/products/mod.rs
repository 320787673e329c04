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
        .route("/product", post(handlers::create_product))
        .route("/allProducts", get(handlers::list_products))
        .route("/product/:id", get(handlers::get_product))
        .route("/product/:id", put(handlers::update_product))
        .route("/product/:id", delete(handlers::delete_product))
}
