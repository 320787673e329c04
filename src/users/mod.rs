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
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/getProfile", get(handlers::get_profile))
        .route("/updateProfile", put(handlers::update_profile))
        .route("/deleteAccount", delete(handlers::delete_account))
}
