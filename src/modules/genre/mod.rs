use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use crate::common::async_handler::async_handler;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod memory;
pub mod model;
pub mod repository;
pub mod service;

pub fn router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(async_handler(handler::list_genres)))
        .route("/{id}", get(async_handler(handler::get_genre)));

    let authenticated_routes = Router::new()
        .route("/", post(async_handler(handler::create_genre)))
        .route("/{id}", put(async_handler(handler::update_genre)))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::auth_middleware,
        ));

    // Layers run bottom-up: auth first, then the admin check.
    let admin_routes = Router::new()
        .route("/{id}", delete(async_handler(handler::delete_genre)))
        .route_layer(middleware::from_fn(crate::middleware::role::admin_guard))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware,
        ));

    public_routes.merge(authenticated_routes).merge(admin_routes)
}
