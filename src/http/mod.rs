mod bookings;
mod games;
mod middleware;
mod pricing;

use axum::routing::{get, post};
use axum::Router;

use crate::store::AppState;

/// Build the API router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/games", get(games::list_games).post(games::add_game))
        .route(
            "/api/games/{id}",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        .route("/api/calculate-price", post(pricing::calculate_price))
        .route("/api/booking", post(bookings::create_booking))
        .route("/api/bookings", get(bookings::list_bookings))
        .route(
            "/api/pricing",
            get(pricing::get_pricing).put(pricing::replace_pricing),
        )
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(axum::middleware::from_fn(
            middleware::request_tracing_middleware,
        ))
        .with_state(state)
}
