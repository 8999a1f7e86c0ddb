use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::{PriceQuote, PricingTable, QuoteRequest};
use crate::store::AppState;

pub(crate) async fn calculate_price(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> ApiResult<Json<PriceQuote>> {
    let Json(request) = payload?;
    let pricing = state.pricing().read().await;
    Ok(Json(pricing.quote(&request)))
}

pub(crate) async fn get_pricing(State(state): State<AppState>) -> Json<PricingTable> {
    Json(state.pricing().read().await.clone())
}

pub(crate) async fn replace_pricing(
    State(state): State<AppState>,
    payload: Result<Json<PricingTable>, JsonRejection>,
) -> ApiResult<Json<PricingTable>> {
    let Json(table) = payload?;
    table.validate().map_err(ApiError::InvalidInput)?;

    let mut pricing = state.pricing().write().await;
    *pricing = table;
    info!(
        "Pricing replaced: {} room, {} transport, {} ticket tiers",
        pricing.room.len(),
        pricing.transport.len(),
        pricing.ticket.len()
    );

    Ok(Json(pricing.clone()))
}
