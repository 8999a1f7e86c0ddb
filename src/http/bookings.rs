use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::ApiResult;
use crate::models::{Booking, BookingReceipt};
use crate::store::AppState;

pub(crate) async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BookingReceipt>)> {
    let Json(details) = payload?;
    let booking = state.bookings().write().await.create(details);
    Ok((StatusCode::CREATED, Json(BookingReceipt::for_booking(&booking))))
}

pub(crate) async fn list_bookings(State(state): State<AppState>) -> Json<Vec<Booking>> {
    let bookings = state.bookings().read().await;
    Json(bookings.list().to_vec())
}
