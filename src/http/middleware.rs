use std::time::Instant;

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, info, Instrument};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Open a span per request and log its outcome
pub(crate) async fn request_tracing_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request.uri().path().to_string();

    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed = started.elapsed();

    let _entered = span.enter();
    if method == Method::OPTIONS {
        debug!("{} {} -> {} ({:?})", method, route, response.status(), elapsed);
    } else {
        info!("{} {} -> {} ({:?})", method, route, response.status(), elapsed);
    }

    response
}

/// Allow cross-origin requests from any origin
pub(crate) async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let requested_headers = request.headers().get(ACCESS_CONTROL_REQUEST_HEADERS).cloned();

        let mut response = StatusCode::NO_CONTENT.into_response();
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            requested_headers.unwrap_or_else(|| HeaderValue::from_static("content-type")),
        );
        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("86400"));
        return response;
    }

    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}
