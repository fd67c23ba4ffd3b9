// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Security headers middleware.
//!
//! The app runs inside the Telegram client, so framing is restricted to
//! Telegram's web origins instead of being denied outright.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

const FRAME_ANCESTORS: &str =
    "frame-ancestors 'self' https://web.telegram.org https://*.telegram.org";

/// Add security headers to all responses.
pub async fn add_security_headers(req: Request, next: Next) -> Response {
    let is_api = req.uri().path().starts_with("/api/");
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static(FRAME_ANCESTORS),
    );
    headers.insert("Referrer-Policy", HeaderValue::from_static("no-referrer"));

    // Fuel logs are per-user; never let a shared cache keep them
    if is_api {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    response
}
