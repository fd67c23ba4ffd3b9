// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity token middleware.
//!
//! The Telegram client sends its init data with every request. It is not
//! verified here; the upstream store receives it verbatim and decides.

use crate::error::AppError;
use crate::services::fuel_api::IDENTITY_HEADER;
use axum::{extract::Request, middleware::Next, response::Response};

/// Opaque per-session identity token of the caller.
#[derive(Debug, Clone)]
pub struct IdentityToken(pub String);

impl IdentityToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware that requires a non-empty identity token header.
pub async fn require_identity(mut request: Request, next: Next) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)?
        .to_string();

    request.extensions_mut().insert(IdentityToken(token));
    Ok(next.run(request).await)
}
