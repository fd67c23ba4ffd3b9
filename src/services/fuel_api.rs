// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the upstream fuel store (webhook backend).
//!
//! Handles:
//! - Vehicle list fetching
//! - Refuel record fetching and creation
//! - Service token and pass-through of the caller's identity token
//!
//! Responses are normalized at this boundary; callers get typed models.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{RefuelPayload, RefuelRecord, Vehicle};
use crate::services::normalize::{normalize_records, normalize_vehicles, rows_from_payload};
use serde_json::Value;
use std::time::Duration;

/// Header carrying the service token expected by the upstream store.
pub const SERVICE_TOKEN_HEADER: &str = "x-auth-token";
/// Header carrying the caller's opaque identity token.
pub const IDENTITY_HEADER: &str = "x-tg-init-data";

/// Upstream fuel store client.
#[derive(Clone)]
pub struct FuelApiClient {
    http: reqwest::Client,
    fuel_url: String,
    vehicles_url: String,
    service_token: String,
}

impl FuelApiClient {
    /// Create a client from application config.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            fuel_url: config.fuel_webhook_url.clone(),
            vehicles_url: config.vehicles_webhook_url.clone(),
            service_token: config.webhook_token.clone(),
        })
    }

    /// List the vehicles visible to the caller.
    pub async fn list_vehicles(&self, identity: &str) -> Result<Vec<Vehicle>, AppError> {
        let payload = self.get_json(&self.vehicles_url, identity, &[]).await?;
        let vehicles = normalize_vehicles(rows_from_payload(payload));
        tracing::debug!(count = vehicles.len(), "Fetched vehicles");
        Ok(vehicles)
    }

    /// List refuel records for a vehicle. Order is whatever the store returns.
    pub async fn list_refuel_records(
        &self,
        identity: &str,
        vehicle_id: &str,
        limit: u32,
    ) -> Result<Vec<RefuelRecord>, AppError> {
        let params = [
            ("limit", limit.to_string()),
            ("vehicle_id", vehicle_id.to_string()),
        ];
        let payload = self.get_json(&self.fuel_url, identity, &params).await?;
        let records = normalize_records(rows_from_payload(payload));
        tracing::debug!(vehicle_id, limit, count = records.len(), "Fetched refuel records");
        Ok(records)
    }

    /// Store a new refuel record.
    ///
    /// Returns the upstream JSON response, or `{"ok": true}` if the store
    /// answered success without a JSON body.
    pub async fn create_refuel_record(
        &self,
        identity: &str,
        payload: &RefuelPayload,
    ) -> Result<Value, AppError> {
        let response = self
            .http
            .post(&self.fuel_url)
            .header(SERVICE_TOKEN_HEADER, &self.service_token)
            .header(IDENTITY_HEADER, identity)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_response(response).await?;
        let body = response.text().await.map_err(transport_error)?;

        tracing::info!(vehicle_id = %payload.vehicle_id, "Refuel record created");
        Ok(serde_json::from_str(&body).unwrap_or_else(|_| serde_json::json!({ "ok": true })))
    }

    /// Generic GET request with JSON response.
    async fn get_json(
        &self,
        url: &str,
        identity: &str,
        params: &[(&str, String)],
    ) -> Result<Value, AppError> {
        let response = self
            .http
            .get(url)
            .header(SERVICE_TOKEN_HEADER, &self.service_token)
            .header(IDENTITY_HEADER, identity)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        check_response(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Upstream {
                status: None,
                message: format!("JSON parse error: {}", e),
            })
    }
}

/// Pass through successful responses, convert the rest into errors.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %body, "Upstream request failed");

    Err(AppError::Upstream {
        status: Some(status.as_u16()),
        message: if body.is_empty() {
            format!("HTTP {}", status.as_u16())
        } else {
            body
        },
    })
}

fn transport_error(e: reqwest::Error) -> AppError {
    tracing::warn!(error = %e, "Upstream transport error");
    AppError::Upstream {
        status: None,
        message: e.to_string(),
    }
}
