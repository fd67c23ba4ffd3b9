// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the fuel log. All require an identity token.

use crate::error::{AppError, Result};
use crate::middleware::IdentityToken;
use crate::models::{
    ConsumptionWindow, DeviationBadge, GradeOption, NewRefuelRecord, RefuelRecord,
    RefuelRecordView, Vehicle,
};
use crate::services::{
    classify_deviation, compute_consumption_window, default_grade, grade_options, select_latest,
    EntryPrefill,
};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// API routes (require the identity header).
/// The identity middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/vehicles", get(get_vehicles))
        .route("/api/fuel", get(get_fuel).post(post_fuel))
        .route("/api/fuel/summary", get(get_fuel_summary))
}

// ─── Vehicles ────────────────────────────────────────────────

/// List vehicles visible to the caller.
async fn get_vehicles(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<IdentityToken>,
) -> Result<Json<Vec<Vehicle>>> {
    let vehicles = state.fuel_api.list_vehicles(identity.as_str()).await?;
    Ok(Json(vehicles))
}

// ─── Refuel Records ──────────────────────────────────────────

#[derive(Deserialize)]
struct FuelQuery {
    vehicle_id: Option<String>,
    /// Maximum number of records requested from the store
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    100
}

const MAX_LIMIT: u32 = 500;
const MAX_VEHICLE_ID_LEN: usize = 64;

impl FuelQuery {
    /// Validated vehicle id and clamped limit.
    fn resolve(&self) -> Result<(&str, u32)> {
        let vehicle_id = self
            .vehicle_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing 'vehicle_id' parameter".to_string()))?;

        if vehicle_id.len() > MAX_VEHICLE_ID_LEN {
            return Err(AppError::BadRequest(
                "'vehicle_id' parameter is too long".to_string(),
            ));
        }

        Ok((vehicle_id, self.limit.clamp(1, MAX_LIMIT)))
    }
}

/// Get refuel records for a vehicle, most recent first.
async fn get_fuel(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<IdentityToken>,
    Query(params): Query<FuelQuery>,
) -> Result<Json<Vec<RefuelRecordView>>> {
    let (vehicle_id, limit) = params.resolve()?;

    let mut records = state
        .fuel_api
        .list_refuel_records(identity.as_str(), vehicle_id, limit)
        .await?;
    records.sort_by(|a, b| b.refuel_date.cmp(&a.refuel_date));

    Ok(Json(records.into_iter().map(RefuelRecordView::from).collect()))
}

/// Record a new refuel.
async fn post_fuel(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<IdentityToken>,
    Json(entry): Json<NewRefuelRecord>,
) -> Result<Json<serde_json::Value>> {
    entry.validate()?;

    let payload = entry.into_payload(chrono::Utc::now()).ok_or_else(|| {
        AppError::BadRequest("mileage, fuel_added and price_per_liter are required".to_string())
    })?;

    tracing::debug!(
        vehicle_id = %payload.vehicle_id,
        mileage = payload.mileage,
        fuel_added = payload.fuel_added,
        is_full = payload.is_full,
        "Creating refuel record"
    );

    let response = state
        .fuel_api
        .create_refuel_record(identity.as_str(), &payload)
        .await?;
    Ok(Json(response))
}

// ─── Consumption Summary ─────────────────────────────────────

/// Everything the entry screen needs for one vehicle.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct FuelSummaryResponse {
    pub vehicle: Vehicle,
    pub record_count: usize,
    /// Most recent refuel, if any
    pub latest: Option<RefuelRecord>,
    /// Values to prefill the next entry with
    pub prefill: Option<EntryPrefill>,
    /// Consumption between the two latest full-tank fills
    pub consumption: Option<ConsumptionWindow>,
    pub deviation: DeviationBadge,
    /// Full grade list flagged by what the vehicle accepts
    pub grades: Vec<GradeOption>,
    pub default_grade: Option<String>,
}

impl FuelSummaryResponse {
    /// Run the analytics over one vehicle's records.
    pub fn build(vehicle: Vehicle, records: &[RefuelRecord]) -> Self {
        let latest = select_latest(records).cloned();
        let prefill = latest.as_ref().map(EntryPrefill::from_latest);
        let consumption = compute_consumption_window(records);
        let deviation = classify_deviation(consumption.as_ref(), vehicle.planned_consumption);

        Self {
            record_count: records.len(),
            latest,
            prefill,
            consumption,
            deviation,
            grades: grade_options(&vehicle),
            default_grade: default_grade(&vehicle).map(str::to_string),
            vehicle,
        }
    }
}

/// Get consumption analytics for a vehicle.
async fn get_fuel_summary(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<IdentityToken>,
    Query(params): Query<FuelQuery>,
) -> Result<Json<FuelSummaryResponse>> {
    let (vehicle_id, limit) = params.resolve()?;

    let vehicle = state
        .fuel_api
        .list_vehicles(identity.as_str())
        .await?
        .into_iter()
        .find(|v| v.vehicle_id == vehicle_id)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

    let records = state
        .fuel_api
        .list_refuel_records(identity.as_str(), vehicle_id, limit)
        .await?;

    let summary = FuelSummaryResponse::build(vehicle, &records);

    tracing::debug!(
        vehicle_id,
        records = summary.record_count,
        l100 = ?summary.consumption.as_ref().map(|c| c.l100),
        deviation = ?summary.deviation.level,
        "Computed fuel summary"
    );

    Ok(Json(summary))
}
