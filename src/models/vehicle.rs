// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Vehicle reference data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Vehicle row exactly as the upstream store returned it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVehicle {
    #[serde(default)]
    pub vehicle_id: Value,
    #[serde(default)]
    pub vehicle_name: Value,
    #[serde(default)]
    pub engine_type: Value,
    #[serde(default)]
    pub engine_cc: Value,
    #[serde(default)]
    pub fuel_capacity: Value,
    #[serde(default)]
    pub allowed_overflow: Value,
    #[serde(default)]
    pub planned_consumption: Value,
    #[serde(default)]
    pub low_fuel_threshold: Value,
    #[serde(default)]
    pub fuel_grade: Value,
}

/// A vehicle the user logs refuels for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub engine_type: Option<String>,
    pub engine_cc: Option<f64>,
    /// Tank capacity (liters)
    pub fuel_capacity: Option<f64>,
    /// Extra liters that fit above nominal capacity
    pub allowed_overflow: Option<f64>,
    /// Target consumption (L/100km)
    pub planned_consumption: Option<f64>,
    /// Low fuel warning level (liters)
    pub low_fuel_threshold: Option<f64>,
    /// Allowed fuel grades, in the owner's order of preference
    pub fuel_grade: Vec<String>,
}

/// One entry of the fuel grade picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct GradeOption {
    pub code: String,
    pub allowed: bool,
}
