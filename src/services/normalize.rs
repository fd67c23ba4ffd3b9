// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Boundary normalization of loosely typed upstream JSON.
//!
//! The upstream store returns rows with numbers as strings, missing keys,
//! and the odd garbage value. Everything is coerced here, field by field,
//! so the analytics code only ever sees [`RefuelRecord`] and [`Vehicle`].
//! A malformed field becomes `None`; it never rejects the row.

use crate::models::{RawRefuelRecord, RawVehicle, RefuelRecord, Vehicle};
use crate::time_utils::parse_timestamp_lenient;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Split an upstream response body into rows.
///
/// Webhook backends answer a single-row result with a bare object instead
/// of a one-element array.
pub fn rows_from_payload(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(rows) => rows,
        Value::Object(_) => vec![payload],
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(kind = json_kind(&other), "Unexpected upstream payload shape");
            Vec::new()
        }
    }
}

/// Normalize refuel rows. Rows that are not JSON objects are skipped.
pub fn normalize_records(rows: Vec<Value>) -> Vec<RefuelRecord> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<RawRefuelRecord>(row) {
            Ok(raw) => Some(normalize_record(raw)),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed refuel row");
                None
            }
        })
        .collect()
}

/// Normalize a single refuel row.
pub fn normalize_record(raw: RawRefuelRecord) -> RefuelRecord {
    RefuelRecord {
        id: coerce_id(&raw.id),
        vehicle_id: coerce_string(&raw.vehicle_id),
        refuel_date: coerce_timestamp(&raw.refuel_date),
        mileage: coerce_amount(&raw.mileage),
        fuel_added: coerce_amount(&raw.fuel_added),
        price_per_liter: coerce_amount(&raw.price_per_liter),
        fuel_grade: coerce_string(&raw.fuel_grade),
        is_full: coerce_bool(&raw.is_full),
    }
}

/// Normalize vehicle rows. Vehicles without an id cannot be selected and are dropped.
pub fn normalize_vehicles(rows: Vec<Value>) -> Vec<Vehicle> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<RawVehicle>(row) {
            Ok(raw) => normalize_vehicle(raw),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed vehicle row");
                None
            }
        })
        .collect()
}

/// Normalize a single vehicle row.
pub fn normalize_vehicle(raw: RawVehicle) -> Option<Vehicle> {
    let vehicle_id = coerce_string(&raw.vehicle_id)?;
    let vehicle_name = coerce_string(&raw.vehicle_name).unwrap_or_else(|| vehicle_id.clone());

    let fuel_grade = match &raw.fuel_grade {
        Value::Array(grades) => grades.iter().filter_map(coerce_string).collect(),
        _ => Vec::new(),
    };

    Some(Vehicle {
        vehicle_id,
        vehicle_name,
        engine_type: coerce_string(&raw.engine_type),
        engine_cc: coerce_amount(&raw.engine_cc),
        fuel_capacity: coerce_amount(&raw.fuel_capacity),
        allowed_overflow: coerce_amount(&raw.allowed_overflow),
        planned_consumption: coerce_amount(&raw.planned_consumption),
        low_fuel_threshold: coerce_amount(&raw.low_fuel_threshold),
        fuel_grade,
    })
}

/// Finite, non-negative number from a JSON number or numeric string.
fn coerce_amount(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}

fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn coerce_timestamp(value: &Value) -> DateTime<Utc> {
    match value {
        Value::String(s) => parse_timestamp_lenient(s),
        _ => DateTime::<Utc>::UNIX_EPOCH,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
