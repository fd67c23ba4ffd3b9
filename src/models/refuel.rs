// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Refuel record models: raw upstream rows, normalized records, and new entries.

use crate::services::grades::is_known_grade;
use crate::time_utils::{format_utc_rfc3339, parse_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Refuel row exactly as the upstream store returned it.
///
/// Every field is kept as an untyped JSON value so that one malformed
/// field never fails deserialization of the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRefuelRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub vehicle_id: Value,
    #[serde(default)]
    pub refuel_date: Value,
    #[serde(default)]
    pub mileage: Value,
    #[serde(default)]
    pub fuel_added: Value,
    #[serde(default)]
    pub price_per_liter: Value,
    #[serde(default)]
    pub fuel_grade: Value,
    #[serde(default)]
    pub is_full: Value,
}

/// A normalized refuel event for one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct RefuelRecord {
    pub id: Option<i64>,
    pub vehicle_id: Option<String>,
    /// Refuel time; the Unix epoch if the source value was unparseable
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub refuel_date: DateTime<Utc>,
    /// Odometer reading (km)
    pub mileage: Option<f64>,
    /// Liters added
    pub fuel_added: Option<f64>,
    pub price_per_liter: Option<f64>,
    pub fuel_grade: Option<String>,
    pub is_full: Option<bool>,
}

impl RefuelRecord {
    /// Whether this refuel topped the tank up to capacity.
    pub fn is_full_tank(&self) -> bool {
        self.is_full == Some(true)
    }

    /// Total cost of the refuel. Missing values count as zero.
    pub fn cost(&self) -> f64 {
        self.fuel_added.unwrap_or(0.0) * self.price_per_liter.unwrap_or(0.0)
    }
}

/// Record listing entry with derived cost.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct RefuelRecordView {
    #[serde(flatten)]
    pub record: RefuelRecord,
    pub cost: f64,
}

impl From<RefuelRecord> for RefuelRecordView {
    fn from(record: RefuelRecord) -> Self {
        let cost = record.cost();
        Self { record, cost }
    }
}

/// New refuel entry submitted by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRefuelRecord {
    #[validate(length(min = 1, max = 64))]
    pub vehicle_id: String,
    #[validate(required, range(min = 0.0))]
    pub mileage: Option<f64>,
    #[validate(required, range(min = 0.0))]
    pub fuel_added: Option<f64>,
    #[validate(required, range(min = 0.0))]
    pub price_per_liter: Option<f64>,
    #[validate(custom(function = "validate_fuel_grade"))]
    pub fuel_grade: Option<String>,
    #[serde(default)]
    pub is_full: bool,
    /// RFC 3339 timestamp; defaults to the submission time
    #[validate(custom(function = "validate_refuel_date"))]
    pub refuel_date: Option<String>,
}

impl NewRefuelRecord {
    /// Build the upstream payload. Returns `None` if a required value is missing.
    pub fn into_payload(self, now: DateTime<Utc>) -> Option<RefuelPayload> {
        let refuel_date = match self.refuel_date.as_deref() {
            Some(raw) => format_utc_rfc3339(parse_timestamp(raw)?),
            None => format_utc_rfc3339(now),
        };

        Some(RefuelPayload {
            vehicle_id: self.vehicle_id,
            mileage: self.mileage?,
            fuel_added: self.fuel_added?,
            price_per_liter: self.price_per_liter?,
            fuel_grade: self.fuel_grade,
            is_full: self.is_full,
            refuel_date,
        })
    }
}

fn validate_fuel_grade(grade: &str) -> Result<(), ValidationError> {
    if is_known_grade(grade) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_fuel_grade"))
    }
}

fn validate_refuel_date(raw: &str) -> Result<(), ValidationError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_refuel_date")),
    }
}

/// Body of a create request sent to the upstream store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefuelPayload {
    pub vehicle_id: String,
    pub mileage: f64,
    pub fuel_added: f64,
    pub price_per_liter: f64,
    pub fuel_grade: Option<String>,
    pub is_full: bool,
    pub refuel_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_entry() -> NewRefuelRecord {
        NewRefuelRecord {
            vehicle_id: "car-1".to_string(),
            mileage: Some(10_500.0),
            fuel_added: Some(25.0),
            price_per_liter: Some(56.4),
            fuel_grade: Some("95".to_string()),
            is_full: true,
            refuel_date: Some("2024-05-01T08:15:00+03:00".to_string()),
        }
    }

    #[test]
    fn test_cost_treats_missing_as_zero() {
        let record = RefuelRecord {
            id: Some(1),
            vehicle_id: None,
            refuel_date: DateTime::<Utc>::UNIX_EPOCH,
            mileage: None,
            fuel_added: Some(40.0),
            price_per_liter: None,
            fuel_grade: None,
            is_full: None,
        };
        assert_eq!(record.cost(), 0.0);
        assert!(!record.is_full_tank());
    }

    #[test]
    fn test_valid_entry_passes() {
        assert!(new_entry().validate().is_ok());
    }

    #[test]
    fn test_missing_mileage_rejected() {
        let entry = NewRefuelRecord {
            mileage: None,
            ..new_entry()
        };
        let errors = entry.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mileage"));
    }

    #[test]
    fn test_negative_liters_rejected() {
        let entry = NewRefuelRecord {
            fuel_added: Some(-1.0),
            ..new_entry()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_unknown_grade_rejected() {
        let entry = NewRefuelRecord {
            fuel_grade: Some("A-76".to_string()),
            ..new_entry()
        };
        let errors = entry.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("fuel_grade"));
    }

    #[test]
    fn test_payload_normalizes_date_to_utc() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let payload = new_entry().into_payload(now).unwrap();
        assert_eq!(payload.refuel_date, "2024-05-01T05:15:00Z");
        assert_eq!(payload.mileage, 10_500.0);
    }

    #[test]
    fn test_payload_defaults_date_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap();
        let entry = NewRefuelRecord {
            refuel_date: None,
            ..new_entry()
        };
        let payload = entry.into_payload(now).unwrap();
        assert_eq!(payload.refuel_date, "2024-06-01T07:00:00Z");
    }
}
