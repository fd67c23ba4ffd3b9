// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Latest refuel selection, used to prefill the next entry form.

use crate::models::RefuelRecord;
use crate::services::grades::is_known_grade;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Pick the most recent record by refuel date.
///
/// On equal dates the element scanned last wins.
pub fn select_latest(records: &[RefuelRecord]) -> Option<&RefuelRecord> {
    // `max_by_key` keeps the last of several equal maxima
    records.iter().max_by_key(|r| r.refuel_date)
}

/// Values copied from the latest refuel into a new entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct EntryPrefill {
    pub mileage: Option<f64>,
    pub price_per_liter: Option<f64>,
    pub fuel_added: Option<f64>,
    pub fuel_grade: Option<String>,
    pub is_full: Option<bool>,
}

impl EntryPrefill {
    pub fn from_latest(latest: &RefuelRecord) -> Self {
        Self {
            mileage: latest.mileage,
            price_per_liter: latest.price_per_liter,
            fuel_added: latest.fuel_added,
            // Only grades the picker can show
            fuel_grade: latest
                .fuel_grade
                .as_deref()
                .filter(|g| is_known_grade(g))
                .map(str::to_string),
            is_full: latest.is_full,
        }
    }
}
