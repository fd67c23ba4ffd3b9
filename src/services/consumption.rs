// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Consumption between the two most recent full-tank fills.
//!
//! Only a full-to-full interval bounds the fuel burned over a known
//! distance. Partial refuels inside the interval are folded into the
//! liters total.

use crate::models::{ConsumptionWindow, RefuelRecord};

/// Compute the latest full-to-full consumption window.
///
/// Returns `None` with fewer than two full-tank records, or when the
/// mileage between the last two is missing or not strictly increasing.
/// Liters are summed over records in `(prev.refuel_date, last.refuel_date]`.
pub fn compute_consumption_window(records: &[RefuelRecord]) -> Option<ConsumptionWindow> {
    let mut sorted: Vec<&RefuelRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.refuel_date);

    let fulls: Vec<&RefuelRecord> = sorted.iter().copied().filter(|r| r.is_full_tank()).collect();
    let [.., prev, last] = fulls.as_slice() else {
        return None;
    };

    let distance = last.mileage? - prev.mileage?;
    if distance <= 0.0 {
        return None;
    }

    let (from, to) = (prev.refuel_date, last.refuel_date);
    let liters: f64 = sorted
        .iter()
        .filter(|r| r.refuel_date > from && r.refuel_date <= to)
        .map(|r| r.fuel_added.unwrap_or(0.0))
        .fold(0.0, |acc, l| acc + l);

    Some(ConsumptionWindow {
        from,
        to,
        distance,
        liters,
        l100: liters / distance * 100.0,
    })
}
