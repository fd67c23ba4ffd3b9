// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fuel grades: the fixed list of known codes and per-vehicle permission.

use crate::models::{GradeOption, Vehicle};
use std::collections::BTreeSet;

/// Every grade code the app knows about, in display order.
pub const GRADE_UNIVERSE: [&str; 16] = [
    "80", "92", "92+", "95", "95+", "98", "98+", "100", "D", "DW", "DA", "E10", "E85", "H2",
    "CNG", "LPG",
];

pub fn is_known_grade(code: &str) -> bool {
    GRADE_UNIVERSE.contains(&code)
}

/// Grades the vehicle accepts.
pub fn allowed_grades(vehicle: &Vehicle) -> BTreeSet<String> {
    vehicle.fuel_grade.iter().cloned().collect()
}

/// The full grade list with each code flagged by whether the vehicle accepts it.
pub fn grade_options(vehicle: &Vehicle) -> Vec<GradeOption> {
    let allowed = allowed_grades(vehicle);
    GRADE_UNIVERSE
        .iter()
        .map(|code| GradeOption {
            code: code.to_string(),
            allowed: allowed.contains(*code),
        })
        .collect()
}

/// Grade selected when the user hasn't picked one yet.
///
/// This is the first grade in the vehicle's own list, not in display order.
/// `None` if the vehicle lists no grades or its first grade is unknown.
pub fn default_grade(vehicle: &Vehicle) -> Option<&str> {
    vehicle
        .fuel_grade
        .first()
        .map(String::as_str)
        .filter(|g| is_known_grade(g))
}
