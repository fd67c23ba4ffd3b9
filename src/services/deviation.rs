// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Classification of actual consumption against the planned rate.

use crate::models::{ConsumptionWindow, DeviationBadge, DeviationLevel, Direction};

/// Relative deviation still considered on plan (inclusive).
pub const NORMAL_BAND: f64 = 0.07;
/// Relative deviation still considered elevated rather than severe (inclusive).
pub const ELEVATED_BAND: f64 = 0.15;

/// Classify the window's L/100km against `planned_consumption`.
///
/// A missing window or a missing/non-positive plan yields
/// [`DeviationBadge::NO_PLAN`].
pub fn classify_deviation(
    window: Option<&ConsumptionWindow>,
    planned_consumption: Option<f64>,
) -> DeviationBadge {
    let (Some(window), Some(planned)) = (window, planned_consumption) else {
        return DeviationBadge::NO_PLAN;
    };
    if !planned.is_finite() || planned <= 0.0 {
        return DeviationBadge::NO_PLAN;
    }

    classify_relative((window.l100 - planned) / planned)
}

/// Classify a relative deviation `(actual - planned) / planned`.
pub fn classify_relative(deviation: f64) -> DeviationBadge {
    let magnitude = deviation.abs();
    if magnitude <= NORMAL_BAND {
        return DeviationBadge::NORMAL;
    }

    let level = if magnitude <= ELEVATED_BAND {
        DeviationLevel::Elevated
    } else {
        DeviationLevel::Severe
    };
    let direction = if deviation > 0.0 {
        Direction::Above
    } else {
        Direction::Below
    };

    DeviationBadge {
        level,
        direction: Some(direction),
    }
}
