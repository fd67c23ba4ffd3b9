// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived consumption values. Recomputed on every request, never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Fuel consumed between the two most recent full-tank fills.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct ConsumptionWindow {
    /// Earlier full-tank fill (excluded from `liters`)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub from: DateTime<Utc>,
    /// Later full-tank fill (included in `liters`)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub to: DateTime<Utc>,
    /// Kilometers driven, always > 0
    pub distance: f64,
    pub liters: f64,
    /// Liters per 100 km
    pub l100: f64,
}

/// How far consumption is from the vehicle's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub enum DeviationLevel {
    /// No plan or no consumption window to compare against
    NoPlan,
    Normal,
    Elevated,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub enum Direction {
    Above,
    Below,
}

/// Qualitative badge shown next to the consumption figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "static/generated/")
)]
pub struct DeviationBadge {
    pub level: DeviationLevel,
    /// Set only for `Elevated` and `Severe`
    pub direction: Option<Direction>,
}

impl DeviationBadge {
    pub const NO_PLAN: Self = Self {
        level: DeviationLevel::NoPlan,
        direction: None,
    };

    pub const NORMAL: Self = Self {
        level: DeviationLevel::Normal,
        direction: None,
    };
}
