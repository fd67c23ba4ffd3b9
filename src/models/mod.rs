// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod consumption;
pub mod refuel;
pub mod vehicle;

pub use consumption::{ConsumptionWindow, DeviationBadge, DeviationLevel, Direction};
pub use refuel::{NewRefuelRecord, RawRefuelRecord, RefuelPayload, RefuelRecord, RefuelRecordView};
pub use vehicle::{GradeOption, RawVehicle, Vehicle};
