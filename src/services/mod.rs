// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - consumption analytics and the upstream store client.
//!
//! Everything except [`fuel_api`] is a pure function of its arguments.

pub mod consumption;
pub mod deviation;
pub mod fuel_api;
pub mod grades;
pub mod latest;
pub mod normalize;

pub use consumption::compute_consumption_window;
pub use deviation::classify_deviation;
pub use fuel_api::FuelApiClient;
pub use grades::{allowed_grades, default_grade, grade_options, GRADE_UNIVERSE};
pub use latest::{select_latest, EntryPrefill};
