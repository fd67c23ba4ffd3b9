// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fuel Log: refuel tracking and consumption analytics
//!
//! This crate provides the backend API for a per-vehicle fuel log. Refuel
//! records live in an upstream store; this service normalizes them and
//! derives consumption between full-tank fills, deviation from the planned
//! rate, and the fuel grades each vehicle accepts.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::FuelApiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub fuel_api: FuelApiClient,
}
