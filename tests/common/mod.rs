// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fuel_log::config::Config;
use fuel_log::routes::create_router;
use fuel_log::services::FuelApiClient;
use fuel_log::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Identity token used by tests.
#[allow(dead_code)]
pub const TEST_IDENTITY: &str = "query_id=AAH&user=%7B%22id%22%3A1%7D&auth_date=1714550400&hash=abc";

/// Requests seen by the stub upstream store.
#[derive(Default)]
#[allow(dead_code)]
pub struct Recorded {
    pub identities: Vec<String>,
    pub queries: Vec<HashMap<String, String>>,
    pub posted: Vec<Value>,
}

/// Canned data served by the stub upstream store.
pub struct StubUpstream {
    pub vehicles: Value,
    pub records: Value,
    /// Status returned for every request instead of data, if set
    pub fail_with: Option<StatusCode>,
    pub recorded: Mutex<Recorded>,
}

impl StubUpstream {
    #[allow(dead_code)]
    pub fn new(vehicles: Value, records: Value) -> Self {
        Self {
            vehicles,
            records,
            fail_with: None,
            recorded: Mutex::new(Recorded::default()),
        }
    }
}

/// Vehicle fixture: plan 8 L/100km, grades 95 and 98.
#[allow(dead_code)]
pub fn sample_vehicles() -> Value {
    json!([
        {
            "vehicle_id": "car-1",
            "vehicle_name": "Octavia",
            "engine_type": "petrol",
            "engine_cc": 1400,
            "fuel_capacity": 50,
            "allowed_overflow": 5,
            "planned_consumption": 8.0,
            "low_fuel_threshold": 7,
            "fuel_grade": ["95", "98"]
        },
        {
            "vehicle_id": "van-2",
            "vehicle_name": "Transit",
            "engine_type": "diesel",
            "engine_cc": 2200,
            "fuel_capacity": "80",
            "allowed_overflow": null,
            "planned_consumption": null,
            "low_fuel_threshold": null,
            "fuel_grade": ["D", "DW"]
        }
    ])
}

/// Refuel fixture, newest first the way the store returns it.
/// Full fills at 10000 km and 10500 km with a 20 L partial in between.
#[allow(dead_code)]
pub fn sample_records() -> Value {
    json!([
        {
            "id": 3,
            "vehicle_id": "car-1",
            "refuel_date": "2024-05-03T09:00:00Z",
            "mileage": 10500,
            "fuel_added": "25",
            "price_per_liter": 56.0,
            "fuel_grade": "98",
            "is_full": true
        },
        {
            "id": 2,
            "vehicle_id": "car-1",
            "refuel_date": "2024-05-02T09:00:00Z",
            "mileage": 10200,
            "fuel_added": 20,
            "price_per_liter": 55.5,
            "fuel_grade": "95",
            "is_full": false
        },
        {
            "id": 1,
            "vehicle_id": "car-1",
            "refuel_date": "2024-05-01T09:00:00Z",
            "mileage": 10000,
            "fuel_added": 41.2,
            "price_per_liter": 55.0,
            "fuel_grade": "95",
            "is_full": true
        }
    ])
}

fn check_request(stub: &StubUpstream, headers: &HeaderMap) -> Option<Response> {
    if let Some(status) = stub.fail_with {
        return Some((status, "upstream says no").into_response());
    }

    let token = headers.get("x-auth-token").and_then(|v| v.to_str().ok());
    if token != Some("test_webhook_token") {
        return Some(StatusCode::UNAUTHORIZED.into_response());
    }

    let identity = headers
        .get("x-tg-init-data")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    stub.recorded.lock().unwrap().identities.push(identity);
    None
}

async fn stub_list_vehicles(State(stub): State<Arc<StubUpstream>>, headers: HeaderMap) -> Response {
    if let Some(rejection) = check_request(&stub, &headers) {
        return rejection;
    }
    Json(stub.vehicles.clone()).into_response()
}

async fn stub_list_fuel(
    State(stub): State<Arc<StubUpstream>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(rejection) = check_request(&stub, &headers) {
        return rejection;
    }
    let vehicle_id = query.get("vehicle_id").cloned();
    stub.recorded.lock().unwrap().queries.push(query);

    if vehicle_id.as_deref() == Some("car-1") {
        Json(stub.records.clone()).into_response()
    } else {
        Json(json!([])).into_response()
    }
}

async fn stub_create_fuel(
    State(stub): State<Arc<StubUpstream>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(rejection) = check_request(&stub, &headers) {
        return rejection;
    }
    stub.recorded.lock().unwrap().posted.push(body);
    // Webhook answers with plain text, not JSON
    (StatusCode::OK, "Workflow was started").into_response()
}

/// Start the stub upstream on an ephemeral port. Returns its base URL.
#[allow(dead_code)]
pub async fn spawn_upstream(stub: Arc<StubUpstream>) -> String {
    let app = Router::new()
        .route("/webhook/fuel", get(stub_list_fuel).post(stub_create_fuel))
        .route("/webhook/fuel-vhid", get(stub_list_vehicles))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn build_app(config: Config) -> (axum::Router, Arc<AppState>) {
    let fuel_api = FuelApiClient::new(&config).expect("Failed to build upstream client");
    let state = Arc::new(AppState { config, fuel_api });
    (create_router(state.clone()), state)
}

/// Create a test app whose upstream is unreachable.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(Config::test_default())
}

/// Create a test app backed by a running stub upstream.
#[allow(dead_code)]
pub async fn create_test_app_with_upstream(stub: Arc<StubUpstream>) -> axum::Router {
    let base = spawn_upstream(stub).await;
    let config = Config {
        fuel_webhook_url: format!("{}/webhook/fuel", base),
        vehicles_webhook_url: format!("{}/webhook/fuel-vhid", base),
        ..Config::test_default()
    };
    build_app(config).0
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
