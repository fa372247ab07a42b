//! Shared helpers: a fake finance backend and a client driving the router.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use simple_finance_charts::config::Config;
use simple_finance_charts::server::{build_app, serve};
use simple_finance_charts::state::AppState;

/// Switches controlling how the fake backend answers.
#[derive(Clone, Default)]
pub struct BackendSwitch {
    statistics_down: Arc<AtomicBool>,
    accounts_down: Arc<AtomicBool>,
    weekly_calls: Arc<AtomicUsize>,
}

impl BackendSwitch {
    /// Make every statistics endpoint answer 500.
    pub fn fail(&self) {
        self.statistics_down.store(true, Ordering::SeqCst);
    }

    pub fn fail_accounts(&self) {
        self.accounts_down.store(true, Ordering::SeqCst);
    }

    pub fn recover_accounts(&self) {
        self.accounts_down.store(false, Ordering::SeqCst);
    }

    fn failing(&self) -> bool {
        self.statistics_down.load(Ordering::SeqCst)
    }
}

fn accounts() -> Value {
    json!([
        {"id": "CASH", "name": "Wallet", "type": "CHECKING"},
        {"id": "LOAN", "name": "Car Loan", "type": "LOAN"}
    ])
}

fn account_balances() -> Value {
    json!([
        {"date": "2024-02-01", "values": [
            {"name": "CASH", "value": 80.0, "value_difference": 5.0},
            {"name": "LOAN", "value": -60.0, "value_difference": -5.0}
        ]},
        {"date": "2024-03-01", "values": [
            {"name": "CASH", "value": 100.0, "value_difference": 20.0},
            {"name": "LOAN", "value": -50.0, "value_difference": -10.0}
        ]}
    ])
}

fn flow_groupings() -> Value {
    let periods: Vec<Value> = (1..=12)
        .map(|month| {
            json!({
                "date": format!("2023-{:02}-01", month),
                "values": [
                    {"name": "CASH", "value": 1000.0 * month as f64, "value_difference": 1000.0},
                    {"name": "GAIN", "value": 10.0, "value_difference": 2.5},
                    {"name": "EXTERNAL", "value": -400.0, "value_difference": -40.0}
                ]
            })
        })
        .collect();
    Value::Array(periods)
}

async fn statistics(State(switch): State<BackendSwitch>, body: Value) -> Response {
    if switch.failing() {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(body).into_response()
}

async fn account_list(State(switch): State<BackendSwitch>) -> Response {
    if switch.accounts_down.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(accounts()).into_response()
}

fn weekly_period(date: &str, value: f64) -> Value {
    json!([{"date": date, "values": [
        {"name": "CASH", "value": value, "value_difference": value}
    ]}])
}

/// The first weekly request is slow and answers with older data than every
/// later one.
async fn weekly_flow_groupings(State(switch): State<BackendSwitch>) -> Response {
    if switch.weekly_calls.fetch_add(1, Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(300)).await;
        return Json(weekly_period("2024-01-01", 1.0)).into_response();
    }
    Json(weekly_period("2024-01-08", 2.0)).into_response()
}

fn fake_backend(switch: BackendSwitch) -> Router {
    Router::new()
        .route("/api/account/", get(account_list))
        .route(
            "/api/statistics/weekly/flow_grouping/",
            get(weekly_flow_groupings),
        )
        .route(
            "/api/statistics/monthly/account_balance/",
            get(|state: State<BackendSwitch>| statistics(state, account_balances())),
        )
        .route(
            "/api/statistics/monthly/flow_grouping/",
            get(|state: State<BackendSwitch>| statistics(state, flow_groupings())),
        )
        .with_state(switch)
}

pub struct TestClient {
    app: Router,
    pub state: AppState,
    pub backend: BackendSwitch,
}

impl TestClient {
    pub async fn new() -> Self {
        Self::with_backend(BackendSwitch::default()).await
    }

    /// Start a fake backend on an OS-assigned port and build the app against it.
    pub async fn with_backend(backend: BackendSwitch) -> Self {
        let (port, _handle) = serve(fake_backend(backend.clone()), "127.0.0.1", 0)
            .await
            .expect("fake backend should bind");

        let config = Config {
            host: "127.0.0.1".into(),
            port: 0,
            backend_url: format!("http://127.0.0.1:{port}"),
            request_timeout: Some(Duration::from_secs(5)),
        };
        let (state, app) = build_app(config).await.expect("app should build");

        Self {
            app,
            state,
            backend,
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(path).await;
        let value = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, value)
    }
}
