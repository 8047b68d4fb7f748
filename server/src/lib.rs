//! HTTP backend for the loan affordability calculator.
//!
//! Serves `GET /test`, `POST /calculate` and `POST /dsr`, both at the root
//! and under `/api` so clients configured with the default relative base
//! can talk to it without a proxy in front.

pub mod calc;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppError;
use crate::models::{CalculateRequest, CalculateResponse, DsrRequest, DsrResponse};

pub use config::ServerConfig;

fn routes() -> Router {
    Router::new()
        .route("/test", get(health))
        .route("/calculate", post(calculate))
        .route("/dsr", post(dsr))
}

pub fn app() -> Router {
    Router::new()
        .merge(routes())
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<&'static str> {
    Json("ok")
}

async fn calculate(Json(input): Json<CalculateRequest>) -> Result<Json<CalculateResponse>, AppError> {
    let response = calc::calculate(&input)?;
    info!(
        loan_amount = response.loan_amount,
        monthly_instalment = response.monthly_instalment,
        with_budget = response.budget_comparison.is_some(),
        "loan calculated"
    );
    Ok(Json(response))
}

async fn dsr(Json(input): Json<DsrRequest>) -> Result<Json<DsrResponse>, AppError> {
    let response = calc::dsr(&input)?;
    info!(
        dsr_percentage = response.dsr_percentage,
        status = %response.status,
        expenses = input.expenses.len(),
        "dsr calculated"
    );
    Ok(Json(response))
}
