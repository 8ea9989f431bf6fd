//! Route tables. Singular paths for create/update/delete, plural for lists,
//! matching the original service contract.

use crate::handlers::{candidate, company, department, employee, job};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/companies", get(company::list))
        .route("/company", post(company::create))
        .route("/company/:id", put(company::update).delete(company::delete))
        .route("/departments/:id", get(department::list_by_company))
        .route("/department", post(department::create))
        .route(
            "/department/:id",
            put(department::update).delete(department::delete),
        )
        .route("/jobs/:id", get(job::list_by_department))
        .route("/job", post(job::create))
        .route("/job/:id", put(job::update).delete(job::delete))
        .route("/employees/:id", get(employee::list_by_department))
        .route("/employee", post(employee::create))
        .route(
            "/employee/:id",
            put(employee::update).delete(employee::delete),
        )
        .route("/candidates/:id", get(candidate::list_by_job))
        .route("/candidate", post(candidate::create))
        .route(
            "/candidate/:id",
            put(candidate::update).delete(candidate::delete),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (axum::http::StatusCode, Json<ReadyBody>)> {
    if state.store.ping().await.is_err() {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Ops routes: GET /health, GET /ready (store ping), GET /version.
pub fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
