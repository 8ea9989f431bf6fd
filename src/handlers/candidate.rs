//! Candidate handlers. Candidate lists return the full record, no
//! projection.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::{NewCandidate, UpdateCandidate};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list_by_job(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let job_id = parse_id(&id_str)?;
    let candidates = state.store.candidates_of(job_id).await?;
    Ok(Json(candidates))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCandidate>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let candidate = state.store.create_candidate(body).await?;
    tracing::info!(id = %candidate.id, job_id = %candidate.job_id, "candidate created");
    Ok((StatusCode::CREATED, Json(candidate)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<UpdateCandidate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    let candidate = state
        .store
        .update_candidate(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("candidate {}", id)))?;
    Ok(Json(candidate))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let candidate = state
        .store
        .delete_candidate(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("candidate {}", id)))?;
    tracing::info!(id = %candidate.id, "candidate deleted");
    Ok(Json(candidate))
}
