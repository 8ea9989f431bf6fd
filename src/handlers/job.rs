//! Job handlers.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::{NewJob, UpdateJob};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// `GET /jobs/:id` — jobs of a department, projected to every field except
/// the foreign key.
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let department_id = parse_id(&id_str)?;
    let jobs = state.store.jobs_of(department_id).await?;
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewJob>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let job = state.store.create_job(body).await?;
    tracing::info!(id = %job.id, department_id = %job.department_id, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<UpdateJob>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    let job = state
        .store
        .update_job(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("job {}", id)))?;
    Ok(Json(job))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let job = state
        .store
        .delete_job(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("job {}", id)))?;
    tracing::info!(id = %job.id, "job deleted");
    Ok(Json(job))
}
