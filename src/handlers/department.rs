//! Department handlers.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::{NewDepartment, UpdateDepartment};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// `GET /departments/:id` — departments of a company, projected to id and
/// name. Unknown company yields an empty array, not an error.
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company_id = parse_id(&id_str)?;
    let departments = state.store.departments_of(company_id).await?;
    Ok(Json(departments))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDepartment>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let department = state.store.create_department(body).await?;
    tracing::info!(id = %department.id, company_id = %department.company_id, "department created");
    Ok((StatusCode::CREATED, Json(department)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<UpdateDepartment>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    let department = state
        .store
        .update_department(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("department {}", id)))?;
    Ok(Json(department))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let department = state
        .store
        .delete_department(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("department {}", id)))?;
    tracing::info!(id = %department.id, "department deleted");
    Ok(Json(department))
}
