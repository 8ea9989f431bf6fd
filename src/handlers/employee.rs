//! Employee handlers. Updates only touch name and email; date of joining is
//! immutable after creation.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::{NewEmployee, UpdateEmployee};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list_by_department(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let department_id = parse_id(&id_str)?;
    let employees = state.store.employees_of(department_id).await?;
    Ok(Json(employees))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewEmployee>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let employee = state.store.create_employee(body).await?;
    tracing::info!(id = %employee.id, department_id = %employee.department_id, "employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<UpdateEmployee>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    let employee = state
        .store
        .update_employee(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("employee {}", id)))?;
    Ok(Json(employee))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let employee = state
        .store
        .delete_employee(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("employee {}", id)))?;
    tracing::info!(id = %employee.id, "employee deleted");
    Ok(Json(employee))
}
