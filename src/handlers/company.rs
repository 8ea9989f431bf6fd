//! Company handlers. Listing eagerly includes each company's departments.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::{NewCompany, UpdateCompany};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = state.store.list_companies().await?;
    Ok(Json(companies))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCompany>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let company = state.store.create_company(body).await?;
    tracing::info!(id = %company.id, "company created");
    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<UpdateCompany>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    body.validate()?;
    let company = state
        .store
        .update_company(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", id)))?;
    Ok(Json(company))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let company = state
        .store
        .delete_company(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company {}", id)))?;
    tracing::info!(id = %company.id, "company deleted");
    Ok(Json(company))
}
