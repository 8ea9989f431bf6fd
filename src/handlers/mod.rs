//! Route handlers, one module per entity. Each handler validates its input,
//! issues one store call, and serializes the result.

pub mod candidate;
pub mod company;
pub mod department;
pub mod employee;
pub mod job;

use crate::error::AppError;
use uuid::Uuid;

/// Path ids must parse as UUIDs before any storage round-trip.
fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid id".into()))
}
