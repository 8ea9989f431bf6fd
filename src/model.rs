//! Entity records, list projections, and request payloads.
//!
//! Wire names follow the original service contract: snake_case columns,
//! camelCase foreign-key keys (`companyId`, `departmentId`, `jobId`).
//! Identifiers are database-generated UUIDs, immutable once assigned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---- Company ----

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
}

/// `GET /companies` row: company with its departments eagerly included.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyWithDepartments {
    pub id: Uuid,
    pub name: String,
    pub departments: Vec<DepartmentSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCompany {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
}

// ---- Department ----

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "companyId")]
    pub company_id: Uuid,
}

/// List-by-company projection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    #[serde(rename = "companyId")]
    pub company_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartment {
    pub name: Option<String>,
}

// ---- Job ----

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub role: String,
    pub description: String,
    pub skill: String,
    pub salary: i64,
    #[serde(rename = "departmentId")]
    pub department_id: Uuid,
}

/// List-by-department projection: every field except the foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub role: String,
    pub description: String,
    pub skill: String,
    pub salary: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub role: String,
    pub description: String,
    pub skill: String,
    pub salary: i64,
    #[serde(rename = "departmentId")]
    pub department_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub skill: Option<String>,
    pub salary: Option<i64>,
}

// ---- Employee ----

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email_address: String,
    pub doj: NaiveDate,
    #[serde(rename = "departmentId")]
    pub department_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeSummary {
    pub id: Uuid,
    pub name: String,
    pub email_address: String,
    pub doj: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email_address: String,
    pub doj: NaiveDate,
    #[serde(rename = "departmentId")]
    pub department_id: Uuid,
}

/// Date of joining is immutable after creation; only name and email move.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub email_address: Option<String>,
}

// ---- Candidate ----

/// Candidate lists carry the full record, no projection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub fname: String,
    pub lname: String,
    pub email_address: String,
    pub edu_level: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCandidate {
    pub fname: String,
    pub lname: String,
    pub email_address: String,
    pub edu_level: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCandidate {
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub email_address: Option<String>,
    pub edu_level: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}
