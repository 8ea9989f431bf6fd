//! Pluggable storage interface: five operations per entity type, each a
//! single round-trip. The production implementation is [`PgStore`]; tests
//! substitute an in-memory double.

mod pg;

pub use pg::{ensure_database_exists, PgStore};

use crate::error::AppError;
use crate::model::*;
use async_trait::async_trait;
use uuid::Uuid;

/// Update and delete return `None` when the id does not exist; handlers map
/// that to 404. Delete returns the record as it existed prior to deletion.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_companies(&self) -> Result<Vec<CompanyWithDepartments>, AppError>;
    async fn create_company(&self, new: NewCompany) -> Result<Company, AppError>;
    async fn update_company(
        &self,
        id: Uuid,
        patch: UpdateCompany,
    ) -> Result<Option<Company>, AppError>;
    async fn delete_company(&self, id: Uuid) -> Result<Option<Company>, AppError>;

    async fn departments_of(&self, company_id: Uuid) -> Result<Vec<DepartmentSummary>, AppError>;
    async fn create_department(&self, new: NewDepartment) -> Result<Department, AppError>;
    async fn update_department(
        &self,
        id: Uuid,
        patch: UpdateDepartment,
    ) -> Result<Option<Department>, AppError>;
    async fn delete_department(&self, id: Uuid) -> Result<Option<Department>, AppError>;

    async fn jobs_of(&self, department_id: Uuid) -> Result<Vec<JobSummary>, AppError>;
    async fn create_job(&self, new: NewJob) -> Result<Job, AppError>;
    async fn update_job(&self, id: Uuid, patch: UpdateJob) -> Result<Option<Job>, AppError>;
    async fn delete_job(&self, id: Uuid) -> Result<Option<Job>, AppError>;

    async fn employees_of(&self, department_id: Uuid) -> Result<Vec<EmployeeSummary>, AppError>;
    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, AppError>;
    async fn update_employee(
        &self,
        id: Uuid,
        patch: UpdateEmployee,
    ) -> Result<Option<Employee>, AppError>;
    async fn delete_employee(&self, id: Uuid) -> Result<Option<Employee>, AppError>;

    async fn candidates_of(&self, job_id: Uuid) -> Result<Vec<Candidate>, AppError>;
    async fn create_candidate(&self, new: NewCandidate) -> Result<Candidate, AppError>;
    async fn update_candidate(
        &self,
        id: Uuid,
        patch: UpdateCandidate,
    ) -> Result<Option<Candidate>, AppError>;
    async fn delete_candidate(&self, id: Uuid) -> Result<Option<Candidate>, AppError>;
}
