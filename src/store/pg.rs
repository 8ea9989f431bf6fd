//! PostgreSQL store: one statement per operation, partial updates via
//! COALESCE, delete echoes the row through RETURNING.

use crate::error::AppError;
use crate::model::*;
use crate::store::Store;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PgStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_companies(&self) -> Result<Vec<CompanyWithDepartments>, AppError> {
        let companies: Vec<Company> = sqlx::query_as("SELECT id, name FROM companies")
            .fetch_all(&self.pool)
            .await?;
        let ids: Vec<Uuid> = companies.iter().map(|c| c.id).collect();

        // Batch-load the related departments in one query.
        let rows: Vec<(Uuid, Uuid, String)> = sqlx::query_as(
            "SELECT company_id, id, name FROM departments WHERE company_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;
        let mut by_company: HashMap<Uuid, Vec<DepartmentSummary>> = HashMap::new();
        for (company_id, id, name) in rows {
            by_company
                .entry(company_id)
                .or_default()
                .push(DepartmentSummary { id, name });
        }

        Ok(companies
            .into_iter()
            .map(|c| CompanyWithDepartments {
                departments: by_company.remove(&c.id).unwrap_or_default(),
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    async fn create_company(&self, new: NewCompany) -> Result<Company, AppError> {
        let row = sqlx::query_as("INSERT INTO companies (name) VALUES ($1) RETURNING id, name")
            .bind(&new.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_company(
        &self,
        id: Uuid,
        patch: UpdateCompany,
    ) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as(
            "UPDATE companies SET name = COALESCE($2, name) WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&patch.name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_company(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let row = sqlx::query_as("DELETE FROM companies WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn departments_of(&self, company_id: Uuid) -> Result<Vec<DepartmentSummary>, AppError> {
        let rows =
            sqlx::query_as("SELECT id, name FROM departments WHERE company_id = $1")
                .bind(company_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn create_department(&self, new: NewDepartment) -> Result<Department, AppError> {
        let row = sqlx::query_as(
            "INSERT INTO departments (name, company_id) VALUES ($1, $2) \
             RETURNING id, name, company_id",
        )
        .bind(&new.name)
        .bind(new.company_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_department(
        &self,
        id: Uuid,
        patch: UpdateDepartment,
    ) -> Result<Option<Department>, AppError> {
        let row = sqlx::query_as(
            "UPDATE departments SET name = COALESCE($2, name) WHERE id = $1 \
             RETURNING id, name, company_id",
        )
        .bind(id)
        .bind(&patch.name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_department(&self, id: Uuid) -> Result<Option<Department>, AppError> {
        let row = sqlx::query_as(
            "DELETE FROM departments WHERE id = $1 RETURNING id, name, company_id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn jobs_of(&self, department_id: Uuid) -> Result<Vec<JobSummary>, AppError> {
        let rows = sqlx::query_as(
            "SELECT id, title, role, description, skill, salary FROM jobs \
             WHERE department_id = $1",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_job(&self, new: NewJob) -> Result<Job, AppError> {
        let row = sqlx::query_as(
            "INSERT INTO jobs (title, role, description, skill, salary, department_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, title, role, description, skill, salary, department_id",
        )
        .bind(&new.title)
        .bind(&new.role)
        .bind(&new.description)
        .bind(&new.skill)
        .bind(new.salary)
        .bind(new.department_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_job(&self, id: Uuid, patch: UpdateJob) -> Result<Option<Job>, AppError> {
        let row = sqlx::query_as(
            "UPDATE jobs SET \
                 title = COALESCE($2, title), \
                 role = COALESCE($3, role), \
                 description = COALESCE($4, description), \
                 skill = COALESCE($5, skill), \
                 salary = COALESCE($6, salary) \
             WHERE id = $1 \
             RETURNING id, title, role, description, skill, salary, department_id",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.role)
        .bind(&patch.description)
        .bind(&patch.skill)
        .bind(patch.salary)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_job(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        let row = sqlx::query_as(
            "DELETE FROM jobs WHERE id = $1 \
             RETURNING id, title, role, description, skill, salary, department_id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn employees_of(&self, department_id: Uuid) -> Result<Vec<EmployeeSummary>, AppError> {
        let rows = sqlx::query_as(
            "SELECT id, name, email_address, doj FROM employees WHERE department_id = $1",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, AppError> {
        let row = sqlx::query_as(
            "INSERT INTO employees (name, email_address, doj, department_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, email_address, doj, department_id",
        )
        .bind(&new.name)
        .bind(&new.email_address)
        .bind(new.doj)
        .bind(new.department_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_employee(
        &self,
        id: Uuid,
        patch: UpdateEmployee,
    ) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as(
            "UPDATE employees SET \
                 name = COALESCE($2, name), \
                 email_address = COALESCE($3, email_address) \
             WHERE id = $1 \
             RETURNING id, name, email_address, doj, department_id",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.email_address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_employee(&self, id: Uuid) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as(
            "DELETE FROM employees WHERE id = $1 \
             RETURNING id, name, email_address, doj, department_id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn candidates_of(&self, job_id: Uuid) -> Result<Vec<Candidate>, AppError> {
        let rows = sqlx::query_as(
            "SELECT id, fname, lname, email_address, edu_level, city, region, job_id \
             FROM candidates WHERE job_id = $1",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_candidate(&self, new: NewCandidate) -> Result<Candidate, AppError> {
        let row = sqlx::query_as(
            "INSERT INTO candidates \
                 (fname, lname, email_address, edu_level, city, region, job_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, fname, lname, email_address, edu_level, city, region, job_id",
        )
        .bind(&new.fname)
        .bind(&new.lname)
        .bind(&new.email_address)
        .bind(&new.edu_level)
        .bind(&new.city)
        .bind(&new.region)
        .bind(new.job_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_candidate(
        &self,
        id: Uuid,
        patch: UpdateCandidate,
    ) -> Result<Option<Candidate>, AppError> {
        let row = sqlx::query_as(
            "UPDATE candidates SET \
                 fname = COALESCE($2, fname), \
                 lname = COALESCE($3, lname), \
                 email_address = COALESCE($4, email_address), \
                 edu_level = COALESCE($5, edu_level), \
                 city = COALESCE($6, city), \
                 region = COALESCE($7, region) \
             WHERE id = $1 \
             RETURNING id, fname, lname, email_address, edu_level, city, region, job_id",
        )
        .bind(id)
        .bind(&patch.fname)
        .bind(&patch.lname)
        .bind(&patch.email_address)
        .bind(&patch.edu_level)
        .bind(&patch.city)
        .bind(&patch.region)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_candidate(&self, id: Uuid) -> Result<Option<Candidate>, AppError> {
        let row = sqlx::query_as(
            "DELETE FROM candidates WHERE id = $1 \
             RETURNING id, fname, lname, email_address, edu_level, city, region, job_id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

/// Connect to the admin database and create the target database if missing.
/// No-op when the URL already points at `postgres` or has no database name.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_db_name(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn split_db_name(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
