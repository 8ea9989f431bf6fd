//! Schema DDL applied at startup. Idempotent (IF NOT EXISTS throughout).
//!
//! Every parent/child relationship is ON DELETE RESTRICT: deleting a parent
//! with live children is rejected by the database and surfaces as a 409.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS departments (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        company_id UUID NOT NULL REFERENCES companies (id) ON DELETE RESTRICT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title TEXT NOT NULL,
        role TEXT NOT NULL,
        description TEXT NOT NULL,
        skill TEXT NOT NULL,
        salary BIGINT NOT NULL,
        department_id UUID NOT NULL REFERENCES departments (id) ON DELETE RESTRICT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        email_address TEXT NOT NULL,
        doj DATE NOT NULL,
        department_id UUID NOT NULL REFERENCES departments (id) ON DELETE RESTRICT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS candidates (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        fname TEXT NOT NULL,
        lname TEXT NOT NULL,
        email_address TEXT NOT NULL,
        edu_level TEXT NOT NULL,
        city TEXT NOT NULL,
        region TEXT NOT NULL,
        job_id UUID NOT NULL REFERENCES jobs (id) ON DELETE RESTRICT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS departments_company_id_idx ON departments (company_id)",
    "CREATE INDEX IF NOT EXISTS jobs_department_id_idx ON jobs (department_id)",
    "CREATE INDEX IF NOT EXISTS employees_department_id_idx ON employees (department_id)",
    "CREATE INDEX IF NOT EXISTS candidates_job_id_idx ON candidates (job_id)",
];

/// Create the five entity tables and their foreign-key indexes.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
