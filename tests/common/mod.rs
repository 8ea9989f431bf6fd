//! In-memory store double and request helpers shared by the API tests.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use talenthub::model::*;
use talenthub::{api_routes, ops_routes, AppError, AppState, Store};
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    companies: Vec<Company>,
    departments: Vec<Department>,
    jobs: Vec<Job>,
    employees: Vec<Employee>,
    candidates: Vec<Candidate>,
}

/// Mirrors the relational rules the production store gets from PostgreSQL:
/// foreign keys checked on create, ON DELETE RESTRICT on every parent.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

fn fk_violation(child: &str, parent: &str) -> AppError {
    AppError::Conflict(format!(
        "insert on table \"{}\" violates foreign key constraint on \"{}\"",
        child, parent
    ))
}

fn restrict_violation(parent: &str, child: &str) -> AppError {
    AppError::Conflict(format!(
        "delete on table \"{}\" restricted: referenced from \"{}\"",
        parent, child
    ))
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_companies(&self) -> Result<Vec<CompanyWithDepartments>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .companies
            .iter()
            .map(|c| CompanyWithDepartments {
                id: c.id,
                name: c.name.clone(),
                departments: inner
                    .departments
                    .iter()
                    .filter(|d| d.company_id == c.id)
                    .map(|d| DepartmentSummary {
                        id: d.id,
                        name: d.name.clone(),
                    })
                    .collect(),
            })
            .collect())
    }

    async fn create_company(&self, new: NewCompany) -> Result<Company, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let company = Company {
            id: Uuid::new_v4(),
            name: new.name,
        };
        inner.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        id: Uuid,
        patch: UpdateCompany,
    ) -> Result<Option<Company>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.companies.iter_mut().find(|c| c.id == id).map(|c| {
            if let Some(name) = patch.name {
                c.name = name;
            }
            c.clone()
        }))
    }

    async fn delete_company(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(pos) = inner.companies.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        if inner.departments.iter().any(|d| d.company_id == id) {
            return Err(restrict_violation("companies", "departments"));
        }
        Ok(Some(inner.companies.remove(pos)))
    }

    async fn departments_of(&self, company_id: Uuid) -> Result<Vec<DepartmentSummary>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .departments
            .iter()
            .filter(|d| d.company_id == company_id)
            .map(|d| DepartmentSummary {
                id: d.id,
                name: d.name.clone(),
            })
            .collect())
    }

    async fn create_department(&self, new: NewDepartment) -> Result<Department, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.companies.iter().any(|c| c.id == new.company_id) {
            return Err(fk_violation("departments", "companies"));
        }
        let department = Department {
            id: Uuid::new_v4(),
            name: new.name,
            company_id: new.company_id,
        };
        inner.departments.push(department.clone());
        Ok(department)
    }

    async fn update_department(
        &self,
        id: Uuid,
        patch: UpdateDepartment,
    ) -> Result<Option<Department>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.departments.iter_mut().find(|d| d.id == id).map(|d| {
            if let Some(name) = patch.name {
                d.name = name;
            }
            d.clone()
        }))
    }

    async fn delete_department(&self, id: Uuid) -> Result<Option<Department>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(pos) = inner.departments.iter().position(|d| d.id == id) else {
            return Ok(None);
        };
        if inner.jobs.iter().any(|j| j.department_id == id) {
            return Err(restrict_violation("departments", "jobs"));
        }
        if inner.employees.iter().any(|e| e.department_id == id) {
            return Err(restrict_violation("departments", "employees"));
        }
        Ok(Some(inner.departments.remove(pos)))
    }

    async fn jobs_of(&self, department_id: Uuid) -> Result<Vec<JobSummary>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .jobs
            .iter()
            .filter(|j| j.department_id == department_id)
            .map(|j| JobSummary {
                id: j.id,
                title: j.title.clone(),
                role: j.role.clone(),
                description: j.description.clone(),
                skill: j.skill.clone(),
                salary: j.salary,
            })
            .collect())
    }

    async fn create_job(&self, new: NewJob) -> Result<Job, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.departments.iter().any(|d| d.id == new.department_id) {
            return Err(fk_violation("jobs", "departments"));
        }
        let job = Job {
            id: Uuid::new_v4(),
            title: new.title,
            role: new.role,
            description: new.description,
            skill: new.skill,
            salary: new.salary,
            department_id: new.department_id,
        };
        inner.jobs.push(job.clone());
        Ok(job)
    }

    async fn update_job(&self, id: Uuid, patch: UpdateJob) -> Result<Option<Job>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.jobs.iter_mut().find(|j| j.id == id).map(|j| {
            if let Some(title) = patch.title {
                j.title = title;
            }
            if let Some(role) = patch.role {
                j.role = role;
            }
            if let Some(description) = patch.description {
                j.description = description;
            }
            if let Some(skill) = patch.skill {
                j.skill = skill;
            }
            if let Some(salary) = patch.salary {
                j.salary = salary;
            }
            j.clone()
        }))
    }

    async fn delete_job(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(pos) = inner.jobs.iter().position(|j| j.id == id) else {
            return Ok(None);
        };
        if inner.candidates.iter().any(|c| c.job_id == id) {
            return Err(restrict_violation("jobs", "candidates"));
        }
        Ok(Some(inner.jobs.remove(pos)))
    }

    async fn employees_of(&self, department_id: Uuid) -> Result<Vec<EmployeeSummary>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .employees
            .iter()
            .filter(|e| e.department_id == department_id)
            .map(|e| EmployeeSummary {
                id: e.id,
                name: e.name.clone(),
                email_address: e.email_address.clone(),
                doj: e.doj,
            })
            .collect())
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.departments.iter().any(|d| d.id == new.department_id) {
            return Err(fk_violation("employees", "departments"));
        }
        let employee = Employee {
            id: Uuid::new_v4(),
            name: new.name,
            email_address: new.email_address,
            doj: new.doj,
            department_id: new.department_id,
        };
        inner.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: Uuid,
        patch: UpdateEmployee,
    ) -> Result<Option<Employee>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.employees.iter_mut().find(|e| e.id == id).map(|e| {
            if let Some(name) = patch.name {
                e.name = name;
            }
            if let Some(email) = patch.email_address {
                e.email_address = email;
            }
            e.clone()
        }))
    }

    async fn delete_employee(&self, id: Uuid) -> Result<Option<Employee>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(pos) = inner.employees.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.employees.remove(pos)))
    }

    async fn candidates_of(&self, job_id: Uuid) -> Result<Vec<Candidate>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .candidates
            .iter()
            .filter(|c| c.job_id == job_id)
            .cloned()
            .collect())
    }

    async fn create_candidate(&self, new: NewCandidate) -> Result<Candidate, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.jobs.iter().any(|j| j.id == new.job_id) {
            return Err(fk_violation("candidates", "jobs"));
        }
        let candidate = Candidate {
            id: Uuid::new_v4(),
            fname: new.fname,
            lname: new.lname,
            email_address: new.email_address,
            edu_level: new.edu_level,
            city: new.city,
            region: new.region,
            job_id: new.job_id,
        };
        inner.candidates.push(candidate.clone());
        Ok(candidate)
    }

    async fn update_candidate(
        &self,
        id: Uuid,
        patch: UpdateCandidate,
    ) -> Result<Option<Candidate>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.candidates.iter_mut().find(|c| c.id == id).map(|c| {
            if let Some(fname) = patch.fname {
                c.fname = fname;
            }
            if let Some(lname) = patch.lname {
                c.lname = lname;
            }
            if let Some(email) = patch.email_address {
                c.email_address = email;
            }
            if let Some(edu_level) = patch.edu_level {
                c.edu_level = edu_level;
            }
            if let Some(city) = patch.city {
                c.city = city;
            }
            if let Some(region) = patch.region {
                c.region = region;
            }
            c.clone()
        }))
    }

    async fn delete_candidate(&self, id: Uuid) -> Result<Option<Candidate>, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(pos) = inner.candidates.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.candidates.remove(pos)))
    }
}

/// Router over a fresh in-memory store.
pub fn app() -> axum::Router {
    let state = AppState::new(Arc::new(MemoryStore::default()));
    axum::Router::new()
        .merge(ops_routes(state.clone()))
        .merge(api_routes(state))
}

pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    status: StatusCode,
) -> Value {
    let response = send(app, method, uri, body).await;
    assert_eq!(response.status(), status, "{} {}", method, uri);
    json_body(response).await
}
