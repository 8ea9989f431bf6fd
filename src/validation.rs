//! Pre-storage request validation. Runs before any storage call so malformed
//! bodies produce a structured 422 instead of surfacing as a driver error.

use crate::error::AppError;
use crate::model::*;
use regex::Regex;
use std::sync::OnceLock;

const MAX_TEXT_LEN: usize = 512;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    if value.len() > MAX_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

fn require_opt(field: &str, value: &Option<String>) -> Result<(), AppError> {
    match value {
        Some(v) => require(field, v),
        None => Ok(()),
    }
}

fn email(field: &str, value: &str) -> Result<(), AppError> {
    require(field, value)?;
    if !email_regex().is_match(value) {
        return Err(AppError::Validation(format!(
            "{} is not a valid email address",
            field
        )));
    }
    Ok(())
}

fn email_opt(field: &str, value: &Option<String>) -> Result<(), AppError> {
    match value {
        Some(v) => email(field, v),
        None => Ok(()),
    }
}

fn non_negative(field: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{} must not be negative", field)));
    }
    Ok(())
}

/// Per-payload field rules. Create payloads require every field; update
/// payloads only check the fields that are present.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl Validate for NewCompany {
    fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)
    }
}

impl Validate for UpdateCompany {
    fn validate(&self) -> Result<(), AppError> {
        require_opt("name", &self.name)
    }
}

impl Validate for NewDepartment {
    fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)
    }
}

impl Validate for UpdateDepartment {
    fn validate(&self) -> Result<(), AppError> {
        require_opt("name", &self.name)
    }
}

impl Validate for NewJob {
    fn validate(&self) -> Result<(), AppError> {
        require("title", &self.title)?;
        require("role", &self.role)?;
        require("description", &self.description)?;
        require("skill", &self.skill)?;
        non_negative("salary", self.salary)
    }
}

impl Validate for UpdateJob {
    fn validate(&self) -> Result<(), AppError> {
        require_opt("title", &self.title)?;
        require_opt("role", &self.role)?;
        require_opt("description", &self.description)?;
        require_opt("skill", &self.skill)?;
        match self.salary {
            Some(s) => non_negative("salary", s),
            None => Ok(()),
        }
    }
}

impl Validate for NewEmployee {
    fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        email("email_address", &self.email_address)
    }
}

impl Validate for UpdateEmployee {
    fn validate(&self) -> Result<(), AppError> {
        require_opt("name", &self.name)?;
        email_opt("email_address", &self.email_address)
    }
}

impl Validate for NewCandidate {
    fn validate(&self) -> Result<(), AppError> {
        require("fname", &self.fname)?;
        require("lname", &self.lname)?;
        email("email_address", &self.email_address)?;
        require("edu_level", &self.edu_level)?;
        require("city", &self.city)?;
        require("region", &self.region)
    }
}

impl Validate for UpdateCandidate {
    fn validate(&self) -> Result<(), AppError> {
        require_opt("fname", &self.fname)?;
        require_opt("lname", &self.lname)?;
        email_opt("email_address", &self.email_address)?;
        require_opt("edu_level", &self.edu_level)?;
        require_opt("city", &self.city)?;
        require_opt("region", &self.region)
    }
}
