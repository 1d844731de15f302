use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::api::employee::CreateEmployee;
use crate::error::ApiError;
use crate::model::attendance::AttendanceStatus;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap());

/// Field-level checks for a new employee. Blank checks compare trimmed input;
/// stored values keep the submitted whitespace.
pub fn validate_new_employee(payload: &CreateEmployee) -> Result<(), ApiError> {
    if payload.employee_id.trim().is_empty() {
        return Err(ApiError::Validation("Employee ID is required".into()));
    }
    if payload.full_name.trim().is_empty() {
        return Err(ApiError::Validation("Full name is required".into()));
    }
    if payload.email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".into()));
    }
    if !EMAIL_REGEX.is_match(&payload.email) {
        return Err(ApiError::Validation("Invalid email format".into()));
    }
    if payload.department.trim().is_empty() {
        return Err(ApiError::Validation("Department is required".into()));
    }
    Ok(())
}

/// Accepts exactly "Present" or "Absent".
pub fn parse_status(raw: &str) -> Result<AttendanceStatus, ApiError> {
    AttendanceStatus::from_str(raw)
        .map_err(|_| ApiError::Validation("Status must be 'Present' or 'Absent'".into()))
}
