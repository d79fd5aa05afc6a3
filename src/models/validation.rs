// src/models/validation.rs
use crate::models::{ServiceError, TeamInput};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("valid name pattern");
    static ref CODE_PATTERN: Regex = Regex::new(r"^[A-Z0-9]+$").expect("valid code pattern");
    static ref MANAGER_PATTERN: Regex = Regex::new(r"^[a-zA-Z\s\-']+$").expect("valid manager pattern");
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").expect("valid email pattern");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) -> bool {
    let len = value.chars().count();
    let message = if len == 0 {
        format!("{} is required", label)
    } else if len < min {
        format!("{} must be at least {} characters", label, min)
    } else if len > max {
        format!("{} must be at most {} characters", label, max)
    } else {
        return true;
    };

    errors.push(FieldError {
        field: field.to_string(),
        message,
    });
    false
}

fn check_pattern(errors: &mut Vec<FieldError>, field: &str, pattern: &Regex, value: &str, message: &str) {
    if !pattern.is_match(value) {
        errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

// Collect every field problem of a team payload
pub fn validate_team_input(input: &TeamInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if check_length(&mut errors, "name", "Team name", &input.name, 2, 100) {
        check_pattern(&mut errors, "name", &NAME_PATTERN, &input.name, "Team name contains invalid characters");
    }

    check_length(&mut errors, "description", "Description", &input.description, 10, 500);

    if check_length(&mut errors, "code", "Team code", &input.code, 2, 10) {
        check_pattern(
            &mut errors,
            "code",
            &CODE_PATTERN,
            &input.code,
            "Team code must be uppercase letters and numbers only",
        );
    }

    if check_length(&mut errors, "email", "Email", &input.email, 1, 255) {
        check_pattern(&mut errors, "email", &EMAIL_PATTERN, &input.email, "Please enter a valid email address");
    }

    check_length(&mut errors, "entity", "Entity", &input.entity, 2, 100);

    if check_length(&mut errors, "manager", "Manager name", &input.manager, 2, 100) {
        check_pattern(
            &mut errors,
            "manager",
            &MANAGER_PATTERN,
            &input.manager,
            "Manager name contains invalid characters",
        );
    }

    errors
}

// Reject a payload with a single BadRequest listing all field errors
pub fn ensure_valid(input: &TeamInput) -> Result<(), ServiceError> {
    let errors = validate_team_input(input);
    if errors.is_empty() {
        return Ok(());
    }

    let summary = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    Err(ServiceError::BadRequest(summary))
}
