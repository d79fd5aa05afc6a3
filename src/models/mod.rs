// src/models/mod.rs
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

pub mod team;
pub use team::*;

pub mod query;
pub use query::*;

pub mod workflow;
pub use workflow::*;

pub mod validation;

// Custom error types
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    InternalServerError,
    BadRequest(String),
    NotFound(String),
    DuplicateCode(String),
    InvalidTransition(String),
    OperationFailed(String),
}

// Implement Display for ServiceError
impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::InternalServerError => write!(f, "Internal Server Error"),
            ServiceError::BadRequest(msg) => write!(f, "BadRequest: {}", msg),
            ServiceError::NotFound(id) => write!(f, "Team not found: {}", id),
            ServiceError::DuplicateCode(code) => write!(f, "Team code already exists: {}", code),
            ServiceError::InvalidTransition(msg) => write!(f, "Invalid workflow transition: {}", msg),
            ServiceError::OperationFailed(msg) => write!(f, "Operation failed: {}", msg),
        }
    }
}

// Implement std::error::Error for ServiceError
impl std::error::Error for ServiceError {}

// Implement ResponseError for ServiceError
impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({ "error": self.to_string() });
        match self {
            ServiceError::InternalServerError => HttpResponse::InternalServerError().json(body),
            ServiceError::BadRequest(_) => HttpResponse::BadRequest().json(body),
            ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
            ServiceError::DuplicateCode(_) | ServiceError::InvalidTransition(_) => {
                HttpResponse::Conflict().json(body)
            }
            ServiceError::OperationFailed(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}
