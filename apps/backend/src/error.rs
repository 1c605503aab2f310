use actix_web::http::StatusCode;
use actix_web::{error::ResponseError, HttpResponse};
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// JSON body attached to HTTP error responses.
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub detail: String,
}

/// Application-level error for the HTTP shell. The ws layer answers intent
/// rejections inline with `move_rejected`/`error` frames and only funnels
/// through here for HTTP endpoints.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => ErrorCode::from(err),
            AppError::Config { .. } | AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => match err {
                DomainError::UnitNotFound(_) | DomainError::GameNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                DomainError::AlreadyPlaced
                | DomainError::OutOfTurn
                | DomainError::SessionFull
                | DomainError::SessionTerminated
                | DomainError::PhaseMismatch => StatusCode::CONFLICT,
                _ => StatusCode::BAD_REQUEST,
            },
            AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            code: self.code().as_str().to_string(),
            detail: self.to_string(),
        })
    }
}
