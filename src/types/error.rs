use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

pub const USER_NOT_FOUND: &str = "Usuário não encontrado";
pub const EMAIL_IN_USE: &str = "email already in use";
const INTERNAL_ERROR: &str = "Erro interno do servidor";

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut messages: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Failed { source, .. } => source.kind(),
        }
    }

    fn from_db(err: DbErr) -> Self {
        if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return AppError::AlreadyExists;
        }
        match err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }

    /// Attaches the operation's user-facing message to infrastructure
    /// failures. Client errors pass through untouched.
    pub fn during(message: &'static str) -> impl FnOnce(AppError) -> AppError {
        move |err| match err {
            AppError::Db(_) | AppError::Internal(_) => AppError::Failed {
                message,
                source: Box::new(err),
            },
            other => other,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::AlreadyExists => EMAIL_IN_USE,
            Self::NotFound => USER_NOT_FOUND,
            Self::Validation(msg) | Self::BadRequest(msg) => msg.as_str(),
            Self::Db(_) | Self::Internal(_) => INTERNAL_ERROR,
            Self::Failed { message, .. } => *message,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Internal(_) | Self::Failed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}: {:?}", self.kind(), self);
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.message(),
        })
    }
}
