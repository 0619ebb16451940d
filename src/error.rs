//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{category::CategoryId, validation::FieldViolation};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An ID could not be parsed as an integer.
    ///
    /// Holds the raw ID as it was received.
    #[error("invalid ID format: \"{0}\"")]
    InvalidArgument(String),

    /// One or more fields in the request failed validation.
    #[error("the request failed validation")]
    ValidationFailed(Vec<FieldViolation>),

    /// The request body is not JSON of the expected shape.
    #[error("{0}")]
    InvalidRequestBody(String),

    /// The request body was not sent as `application/json`.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// The requested recipe does not exist.
    #[error("recipe not found")]
    RecipeNotFound,

    /// The requested category does not exist.
    #[error("category not found")]
    CategoryNotFound,

    /// Another recipe already uses this title.
    #[error("a recipe with the title \"{0}\" already exists")]
    DuplicateRecipeTitle(String),

    /// A recipe referenced a category ID that is not in the database.
    #[error("the category {0} does not exist")]
    MissingCategory(CategoryId),

    /// Tried to delete a category that one or more recipes still refer to.
    #[error("the category {0} cannot be deleted because it is used by recipes")]
    CategoryInUse(CategoryId),

    /// Another category already uses this name.
    ///
    /// Only raised when category names are configured to be unique.
    #[error("a category named \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// The recipe could not be inserted.
    ///
    /// Holds the message of the underlying error.
    #[error("error creating recipe: {0}")]
    CreationFailed(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();

        match rejection {
            JsonRejection::MissingJsonContentType(_) => Error::UnsupportedMediaType(message),
            _ => Error::InvalidRequestBody(message),
        }
    }
}

/// The body sent for errors that can be described with a single message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// What went wrong.
    pub message: String,
}

/// The body sent when request validation fails.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    /// Every field that failed validation.
    pub errors: Vec<FieldViolation>,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidArgument(_)
            | Error::ValidationFailed(_)
            | Error::InvalidRequestBody(_)
            | Error::DuplicateRecipeTitle(_)
            | Error::MissingCategory(_) => StatusCode::BAD_REQUEST,
            Error::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::RecipeNotFound | Error::CategoryNotFound => StatusCode::NOT_FOUND,
            Error::CategoryInUse(_) | Error::DuplicateCategoryName(_) => StatusCode::CONFLICT,
            Error::CreationFailed(_) | Error::SqlError(_) | Error::DatabaseLockError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        match self {
            Error::ValidationFailed(errors) => {
                (status, Json(ValidationErrorBody { errors })).into_response()
            }
            error => (
                status,
                Json(MessageBody {
                    message: error.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
