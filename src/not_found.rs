//! The fallback response for routes that do not exist.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::MessageBody;

pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody {
            message: "the requested resource could not be found".to_owned(),
        }),
    )
        .into_response()
}
