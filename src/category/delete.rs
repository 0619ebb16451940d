//! Category deletion endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    category::{CategoryDeleted, CategoryState, delete_category},
    database_id::parse_database_id,
    db::{begin_write, lock_connection},
};

/// Handle category deletion.
///
/// Categories that are still used by a recipe are not deleted, the client
/// receives a 409 conflict instead.
pub async fn delete_category_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<CategoryState>,
) -> Result<Json<CategoryDeleted>, Error> {
    let category_id = parse_database_id(&raw_id)?;

    let mut connection = lock_connection(&state.db_connection)?;
    let transaction = begin_write(&mut connection)?;

    let deleted = delete_category(category_id, &transaction)?;
    transaction.commit()?;

    tracing::info!("Deleted category {category_id}");

    Ok(Json(deleted))
}
