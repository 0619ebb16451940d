//! Endpoints for reading categories.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    category::{Category, CategoryState, get_all_categories, get_category},
    database_id::parse_database_id,
    db::lock_connection,
};

/// Respond with every category.
pub async fn get_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_categories(&connection).map(Json)
}

/// Respond with the category with the ID in the path, or 404 if there is none.
pub async fn get_category_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<CategoryState>,
) -> Result<Json<Category>, Error> {
    let category_id = parse_database_id(&raw_id)?;
    let connection = lock_connection(&state.db_connection)?;

    get_category(category_id, &connection)?
        .map(Json)
        .ok_or(Error::CategoryNotFound)
}
