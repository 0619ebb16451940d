//! Category update endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    category::{
        Category, CategoryForm, CategoryState, find_category_by_name, get_category,
        update_category,
    },
    database_id::parse_database_id,
    db::{begin_write, lock_connection},
    json_body::JsonBody,
    validation::validate_category_name,
};

/// Handle renaming the category with the ID in the path.
pub async fn update_category_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<CategoryState>,
    JsonBody(form): JsonBody<CategoryForm>,
) -> Result<Json<Category>, Error> {
    let category_id = parse_database_id(&raw_id)?;

    let violations = validate_category_name(&form.name);
    if !violations.is_empty() {
        return Err(Error::ValidationFailed(violations));
    }

    let mut connection = lock_connection(&state.db_connection)?;
    let transaction = begin_write(&mut connection)?;

    if get_category(category_id, &transaction)?.is_none() {
        return Err(Error::CategoryNotFound);
    }

    if state.unique_category_names {
        let namesake = find_category_by_name(&form.name, &transaction)?;

        if namesake.is_some_and(|category| category.id != category_id) {
            return Err(Error::DuplicateCategoryName(form.name));
        }
    }

    let category = update_category(category_id, &form.name, &transaction)?;
    transaction.commit()?;

    Ok(Json(category))
}
