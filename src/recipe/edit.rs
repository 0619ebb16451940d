//! Recipe update endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    category::get_category,
    database_id::parse_database_id,
    db::{begin_write, lock_connection},
    json_body::JsonBody,
    recipe::{
        Recipe, RecipeForm, RecipeState, RecipeUpdate, get_recipe, get_recipe_by_title,
        update_recipe,
    },
    validation::validate_update_recipe,
};

/// Handle a partial update of the recipe with the ID in the path.
///
/// Fields missing from the body keep their current values.
pub async fn update_recipe_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<RecipeState>,
    JsonBody(form): JsonBody<RecipeForm>,
) -> Result<Json<Recipe>, Error> {
    let violations = validate_update_recipe(&raw_id, &form);
    if !violations.is_empty() {
        return Err(Error::ValidationFailed(violations));
    }

    let recipe_id = parse_database_id(&raw_id)?;
    let update = RecipeUpdate::from_form(form);

    let mut connection = lock_connection(&state.db_connection)?;
    let transaction = begin_write(&mut connection)?;

    let existing = get_recipe(recipe_id, &transaction)?.ok_or(Error::RecipeNotFound)?;

    if let Some(titre) = &update.titre
        && *titre != existing.titre
        && get_recipe_by_title(titre, &transaction)?.is_some()
    {
        return Err(Error::DuplicateRecipeTitle(titre.to_owned()));
    }

    if let Some(categorie_id) = update.categorie_id
        && get_category(categorie_id, &transaction)?.is_none()
    {
        return Err(Error::MissingCategory(categorie_id));
    }

    let data = update.apply_to(existing);
    tracing::debug!("Updating recipe {recipe_id} with data: {data:?}");

    let recipe = update_recipe(recipe_id, data, &transaction)?;
    transaction.commit()?;

    Ok(Json(recipe))
}
