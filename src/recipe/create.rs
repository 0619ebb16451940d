//! Recipe creation endpoint.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::get_category,
    db::{begin_write, lock_connection},
    endpoints,
    json_body::JsonBody,
    recipe::{NewRecipe, RecipeForm, RecipeState, create_recipe, get_recipe_by_title},
};

/// Handle a request to create a recipe.
///
/// Responds with 201 and the created recipe. The request is rejected if a
/// field is invalid, if another recipe already has the title, or if the
/// category does not exist.
pub async fn create_recipe_endpoint(
    State(state): State<RecipeState>,
    JsonBody(form): JsonBody<RecipeForm>,
) -> Result<Response, Error> {
    let new_recipe = NewRecipe::from_form(form)?;

    let mut connection = lock_connection(&state.db_connection)?;
    let transaction = begin_write(&mut connection)?;

    if get_recipe_by_title(&new_recipe.titre, &transaction)?.is_some() {
        return Err(Error::DuplicateRecipeTitle(new_recipe.titre));
    }

    if get_category(new_recipe.categorie_id, &transaction)?.is_none() {
        return Err(Error::MissingCategory(new_recipe.categorie_id));
    }

    let recipe = create_recipe(new_recipe, &transaction)?;
    transaction.commit()?;

    tracing::info!("Created recipe {} \"{}\"", recipe.id, recipe.titre);

    let location = endpoints::format_endpoint(endpoints::RECIPE, recipe.id);
    let headers = [(LOCATION, location)];
    let body = Json(recipe);

    Ok((StatusCode::CREATED, headers, body).into_response())
}
