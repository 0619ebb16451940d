//! Endpoints for reading recipes.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    database_id::parse_database_id,
    db::lock_connection,
    recipe::{Recipe, RecipeState, get_all_recipes, get_recipe},
};

/// Respond with every recipe.
pub async fn get_recipes_endpoint(
    State(state): State<RecipeState>,
) -> Result<Json<Vec<Recipe>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_recipes(&connection).map(Json)
}

/// Respond with the recipe with the ID in the path, or 404 if there is none.
pub async fn get_recipe_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<RecipeState>,
) -> Result<Json<Recipe>, Error> {
    let recipe_id = parse_database_id(&raw_id)?;
    let connection = lock_connection(&state.db_connection)?;

    get_recipe(recipe_id, &connection)?
        .map(Json)
        .ok_or(Error::RecipeNotFound)
}
