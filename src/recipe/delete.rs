//! Recipe deletion endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    database_id::parse_database_id,
    db::{begin_write, lock_connection},
    recipe::{RecipeDeleted, RecipeState, delete_recipe, get_recipe},
    validation::validate_delete_recipe,
};

/// Handle recipe deletion. Responds with a confirmation message, or 404 if the
/// recipe does not exist.
pub async fn delete_recipe_endpoint(
    Path(raw_id): Path<String>,
    State(state): State<RecipeState>,
) -> Result<Json<RecipeDeleted>, Error> {
    let violations = validate_delete_recipe(&raw_id);
    if !violations.is_empty() {
        return Err(Error::ValidationFailed(violations));
    }

    let recipe_id = parse_database_id(&raw_id)?;

    let mut connection = lock_connection(&state.db_connection)?;
    let transaction = begin_write(&mut connection)?;

    if get_recipe(recipe_id, &transaction)?.is_none() {
        return Err(Error::RecipeNotFound);
    }

    delete_recipe(recipe_id, &transaction)?;
    transaction.commit()?;

    tracing::info!("Deleted recipe {recipe_id}");

    Ok(Json(RecipeDeleted {
        message: "Recipe deleted successfully.".to_owned(),
    }))
}

#[cfg(test)]
mod delete_recipe_endpoint_tests {
    use axum::extract::{Path, State};

    use crate::{
        Error,
        category::create_category,
        recipe::{NewRecipe, RecipeState, create_recipe, delete_recipe_endpoint, get_recipe},
        test_utils::{get_test_connection, shared},
    };

    fn get_state_with_recipe() -> RecipeState {
        let connection = get_test_connection();
        create_category("Dessert", &connection).unwrap();
        create_recipe(
            NewRecipe {
                titre: "Recipe to Delete".to_owned(),
                ingredients: "Ingredients".to_owned(),
                recipe_type: "Dessert".to_owned(),
                categorie_id: 1,
            },
            &connection,
        )
        .unwrap();

        RecipeState {
            db_connection: shared(connection),
        }
    }

    #[tokio::test]
    async fn delete_recipe_succeeds() {
        let state = get_state_with_recipe();

        let response = delete_recipe_endpoint(Path("1".to_owned()), State(state.clone()))
            .await
            .expect("Could not delete recipe");

        assert_eq!(response.0.message, "Recipe deleted successfully.");
        assert_eq!(
            get_recipe(1, &state.db_connection.lock().unwrap()),
            Ok(None)
        );
    }

    #[tokio::test]
    async fn delete_missing_recipe_is_not_found() {
        let state = get_state_with_recipe();

        let result = delete_recipe_endpoint(Path("2".to_owned()), State(state)).await;

        assert_eq!(result.err(), Some(Error::RecipeNotFound));
    }

    #[tokio::test]
    async fn delete_with_malformed_id_fails_validation() {
        let state = get_state_with_recipe();

        let result = delete_recipe_endpoint(Path("abc".to_owned()), State(state)).await;

        assert!(matches!(result, Err(Error::ValidationFailed(_))));
    }
}
