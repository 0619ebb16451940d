//! Database operations for recipes.
//!
//! These functions do not check title uniqueness or that the category exists,
//! that is up to the caller.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    recipe::{NewRecipe, Recipe, RecipeId},
};

/// Create a recipe and return it with its generated ID.
///
/// # Errors
///
/// Any failure is returned as [Error::CreationFailed] carrying the message of
/// the underlying error.
pub fn create_recipe(recipe: NewRecipe, connection: &Connection) -> Result<Recipe, Error> {
    connection
        .execute(
            "INSERT INTO recipes (titre, ingredients, type, categorie_id) VALUES (?1, ?2, ?3, ?4);",
            (
                &recipe.titre,
                &recipe.ingredients,
                &recipe.recipe_type,
                recipe.categorie_id,
            ),
        )
        .map_err(|error| Error::CreationFailed(error.to_string()))?;

    let id = connection.last_insert_rowid();

    Ok(recipe.with_id(id))
}

/// Retrieve the recipe titled exactly `titre`, or `None` if there is no such recipe.
pub fn get_recipe_by_title(titre: &str, connection: &Connection) -> Result<Option<Recipe>, Error> {
    connection
        .prepare(
            "SELECT id, titre, ingredients, type, categorie_id FROM recipes \
            WHERE titre = :titre LIMIT 1;",
        )?
        .query_row(&[(":titre", titre)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve all recipes in the order they were created.
pub fn get_all_recipes(connection: &Connection) -> Result<Vec<Recipe>, Error> {
    connection
        .prepare("SELECT id, titre, ingredients, type, categorie_id FROM recipes ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_recipe| maybe_recipe.map_err(|error| error.into()))
        .collect()
}

/// Retrieve a single recipe by ID, or `None` if there is no such recipe.
pub fn get_recipe(recipe_id: RecipeId, connection: &Connection) -> Result<Option<Recipe>, Error> {
    connection
        .prepare("SELECT id, titre, ingredients, type, categorie_id FROM recipes WHERE id = :id;")?
        .query_row(&[(":id", &recipe_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Overwrite every field of the recipe with `recipe_id`.
///
/// Returns `recipe` with the ID attached, whether or not the row existed.
pub fn update_recipe(
    recipe_id: RecipeId,
    recipe: NewRecipe,
    connection: &Connection,
) -> Result<Recipe, Error> {
    connection.execute(
        "UPDATE recipes SET titre = ?1, ingredients = ?2, type = ?3, categorie_id = ?4 \
        WHERE id = ?5",
        (
            &recipe.titre,
            &recipe.ingredients,
            &recipe.recipe_type,
            recipe.categorie_id,
            recipe_id,
        ),
    )?;

    Ok(recipe.with_id(recipe_id))
}

/// Delete a recipe by ID and return the number of rows deleted.
pub fn delete_recipe(recipe_id: RecipeId, connection: &Connection) -> Result<usize, Error> {
    connection
        .execute("DELETE FROM recipes WHERE id = ?1", [recipe_id])
        .map_err(|error| error.into())
}

/// Initialize the recipe table and indexes.
///
/// Titles are not declared unique, uniqueness is checked by the recipe endpoints.
pub fn create_recipe_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY,
            titre TEXT NOT NULL,
            ingredients TEXT NOT NULL,
            type TEXT NOT NULL,
            categorie_id INTEGER NOT NULL REFERENCES categories(id)
        );

        CREATE INDEX IF NOT EXISTS idx_recipes_titre ON recipes(titre);
        CREATE INDEX IF NOT EXISTS idx_recipes_categorie_id ON recipes(categorie_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Recipe, rusqlite::Error> {
    Ok(Recipe {
        id: row.get(0)?,
        titre: row.get(1)?,
        ingredients: row.get(2)?,
        recipe_type: row.get(3)?,
        categorie_id: row.get(4)?,
    })
}
