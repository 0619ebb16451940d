//! Recipe management: the recipe repository and the recipe endpoints.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod get;
mod state;

pub use create::create_recipe_endpoint;
pub use db::{
    create_recipe, create_recipe_table, delete_recipe, get_all_recipes, get_recipe,
    get_recipe_by_title, update_recipe,
};
pub use delete::delete_recipe_endpoint;
pub use domain::{NewRecipe, Recipe, RecipeDeleted, RecipeForm, RecipeId, RecipeUpdate};
pub use edit::update_recipe_endpoint;
pub use get::{get_recipe_endpoint, get_recipes_endpoint};
pub use state::RecipeState;
