//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
        get_category_endpoint, update_category_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    recipe::{
        create_recipe_endpoint, delete_recipe_endpoint, get_recipe_endpoint,
        get_recipes_endpoint, update_recipe_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::RECIPES,
            get(get_recipes_endpoint).post(create_recipe_endpoint),
        )
        .route(
            endpoints::RECIPE,
            get(get_recipe_endpoint)
                .put(update_recipe_endpoint)
                .delete(delete_recipe_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint)
                .put(update_category_endpoint)
                .delete(delete_category_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
