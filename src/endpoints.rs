//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/recipes/{recipe_id}', use [format_endpoint].

/// The route to list and create recipes.
pub const RECIPES: &str = "/recipes";
/// The route to get, update and delete a single recipe.
pub const RECIPE: &str = "/recipes/{recipe_id}";
/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories";
/// The route to get, update and delete a single category.
pub const CATEGORY: &str = "/categories/{category_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace,
/// for example '{recipe_id}' in '/recipes/{recipe_id}'. Only the first
/// parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know the routes will parse as URIs.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::RECIPES);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::RECIPE, 1));
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::CATEGORY, 1));
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::RECIPE, 12);

        assert_eq!(formatted_path, "/recipes/12");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        assert_eq!(format_endpoint("/recipes", 1), "/recipes");
    }

    #[test]
    fn parameter_in_middle() {
        assert_eq!(
            format_endpoint("/categories/{category_id}/recipes", 3),
            "/categories/3/recipes"
        );
    }
}
