//! Category creation endpoint.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    category::{CategoryForm, CategoryState, create_category, find_category_by_name},
    db::{begin_write, lock_connection},
    endpoints,
    json_body::JsonBody,
    validation::validate_category_name,
};

/// Handle a request to create a category.
///
/// Duplicate names are only rejected when the server is configured with
/// unique category names.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    JsonBody(form): JsonBody<CategoryForm>,
) -> Result<Response, Error> {
    let violations = validate_category_name(&form.name);
    if !violations.is_empty() {
        return Err(Error::ValidationFailed(violations));
    }

    let mut connection = lock_connection(&state.db_connection)?;
    let transaction = begin_write(&mut connection)?;

    if state.unique_category_names && find_category_by_name(&form.name, &transaction)?.is_some() {
        return Err(Error::DuplicateCategoryName(form.name));
    }

    let category = create_category(&form.name, &transaction)?;
    transaction.commit()?;

    tracing::info!("Created category {} \"{}\"", category.id, category.name);

    let location = endpoints::format_endpoint(endpoints::CATEGORY, category.id);
    let headers = [(LOCATION, location)];
    let body = Json(category);

    Ok((StatusCode::CREATED, headers, body).into_response())
}

#[cfg(test)]
mod create_category_endpoint_tests {
    use axum::{extract::State, http::StatusCode};

    use crate::{
        Error,
        category::{Category, CategoryForm, CategoryState, get_all_categories},
        json_body::JsonBody,
        test_utils::{get_test_connection, parse_json, shared},
    };

    use super::create_category_endpoint;

    fn get_category_state(unique_category_names: bool) -> CategoryState {
        CategoryState {
            db_connection: shared(get_test_connection()),
            unique_category_names,
        }
    }

    fn form(name: &str) -> JsonBody<CategoryForm> {
        JsonBody(CategoryForm {
            name: name.to_owned(),
        })
    }

    #[tokio::test]
    async fn can_create_category() {
        let state = get_category_state(false);

        let response = create_category_endpoint(State(state), form("Dessert"))
            .await
            .expect("Could not create category");

        assert_eq!(response.status(), StatusCode::CREATED);
        let category: Category = parse_json(response).await;
        assert_eq!(
            category,
            Category {
                id: 1,
                name: "Dessert".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let state = get_category_state(false);

        let result = create_category_endpoint(State(state), form("  ")).await;

        assert!(matches!(result, Err(Error::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed_by_default() {
        let state = get_category_state(false);

        for _ in 0..2 {
            create_category_endpoint(State(state.clone()), form("Dessert"))
                .await
                .expect("Could not create category");
        }

        assert_eq!(
            get_all_categories(&state.db_connection.lock().unwrap())
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected_when_configured() {
        let state = get_category_state(true);
        create_category_endpoint(State(state.clone()), form("Dessert"))
            .await
            .expect("Could not create category");

        let result = create_category_endpoint(State(state.clone()), form("Dessert")).await;

        assert_eq!(
            result.err(),
            Some(Error::DuplicateCategoryName("Dessert".to_owned()))
        );
    }
}
