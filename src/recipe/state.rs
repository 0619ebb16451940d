use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

/// The state needed by the recipe endpoints.
#[derive(Debug, Clone)]
pub struct RecipeState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecipeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
