//! Categories that recipes are filed under.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod get;
mod state;

pub use create::create_category_endpoint;
pub use db::{
    create_category, create_category_table, delete_category, find_category_by_name,
    get_all_categories, get_category, update_category,
};
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryDeleted, CategoryForm, CategoryId};
pub use edit::update_category_endpoint;
pub use get::{get_categories_endpoint, get_category_endpoint};
pub use state::CategoryState;
