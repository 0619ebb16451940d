//! Database operations for categories.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryDeleted, CategoryId},
};

/// Create a category and return it with its generated ID.
///
/// Names are not checked for uniqueness.
pub fn create_category(name: &str, connection: &Connection) -> Result<Category, Error> {
    connection.execute("INSERT INTO categories (name) VALUES (?1);", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name: name.to_owned(),
    })
}

/// Retrieve a single category by ID, or `None` if there is no such category.
pub fn get_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM categories WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve all categories in the order they were created.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the first category called `name`, or `None` if there is no such category.
pub fn find_category_by_name(
    name: &str,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM categories WHERE name = :name ORDER BY id ASC LIMIT 1;")?
        .query_row(&[(":name", name)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Overwrite a category's name.
///
/// The updated category is returned whether or not a row with `category_id`
/// existed. Callers that care should check with [get_category] first.
pub fn update_category(
    category_id: CategoryId,
    name: &str,
    connection: &Connection,
) -> Result<Category, Error> {
    connection.execute(
        "UPDATE categories SET name = ?1 WHERE id = ?2",
        (name, category_id),
    )?;

    Ok(Category {
        id: category_id,
        name: name.to_owned(),
    })
}

/// Delete a category by ID.
///
/// # Errors
///
/// Returns [Error::CategoryNotFound] if the category does not exist, and
/// [Error::CategoryInUse] if any recipe refers to it. Neither case modifies
/// the database.
pub fn delete_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<CategoryDeleted, Error> {
    if get_category(category_id, connection)?.is_none() {
        return Err(Error::CategoryNotFound);
    }

    let in_use: bool = connection.query_row(
        "SELECT EXISTS (SELECT 1 FROM recipes WHERE categorie_id = ?1)",
        [category_id],
        |row| row.get(0),
    )?;

    if in_use {
        return Err(Error::CategoryInUse(category_id));
    }

    connection.execute("DELETE FROM categories WHERE id = ?1", [category_id])?;

    Ok(CategoryDeleted {
        message: "Category deleted successfully".to_owned(),
        id: category_id,
    })
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
mod category_query_tests {
    use std::collections::HashSet;

    use crate::{
        Error,
        category::{
            create_category, delete_category, find_category_by_name, get_all_categories,
            get_category, update_category,
        },
        recipe::{NewRecipe, create_recipe, get_all_recipes},
        test_utils::get_test_connection,
    };

    #[test]
    fn create_category_succeeds() {
        let connection = get_test_connection();

        let category = create_category("Category to Retrieve", &connection)
            .expect("Could not create category");

        assert!(category.id > 0);
        assert_eq!(category.name, "Category to Retrieve");
    }

    #[test]
    fn create_category_allows_duplicate_names() {
        let connection = get_test_connection();

        let first = create_category("Dessert", &connection).unwrap();
        let second = create_category("Dessert", &connection).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn get_category_succeeds() {
        let connection = get_test_connection();
        let inserted = create_category("Foo", &connection).unwrap();

        let selected = get_category(inserted.id, &connection);

        assert_eq!(selected, Ok(Some(inserted)));
    }

    #[test]
    fn get_missing_category_returns_none() {
        let connection = get_test_connection();

        assert_eq!(get_category(999, &connection), Ok(None));
    }

    #[test]
    fn get_all_categories_returns_every_category() {
        let connection = get_test_connection();
        let inserted = HashSet::from([
            create_category("Dessert", &connection).unwrap(),
            create_category("Entree", &connection).unwrap(),
            create_category("Category 1", &connection).unwrap(),
            create_category("Category 2", &connection).unwrap(),
        ]);

        let selected = get_all_categories(&connection).expect("Could not get all categories");

        assert_eq!(selected.len(), 4);
        assert_eq!(HashSet::from_iter(selected), inserted);
    }

    #[test]
    fn find_category_by_name_matches_exactly() {
        let connection = get_test_connection();
        let dessert = create_category("Dessert", &connection).unwrap();

        assert_eq!(
            find_category_by_name("Dessert", &connection),
            Ok(Some(dessert))
        );
        assert_eq!(find_category_by_name("dessert", &connection), Ok(None));
    }

    #[test]
    fn update_category_succeeds() {
        let connection = get_test_connection();
        let category = create_category("Old Category", &connection).unwrap();

        let updated = update_category(category.id, "Updated Category", &connection)
            .expect("Could not update category");

        assert_eq!(updated.name, "Updated Category");
        assert_eq!(get_category(category.id, &connection), Ok(Some(updated)));
    }

    #[test]
    fn update_missing_category_returns_given_record() {
        let connection = get_test_connection();

        let updated = update_category(42, "Ghost", &connection).unwrap();

        assert_eq!(updated.id, 42);
        assert_eq!(updated.name, "Ghost");
        assert_eq!(get_category(42, &connection), Ok(None));
    }

    #[test]
    fn delete_unused_category_succeeds() {
        let connection = get_test_connection();
        let category = create_category("Category to Delete", &connection).unwrap();

        let deleted = delete_category(category.id, &connection).expect("Could not delete");

        assert_eq!(deleted.id, category.id);
        assert_eq!(get_category(category.id, &connection), Ok(None));
    }

    #[test]
    fn delete_missing_category_fails() {
        let connection = get_test_connection();

        assert_eq!(
            delete_category(999, &connection),
            Err(Error::CategoryNotFound)
        );
    }

    #[test]
    fn delete_category_in_use_fails_and_changes_nothing() {
        let connection = get_test_connection();
        let category = create_category("Dessert", &connection).unwrap();
        let recipe = create_recipe(
            NewRecipe {
                titre: "Tiramisu".to_owned(),
                ingredients: "Mascarpone, Cafe, Biscuits".to_owned(),
                recipe_type: "Dessert".to_owned(),
                categorie_id: category.id,
            },
            &connection,
        )
        .unwrap();

        let result = delete_category(category.id, &connection);

        assert_eq!(result, Err(Error::CategoryInUse(category.id)));
        assert_eq!(get_category(category.id, &connection), Ok(Some(category)));
        assert_eq!(get_all_recipes(&connection), Ok(vec![recipe]));
    }
}
