//! Field-level validation of request bodies and path parameters.
//!
//! Each validator returns the list of violations it found, an empty list
//! meaning the input is valid. Checks on a single field stop at the first rule
//! that fails, so a field reports at most one violation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

use crate::{database_id::DatabaseId, recipe::RecipeForm};

/// The recipe types a client may choose from.
pub const RECIPE_TYPES: [&str; 3] = ["Entree", "plat principal", "Dessert"];

const TITLE_LENGTH: (usize, usize) = (6, 100);

const INGREDIENTS_LENGTH: (usize, usize) = (10, 500);

/// Where in the request the offending value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// The JSON body.
    Body,
    /// A path parameter.
    Params,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    #[serde(rename = "type")]
    kind: &'static str,
    /// A human readable description of the problem.
    pub msg: String,
    /// The name of the offending field.
    pub path: String,
    /// The part of the request the field was read from.
    pub location: Location,
}

impl FieldViolation {
    /// Create a violation for the field `path`.
    pub fn new(path: &str, location: Location, msg: &str) -> Self {
        Self {
            kind: "field",
            msg: msg.to_owned(),
            path: path.to_owned(),
            location,
        }
    }
}

/// An ID as sent by a client, either as a JSON number or as a string.
///
/// Any other JSON value is kept as is so that it can be reported as invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// A JSON integer that fits in an `i64`.
    Integer(i64),
    /// A JSON string, which may hold an integer.
    Text(String),
    /// Anything else, e.g. a float, a boolean or an integer out of range.
    Other(Value),
}

impl RawId {
    /// The ID as an integer greater than zero, if it is one.
    pub fn as_positive_id(&self) -> Option<DatabaseId> {
        let id = match self {
            RawId::Integer(id) => *id,
            RawId::Text(text) => text.trim().parse().ok()?,
            RawId::Other(_) => return None,
        };

        (id > 0).then_some(id)
    }
}

/// A text field as sent by a client.
///
/// Values that are not JSON strings are kept so that they can be reported as
/// invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    /// A JSON string.
    Text(String),
    /// Any other JSON value.
    Other(Value),
}

impl RawText {
    /// The text, if the value was a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawText::Text(text) => Some(text),
            RawText::Other(_) => None,
        }
    }

    /// Take the text, if the value was a string.
    pub fn into_text(self) -> Option<String> {
        match self {
            RawText::Text(text) => Some(text),
            RawText::Other(_) => None,
        }
    }
}

impl From<&str> for RawText {
    fn from(text: &str) -> Self {
        RawText::Text(text.to_owned())
    }
}

impl From<String> for RawText {
    fn from(text: String) -> Self {
        RawText::Text(text)
    }
}

/// Check the body of a request to create a recipe.
///
/// Every field is required.
pub fn validate_create_recipe(form: &RecipeForm) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    violations.extend(check_text(form.titre.as_ref(), "titre", true, check_title));
    violations.extend(check_text(
        form.ingredients.as_ref(),
        "ingredients",
        true,
        check_ingredients,
    ));
    violations.extend(check_text(
        form.recipe_type.as_ref(),
        "type",
        true,
        check_recipe_type,
    ));
    violations.extend(check_category_id(form.categorie_id.as_ref(), true));

    violations
}

/// Check the path ID and body of a request to update a recipe.
///
/// Body fields are optional, but must be valid when present.
pub fn validate_update_recipe(raw_id: &str, form: &RecipeForm) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    violations.extend(check_id_param(
        raw_id,
        "The ID is required to update a recipe!",
    ));
    violations.extend(check_text(form.titre.as_ref(), "titre", false, check_title));
    violations.extend(check_text(
        form.ingredients.as_ref(),
        "ingredients",
        false,
        check_ingredients,
    ));
    violations.extend(check_text(
        form.recipe_type.as_ref(),
        "type",
        false,
        check_recipe_type,
    ));
    violations.extend(check_category_id(form.categorie_id.as_ref(), false));

    violations
}

/// Check the path ID of a request to delete a recipe.
pub fn validate_delete_recipe(raw_id: &str) -> Vec<FieldViolation> {
    check_id_param(raw_id, "The ID is required to delete a recipe!")
        .into_iter()
        .collect()
}

/// Check a category name, which must not be blank.
pub fn validate_category_name(name: &str) -> Vec<FieldViolation> {
    if is_blank(Some(name)) {
        vec![FieldViolation::new(
            "name",
            Location::Body,
            "The category name cannot be empty!",
        )]
    } else {
        Vec::new()
    }
}

fn check_text(
    value: Option<&RawText>,
    path: &str,
    required: bool,
    check: fn(Option<&str>, bool) -> Option<FieldViolation>,
) -> Option<FieldViolation> {
    match value {
        Some(RawText::Other(_)) => Some(FieldViolation::new(
            path,
            Location::Body,
            &format!("The field '{path}' must be a string!"),
        )),
        value => check(value.and_then(RawText::as_text), required),
    }
}

fn check_title(titre: Option<&str>, required: bool) -> Option<FieldViolation> {
    let violation = |msg: &str| Some(FieldViolation::new("titre", Location::Body, msg));

    match titre {
        None if !required => None,
        titre if required && is_blank(titre) => violation("Title cannot be empty!"),
        Some(titre) if !has_length(titre, TITLE_LENGTH) => {
            violation("Title must be between 6 and 100 characters!")
        }
        _ => None,
    }
}

fn check_ingredients(ingredients: Option<&str>, required: bool) -> Option<FieldViolation> {
    let violation = |msg: &str| Some(FieldViolation::new("ingredients", Location::Body, msg));

    match ingredients {
        None if !required => None,
        ingredients if required && is_blank(ingredients) => {
            violation("Ingredients cannot be empty!")
        }
        Some(ingredients) if !has_length(ingredients, INGREDIENTS_LENGTH) => {
            violation("Ingredients must be between 10 and 500 characters!")
        }
        _ => None,
    }
}

fn check_recipe_type(recipe_type: Option<&str>, required: bool) -> Option<FieldViolation> {
    let violation = |msg: &str| Some(FieldViolation::new("type", Location::Body, msg));

    match recipe_type {
        None if !required => None,
        recipe_type if required && is_blank(recipe_type) => {
            violation("The recipe type is required!")
        }
        Some(recipe_type) if !RECIPE_TYPES.contains(&recipe_type) => {
            violation("The recipe type must be 'Entree', 'plat principal' or 'Dessert'!")
        }
        _ => None,
    }
}

fn check_category_id(categorie_id: Option<&RawId>, required: bool) -> Option<FieldViolation> {
    let violation = |msg: &str| Some(FieldViolation::new("categorie_id", Location::Body, msg));

    match categorie_id {
        None if required => violation("The category ID is required!"),
        Some(RawId::Text(text)) if required && text.trim().is_empty() => {
            violation("The category ID is required!")
        }
        Some(raw_id) if raw_id.as_positive_id().is_none() => {
            violation("The category ID must be a positive integer!")
        }
        _ => None,
    }
}

fn check_id_param(raw_id: &str, missing_message: &str) -> Option<FieldViolation> {
    if raw_id.trim().is_empty() {
        return Some(FieldViolation::new("id", Location::Params, missing_message));
    }

    match RawId::Text(raw_id.to_owned()).as_positive_id() {
        Some(_) => None,
        None => Some(FieldViolation::new(
            "id",
            Location::Params,
            "The ID must be a positive integer!",
        )),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

fn has_length(value: &str, (min, max): (usize, usize)) -> bool {
    let length = value.graphemes(true).count();

    (min..=max).contains(&length)
}
