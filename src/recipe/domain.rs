//! Core recipe domain types.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::CategoryId,
    database_id::DatabaseId,
    validation::{RawId, RawText, validate_create_recipe},
};

/// Database identifier for a recipe.
pub type RecipeId = DatabaseId;

/// A recipe as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Recipe {
    /// The ID given to the recipe by the database.
    pub id: RecipeId,
    /// The title, unique across recipes.
    pub titre: String,
    /// The ingredients as free text.
    pub ingredients: String,
    /// One of the recipe types, serialized as `type`.
    #[serde(rename = "type")]
    pub recipe_type: String,
    /// The category the recipe is filed under.
    pub categorie_id: CategoryId,
}

/// The fields of a recipe, without its ID.
///
/// Used both to insert a recipe and to overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// The title of the recipe.
    pub titre: String,
    /// The ingredients as free text.
    pub ingredients: String,
    /// One of the recipe types.
    #[serde(rename = "type")]
    pub recipe_type: String,
    /// The category the recipe is filed under.
    pub categorie_id: CategoryId,
}

impl NewRecipe {
    /// Validate a request body and convert it into a recipe ready to insert.
    ///
    /// # Errors
    ///
    /// Returns [Error::ValidationFailed] listing every field that is missing
    /// or invalid.
    pub fn from_form(form: RecipeForm) -> Result<Self, Error> {
        let violations = validate_create_recipe(&form);

        let categorie_id = form.categorie_id.as_ref().and_then(RawId::as_positive_id);

        match (
            form.titre.and_then(RawText::into_text),
            form.ingredients.and_then(RawText::into_text),
            form.recipe_type.and_then(RawText::into_text),
            categorie_id,
        ) {
            (Some(titre), Some(ingredients), Some(recipe_type), Some(categorie_id))
                if violations.is_empty() =>
            {
                Ok(Self {
                    titre,
                    ingredients,
                    recipe_type,
                    categorie_id,
                })
            }
            _ => Err(Error::ValidationFailed(violations)),
        }
    }

    /// Attach the ID given to the recipe by the database.
    pub fn with_id(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            titre: self.titre,
            ingredients: self.ingredients,
            recipe_type: self.recipe_type,
            categorie_id: self.categorie_id,
        }
    }
}

/// Request body for recipe creation and editing.
///
/// All fields are optional so that the same body type serves partial updates.
/// Values of the wrong JSON type are kept and reported by the validators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeForm {
    pub titre: Option<RawText>,
    pub ingredients: Option<RawText>,
    #[serde(rename = "type")]
    pub recipe_type: Option<RawText>,
    pub categorie_id: Option<RawId>,
}

/// The fields a client asked to change on an existing recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub titre: Option<String>,
    pub ingredients: Option<String>,
    pub recipe_type: Option<String>,
    pub categorie_id: Option<CategoryId>,
}

impl RecipeUpdate {
    /// Collect the supplied fields of an already validated form.
    ///
    /// Empty strings count as not supplied.
    pub fn from_form(form: RecipeForm) -> Self {
        let supplied = |value: Option<RawText>| {
            value
                .and_then(RawText::into_text)
                .filter(|value| !value.is_empty())
        };

        Self {
            titre: supplied(form.titre),
            ingredients: supplied(form.ingredients),
            recipe_type: supplied(form.recipe_type),
            categorie_id: form.categorie_id.as_ref().and_then(RawId::as_positive_id),
        }
    }

    /// Fill the fields that were not supplied with the values from `existing`.
    pub fn apply_to(self, existing: Recipe) -> NewRecipe {
        NewRecipe {
            titre: self.titre.unwrap_or(existing.titre),
            ingredients: self.ingredients.unwrap_or(existing.ingredients),
            recipe_type: self.recipe_type.unwrap_or(existing.recipe_type),
            categorie_id: self.categorie_id.unwrap_or(existing.categorie_id),
        }
    }
}

/// Confirmation that a recipe was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDeleted {
    pub message: String,
}
