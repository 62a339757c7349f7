use std::fs;
use std::path::Path;

use log::info;

use crate::error::RecipeError;
use crate::model::Recipe;

const BUILTIN_RECIPES: &str = include_str!("../data/recipes.json");

/// Parse a JSON array of recipes
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, RecipeError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    Ok(recipes)
}

/// Load the recipe collection from a JSON file
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<Recipe>, RecipeError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let recipes = parse_recipes(&json)?;
    info!("loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// The recipe catalogue bundled with the crate
///
/// # Panics
/// Panics if the compiled-in `data/recipes.json` is not a valid recipe list.
pub fn builtin_recipes() -> Vec<Recipe> {
    parse_recipes(BUILTIN_RECIPES).expect("bundled data/recipes.json must be a valid recipe list")
}
