//! Free-text search and tag filtering.
//!
//! Both filters keep the input order and never rank. [`apply_filters`] runs
//! text search first and the tag filter second; since both are plain
//! filters the result would be the same in the other order.

use log::debug;

use crate::model::Recipe;
use crate::normalize::{contains_normalized, normalize};
use crate::tags::{ActiveTags, TagCategory};

/// Queries shorter than this many characters do not filter at all
pub const MIN_QUERY_LEN: usize = 3;

/// Recipes whose name, description or one of its ingredient names
/// contains `query`, compared in normalized form.
///
/// No length threshold is applied here; see [`apply_filters`].
pub fn search_recipes<'a, R>(recipes: R, query: &str) -> Vec<&'a Recipe>
where
    R: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .filter(|recipe| matches_text(recipe, query))
        .collect()
}

fn matches_text(recipe: &Recipe, query: &str) -> bool {
    contains_normalized(&recipe.name, query)
        || contains_normalized(&recipe.description, query)
        || recipe
            .ingredient_names()
            .any(|name| contains_normalized(name, query))
}

/// Recipes satisfying every active tag.
///
/// - each ingredient tag must equal one of the recipe's ingredients
/// - when appliance tags are selected, the appliance must equal one of them
/// - each ustensil tag must equal one of the recipe's ustensils
pub fn filter_by_tags<'a, R>(recipes: R, tags: &ActiveTags) -> Vec<&'a Recipe>
where
    R: IntoIterator<Item = &'a Recipe>,
{
    let wanted = NormalizedTags::new(tags);

    recipes
        .into_iter()
        .filter(|recipe| wanted.matches(recipe))
        .collect()
}

/// Active tags with every value already normalized
struct NormalizedTags {
    ingredients: Vec<String>,
    appliances: Vec<String>,
    ustensils: Vec<String>,
}

impl NormalizedTags {
    fn new(tags: &ActiveTags) -> Self {
        let normalize_all =
            |values: &[String]| -> Vec<String> { values.iter().map(|v| normalize(v)).collect() };
        Self {
            ingredients: normalize_all(tags.get(TagCategory::Ingredients)),
            appliances: normalize_all(tags.get(TagCategory::Appliances)),
            ustensils: normalize_all(tags.get(TagCategory::Ustensils)),
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let ingredients: Vec<String> = recipe.ingredient_names().map(normalize).collect();
        let has_all_ingredients = self.ingredients.iter().all(|tag| ingredients.contains(tag));

        let has_appliance =
            self.appliances.is_empty() || self.appliances.contains(&normalize(&recipe.appliance));

        let ustensils: Vec<String> = recipe.ustensils.iter().map(|u| normalize(u)).collect();
        let has_all_ustensils = self.ustensils.iter().all(|tag| ustensils.contains(tag));

        has_all_ingredients && has_appliance && has_all_ustensils
    }
}

/// The visible subset for `query` and `tags`.
///
/// Text search only runs once the query reaches [`MIN_QUERY_LEN`]
/// characters; the tag filter always runs.
pub fn apply_filters<'a>(recipes: &'a [Recipe], query: &str, tags: &ActiveTags) -> Vec<&'a Recipe> {
    let results = if query.chars().count() >= MIN_QUERY_LEN {
        search_recipes(recipes, query)
    } else {
        recipes.iter().collect()
    };
    let after_search = results.len();

    let results = filter_by_tags(results, tags);

    debug!(
        "query {:?} with {} tag(s): {} -> {} -> {} recipes",
        query,
        tags.len(),
        recipes.len(),
        after_search,
        results.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn recipe(name: &str, appliance: &str, ingredients: &[&str], ustensils: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            appliance: appliance.to_string(),
            ingredients: ingredients.iter().map(|i| Ingredient::new(*i)).collect(),
            ustensils: ustensils.iter().map(|u| u.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingredient_tags_are_exact_not_substring() {
        let recipes = vec![recipe("Salade", "Saladier", &["Tomates cerises"], &[])];
        let mut tags = ActiveTags::new();
        tags.add("tomate", TagCategory::Ingredients);

        assert!(filter_by_tags(&recipes, &tags).is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let recipes: Vec<Recipe> = Vec::new();
        assert!(apply_filters(&recipes, "coco", &ActiveTags::new()).is_empty());

        let recipes = vec![recipe("Crêpes", "Poêle", &["Farine"], &[])];
        assert_eq!(apply_filters(&recipes, "", &ActiveTags::new()).len(), 1);
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        let recipes = vec![recipe("Pâtes", "Casserole", &["Pâtes"], &[])];
        // "xé" is three bytes but two characters, so no filtering happens
        assert_eq!(apply_filters(&recipes, "xé", &ActiveTags::new()).len(), 1);
        assert!(apply_filters(&recipes, "xéz", &ActiveTags::new()).is_empty());
    }
}
