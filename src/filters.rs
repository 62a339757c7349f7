use std::collections::BTreeSet;

use crate::model::Recipe;
use crate::normalize::contains_normalized;
use crate::tags::TagCategory;

/// Dropdown contents derived from a set of recipes.
///
/// Values are lowercased (accents kept), de-duplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterLists {
    pub ingredients: Vec<String>,
    pub appliances: Vec<String>,
    pub ustensils: Vec<String>,
}

impl FilterLists {
    pub fn from_recipes<'a, R>(recipes: R) -> Self
    where
        R: IntoIterator<Item = &'a Recipe>,
        R::IntoIter: Clone,
    {
        let recipes = recipes.into_iter();
        Self {
            ingredients: unique_ingredients(recipes.clone()),
            appliances: unique_appliances(recipes.clone()),
            ustensils: unique_ustensils(recipes),
        }
    }

    pub fn get(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Ingredients => &self.ingredients,
            TagCategory::Appliances => &self.appliances,
            TagCategory::Ustensils => &self.ustensils,
        }
    }
}

fn unique_sorted<'v>(values: impl Iterator<Item = &'v str>) -> Vec<String> {
    values
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn unique_ingredients<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<String> {
    unique_sorted(recipes.into_iter().flat_map(|r| r.ingredient_names()))
}

pub fn unique_appliances<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<String> {
    unique_sorted(recipes.into_iter().map(|r| r.appliance.as_str()))
}

pub fn unique_ustensils<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<String> {
    unique_sorted(
        recipes
            .into_iter()
            .flat_map(|r| r.ustensils.iter().map(String::as_str)),
    )
}

/// Narrow a dropdown while the user types in its search box.
///
/// Items are matched on their displayed text; unlike the main search there
/// is no minimum length, and an empty term keeps everything.
pub fn search_in_dropdown<'a>(items: &'a [String], term: &str) -> Vec<&'a str> {
    items
        .iter()
        .map(String::as_str)
        .filter(|item| contains_normalized(item, term))
        .collect()
}
