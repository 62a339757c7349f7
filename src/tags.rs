//! Active tag state.
//!
//! Tags are the filter values a user picked from the ingredient, appliance
//! and ustensil dropdowns. The state is an owned value: a [`Session`]
//! holds one and lends it to the search engine on every recomputation.
//!
//! Membership uses exact string equality, so `"Oeuf"` and `"oeuf"` are two
//! distinct tags. Filtering compares tags in normalized form.
//!
//! [`Session`]: crate::session::Session

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// The three kinds of filter tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Ingredients,
    Appliances,
    Ustensils,
}

impl TagCategory {
    pub const ALL: [TagCategory; 3] = [
        TagCategory::Ingredients,
        TagCategory::Appliances,
        TagCategory::Ustensils,
    ];

    /// Name used in markup `data-type` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Ingredients => "ingredients",
            TagCategory::Appliances => "appliances",
            TagCategory::Ustensils => "ustensils",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagCategory {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredients" => Ok(TagCategory::Ingredients),
            "appliances" => Ok(TagCategory::Appliances),
            "ustensils" => Ok(TagCategory::Ustensils),
            other => Err(RecipeError::UnknownCategory(other.to_string())),
        }
    }
}

/// Selected tags, one ordered set per category
///
/// Only [`add`](ActiveTags::add) and [`remove`](ActiveTags::remove) change
/// the state, so a value is never listed twice in one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TagLists")]
pub struct ActiveTags {
    ingredients: Vec<String>,
    appliances: Vec<String>,
    ustensils: Vec<String>,
}

/// Serialized shape of [`ActiveTags`], before duplicates are dropped
#[derive(Deserialize)]
struct TagLists {
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    appliances: Vec<String>,
    #[serde(default)]
    ustensils: Vec<String>,
}

impl From<TagLists> for ActiveTags {
    fn from(lists: TagLists) -> Self {
        let mut tags = ActiveTags::new();
        for (category, values) in [
            (TagCategory::Ingredients, lists.ingredients),
            (TagCategory::Appliances, lists.appliances),
            (TagCategory::Ustensils, lists.ustensils),
        ] {
            for value in values {
                tags.add(value, category);
            }
        }
        tags
    }
}

impl ActiveTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to `category`. Returns `false` if it was already present.
    pub fn add(&mut self, value: impl Into<String>, category: TagCategory) -> bool {
        let value = value.into();
        let values = self.values_mut(category);
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Remove `value` from `category`. Returns `false` if it was not present.
    pub fn remove(&mut self, value: &str, category: TagCategory) -> bool {
        let values = self.values_mut(category);
        match values.iter().position(|v| v == value) {
            Some(index) => {
                values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str, category: TagCategory) -> bool {
        self.get(category).iter().any(|v| v == value)
    }

    /// Selected values of one category, in insertion order
    pub fn get(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Ingredients => &self.ingredients,
            TagCategory::Appliances => &self.appliances,
            TagCategory::Ustensils => &self.ustensils,
        }
    }

    fn values_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::Ingredients => &mut self.ingredients,
            TagCategory::Appliances => &mut self.appliances,
            TagCategory::Ustensils => &mut self.ustensils,
        }
    }

    /// All selected tags, ingredients first, then appliances, then ustensils
    pub fn iter(&self) -> impl Iterator<Item = (TagCategory, &str)> {
        TagCategory::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |value| (category, value.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.ingredients.len() + self.appliances.len() + self.ustensils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
