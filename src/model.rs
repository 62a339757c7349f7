use serde::{Deserialize, Serialize};

/// A recipe from the catalogue. Recipes are loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: u32,
    /// Image file name, relative to the configured images directory
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    /// Preparation time in minutes
    pub time: u32,
    pub description: String,
    pub appliance: String,
    pub ustensils: Vec<String>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Quantity label shown next to the ingredient name, e.g. `"400 grammes"`.
    ///
    /// A zero quantity is treated as missing.
    pub fn quantity_label(&self) -> Option<String> {
        let quantity = self.quantity.filter(|q| *q != 0.0);
        match (quantity, self.unit.as_deref()) {
            (Some(q), Some(unit)) => Some(format!("{} {}", q, unit)),
            (Some(q), None) => Some(q.to_string()),
            (None, Some(unit)) => Some(unit.to_string()),
            (None, None) => None,
        }
    }
}

impl Recipe {
    /// Iterate over the ingredient names only
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.ingredient.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_label_variants() {
        assert_eq!(
            Ingredient::new("Lait de coco")
                .with_quantity(400.0)
                .with_unit("ml")
                .quantity_label()
                .as_deref(),
            Some("400 ml")
        );
        assert_eq!(
            Ingredient::new("Citron").with_quantity(2.0).quantity_label().as_deref(),
            Some("2")
        );
        assert_eq!(
            Ingredient::new("Sel").with_unit("pincée").quantity_label().as_deref(),
            Some("pincée")
        );
        assert_eq!(Ingredient::new("Glaçons").quantity_label(), None);
        assert_eq!(
            Ingredient::new("Sucre").with_quantity(0.5).with_unit("kg").quantity_label().as_deref(),
            Some("0.5 kg")
        );
    }

    #[test]
    fn test_recipe_deserializes_catalogue_format() {
        let json = r#"{
            "id": 1,
            "image": "Recette01.jpg",
            "name": "Limonade de Coco",
            "servings": 1,
            "ingredients": [
                {"ingredient": "Lait de coco", "quantity": 400, "unit": "ml"},
                {"ingredient": "Glaçons"}
            ],
            "time": 10,
            "description": "Mettre les glaçons à votre goût dans le blender",
            "appliance": "Blender",
            "ustensils": ["cuillère à Soupe", "verres"]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "Limonade de Coco");
        assert_eq!(recipe.ingredients[0].quantity, Some(400.0));
        assert!(recipe.ingredients[1].unit.is_none());
        assert_eq!(
            recipe.ingredient_names().collect::<Vec<_>>(),
            vec!["Lait de coco", "Glaçons"]
        );
    }
}
