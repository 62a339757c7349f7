//! HTML rendering of the recipe grid, the filter dropdowns and the active
//! tag chips.
//!
//! Everything here produces strings; inserting them into a page is up to
//! the host. All recipe and tag text is escaped.

use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::Recipe;
use crate::session::{Listener, View};
use crate::tags::{ActiveTags, TagCategory};

/// First character uppercased, the rest lowercased
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Card markup for one recipe
pub fn recipe_card(recipe: &Recipe, images_dir: &str) -> String {
    let image_path = format!("{}/{}", images_dir.trim_end_matches('/'), recipe.image);
    let name = encode_text(&recipe.name);

    let mut ingredients = String::new();
    for ingredient in &recipe.ingredients {
        let _ = write!(
            ingredients,
            r#"<div class="ingredient-item"><span class="ingredient-name">{}</span>"#,
            encode_text(&ingredient.ingredient)
        );
        if let Some(quantity) = ingredient.quantity_label() {
            let _ = write!(
                ingredients,
                r#"<span class="ingredient-quantity">{}</span>"#,
                encode_text(&quantity)
            );
        }
        ingredients.push_str("</div>");
    }

    format!(
        concat!(
            r#"<div class="col-12 col-md-6 col-lg-4">"#,
            r#"<article class="recipe-card">"#,
            r#"<div class="recipe-image-container">"#,
            r#"<img src="{image}" alt="{alt}" class="recipe-image">"#,
            r#"<span class="recipe-time">{time}min</span>"#,
            r#"</div>"#,
            r#"<div class="recipe-content">"#,
            r#"<h3 class="recipe-title">{name}</h3>"#,
            r#"<div><h4 class="recipe-label">Recette</h4>"#,
            r#"<p class="recipe-description">{description}</p></div>"#,
            r#"<div class="recipe-ingredients"><h4 class="recipe-label">Ingrédients</h4>"#,
            r#"<div class="ingredients-grid">{ingredients}</div></div>"#,
            r#"</div>"#,
            r#"</article>"#,
            r#"</div>"#,
        ),
        image = encode_double_quoted_attribute(&image_path),
        alt = encode_double_quoted_attribute(&recipe.name),
        time = recipe.time,
        name = name,
        description = encode_text(&recipe.description),
        ingredients = ingredients,
    )
}

/// Cards for every recipe, in order
pub fn recipe_grid(recipes: &[&Recipe], images_dir: &str) -> String {
    recipes
        .iter()
        .map(|recipe| recipe_card(recipe, images_dir))
        .collect()
}

/// Counter shown above the grid
pub fn recipe_count_label(count: usize) -> String {
    if count > 1 {
        format!("{} recettes", count)
    } else {
        format!("{} recette", count)
    }
}

/// `<li>` items of one filter dropdown
pub fn filter_list(items: &[String], category: TagCategory) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<li data-value="{}" data-type="{}">{}</li>"#,
                encode_double_quoted_attribute(item),
                category,
                encode_text(&capitalize(item))
            )
        })
        .collect()
}

/// One removable chip per active tag
pub fn active_tags(tags: &ActiveTags) -> String {
    tags.iter()
        .map(|(category, value)| {
            let label = capitalize(value);
            format!(
                concat!(
                    r#"<div class="tag"><span>{label}</span>"#,
                    r#"<button class="tag-close" data-value="{value}" data-type="{category}" "#,
                    r#"aria-label="Supprimer le filtre {aria}">"#,
                    r#"<i class="fas fa-times"></i></button></div>"#,
                ),
                label = encode_text(&label),
                value = encode_double_quoted_attribute(value),
                category = category,
                aria = encode_double_quoted_attribute(&label),
            )
        })
        .collect()
}

/// Everything the page shows for one state of the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub grid: String,
    pub count_label: String,
    pub no_results: bool,
    pub active_tags: String,
    pub ingredients_list: String,
    pub appliances_list: String,
    pub ustensils_list: String,
}

impl RenderedPage {
    /// All page regions, each wrapped in the element the host page uses
    /// for it. The no-results notice is hidden while recipes are shown.
    pub fn to_html(&self) -> String {
        let no_results_style = if self.no_results {
            "display: block"
        } else {
            "display: none"
        };

        format!(
            concat!(
                r#"<p id="recipesCount">{count}</p>"#,
                "\n",
                r#"<div id="activeTags">{tags}</div>"#,
                "\n",
                r#"<ul id="ingredientsList" class="dropdown-list">{ingredients}</ul>"#,
                "\n",
                r#"<ul id="appliancesList" class="dropdown-list">{appliances}</ul>"#,
                "\n",
                r#"<ul id="ustensilsList" class="dropdown-list">{ustensils}</ul>"#,
                "\n",
                r#"<div id="noResults" style="{style}">Aucune recette ne correspond à votre recherche.</div>"#,
                "\n",
                r#"<div id="recipesGrid">{grid}</div>"#,
            ),
            count = encode_text(&self.count_label),
            tags = self.active_tags,
            ingredients = self.ingredients_list,
            appliances = self.appliances_list,
            ustensils = self.ustensils_list,
            style = no_results_style,
            grid = self.grid,
        )
    }
}

/// Listener that re-renders the page on every update.
///
/// Clones share the same output, so keep one clone and hand another to
/// the session.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    images_dir: String,
    page: Rc<RefCell<RenderedPage>>,
}

impl HtmlRenderer {
    pub fn new(images_dir: impl Into<String>) -> Self {
        Self {
            images_dir: images_dir.into(),
            page: Rc::default(),
        }
    }

    pub fn render(&self, view: &View<'_>) -> RenderedPage {
        RenderedPage {
            grid: recipe_grid(view.recipes, &self.images_dir),
            count_label: recipe_count_label(view.recipes.len()),
            no_results: view.recipes.is_empty(),
            active_tags: active_tags(view.tags),
            ingredients_list: filter_list(&view.filters.ingredients, TagCategory::Ingredients),
            appliances_list: filter_list(&view.filters.appliances, TagCategory::Appliances),
            ustensils_list: filter_list(&view.filters.ustensils, TagCategory::Ustensils),
        }
    }

    /// The most recently rendered page
    pub fn page(&self) -> RenderedPage {
        self.page.borrow().clone()
    }
}

impl Listener for HtmlRenderer {
    fn on_update(&mut self, view: &View<'_>) {
        let page = self.render(view);
        *self.page.borrow_mut() = page;
    }
}
