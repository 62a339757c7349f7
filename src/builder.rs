use crate::model::Recipe;
use crate::session::{Listener, Session};
use crate::tags::{ActiveTags, TagCategory};
use crate::RecipeError;

/// Builder for a [`Session`] with an initial query, tags and listeners
#[derive(Default)]
pub struct SessionBuilder {
    recipes: Option<Vec<Recipe>>,
    query: String,
    tags: ActiveTags,
    listeners: Vec<Box<dyn Listener>>,
}

impl SessionBuilder {
    /// Set the recipe collection to browse
    ///
    /// # Example
    /// ```
    /// use petits_plats::{builtin_recipes, Session};
    ///
    /// let builder = Session::builder()
    ///     .recipes(builtin_recipes());
    /// ```
    pub fn recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Some(recipes);
        self
    }

    /// Set the initial search query
    ///
    /// Like any query, it only narrows the results once it is at least
    /// three characters long.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Start with `value` selected in `category`
    ///
    /// # Example
    /// ```
    /// use petits_plats::{builtin_recipes, Session, TagCategory};
    ///
    /// let session = Session::builder()
    ///     .recipes(builtin_recipes())
    ///     .tag(TagCategory::Appliances, "four")
    ///     .build()
    ///     .unwrap();
    /// assert!(session.visible().iter().all(|r| r.appliance == "Four"));
    /// ```
    pub fn tag(mut self, category: TagCategory, value: impl Into<String>) -> Self {
        self.tags.add(value, category);
        self
    }

    /// Register a listener notified after every recomputation
    pub fn listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Build the session
    ///
    /// Listeners are not notified here; call [`Session::refresh`] for the
    /// initial render.
    ///
    /// # Errors
    /// Returns `RecipeError::BuilderError` if no recipe collection was set.
    pub fn build(self) -> Result<Session, RecipeError> {
        let recipes = self.recipes.ok_or_else(|| {
            RecipeError::BuilderError("No recipe collection specified. Use .recipes()".to_string())
        })?;

        Ok(Session::from_parts(recipes, self.query, self.tags, self.listeners))
    }
}
