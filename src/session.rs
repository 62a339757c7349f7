//! A browsing session over one recipe collection.
//!
//! The session owns the recipes, the current query and the active tags.
//! Input arrives as [`Event`]s; each event that changes the state causes
//! one full recomputation of the visible recipes, after which every
//! registered [`Listener`] is notified.

use log::debug;

use crate::builder::SessionBuilder;
use crate::filters::FilterLists;
use crate::model::Recipe;
use crate::search::apply_filters;
use crate::tags::{ActiveTags, TagCategory};

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The main search box changed
    QueryChanged(String),
    /// A dropdown item was picked
    TagAdded { category: TagCategory, value: String },
    /// A tag chip was closed
    TagRemoved { category: TagCategory, value: String },
}

/// State handed to listeners after a recomputation
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub query: &'a str,
    pub tags: &'a ActiveTags,
    pub recipes: &'a [&'a Recipe],
    pub filters: &'a FilterLists,
}

/// Receives every recomputed [`View`]
pub trait Listener {
    fn on_update(&mut self, view: &View<'_>);
}

impl<F> Listener for F
where
    F: FnMut(&View<'_>),
{
    fn on_update(&mut self, view: &View<'_>) {
        self(view)
    }
}

pub struct Session {
    recipes: Vec<Recipe>,
    query: String,
    tags: ActiveTags,
    listeners: Vec<Box<dyn Listener>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("recipes", &self.recipes.len())
            .field("query", &self.query)
            .field("tags", &self.tags)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Session {
    /// Creates a new builder for a session
    ///
    /// # Example
    /// ```
    /// use petits_plats::{builtin_recipes, Session};
    ///
    /// let session = Session::builder()
    ///     .recipes(builtin_recipes())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(session.visible().len(), session.recipes().len());
    /// ```
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self::from_parts(recipes, String::new(), ActiveTags::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        recipes: Vec<Recipe>,
        query: String,
        tags: ActiveTags,
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        Self {
            recipes,
            query,
            tags,
            listeners,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tags(&self) -> &ActiveTags {
        &self.tags
    }

    pub fn subscribe(&mut self, listener: impl Listener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Recipes matching the current query and tags
    pub fn visible(&self) -> Vec<&Recipe> {
        apply_filters(&self.recipes, &self.query, &self.tags)
    }

    /// Dropdown contents for the current visible recipes
    pub fn filter_lists(&self) -> FilterLists {
        FilterLists::from_recipes(self.visible().into_iter())
    }

    /// Apply `event`, then recompute and notify if anything changed.
    ///
    /// A query change always counts as a change. Adding a tag that is
    /// already active, or removing one that is not, does nothing.
    pub fn handle(&mut self, event: Event) -> bool {
        let changed = match event {
            Event::QueryChanged(query) => {
                self.query = query;
                true
            }
            Event::TagAdded { category, value } => {
                debug!("adding {} tag {:?}", category, value);
                self.tags.add(value, category)
            }
            Event::TagRemoved { category, value } => {
                debug!("removing {} tag {:?}", category, value);
                self.tags.remove(&value, category)
            }
        };

        if changed {
            self.refresh();
        }
        changed
    }

    /// Recompute and notify listeners without changing anything
    pub fn refresh(&mut self) {
        let visible = apply_filters(&self.recipes, &self.query, &self.tags);
        let filters = FilterLists::from_recipes(visible.iter().copied());
        let view = View {
            query: &self.query,
            tags: &self.tags,
            recipes: &visible,
            filters: &filters,
        };

        for listener in &mut self.listeners {
            listener.on_update(&view);
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.handle(Event::QueryChanged(query.into()))
    }

    pub fn add_tag(&mut self, value: impl Into<String>, category: TagCategory) -> bool {
        self.handle(Event::TagAdded {
            category,
            value: value.into(),
        })
    }

    pub fn remove_tag(&mut self, value: impl Into<String>, category: TagCategory) -> bool {
        self.handle(Event::TagRemoved {
            category,
            value: value.into(),
        })
    }
}
