//! Recipe search and tag filtering for the Les Petits Plats catalogue.
//!
//! The visible recipes are always recomputed from scratch out of three
//! inputs: the full collection, the free-text query and the active tags.
//!
//! ```
//! use petits_plats::{apply_filters, builtin_recipes, ActiveTags, TagCategory};
//!
//! let recipes = builtin_recipes();
//! let mut tags = ActiveTags::new();
//! tags.add("four", TagCategory::Appliances);
//!
//! let visible = apply_filters(&recipes, "tarte", &tags);
//! assert!(visible.iter().all(|r| r.appliance == "Four"));
//! ```

pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod model;
pub mod normalize;
pub mod render;
pub mod search;
pub mod session;
pub mod tags;

pub use builder::SessionBuilder;
pub use config::Settings;
pub use data::{builtin_recipes, load_recipes, parse_recipes};
pub use error::RecipeError;
pub use filters::{search_in_dropdown, FilterLists};
pub use model::{Ingredient, Recipe};
pub use normalize::normalize;
pub use render::{HtmlRenderer, RenderedPage};
pub use search::{apply_filters, filter_by_tags, search_recipes, MIN_QUERY_LEN};
pub use session::{Event, Listener, Session, View};
pub use tags::{ActiveTags, TagCategory};
