use thiserror::Error;

/// Errors that can occur around the recipe catalogue
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to read the recipe data file
    #[error("Failed to read recipe data: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe data is not a valid recipe list
    #[error("Invalid recipe data: {0}")]
    Json(#[from] serde_json::Error),

    /// Tag category name is not one of ingredients, appliances, ustensils
    #[error("Unknown tag category: {0}")]
    UnknownCategory(String),

    /// Session builder error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
