use thiserror::Error;

/// Reasons an item cannot go on the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("Price must be greater than zero")]
    NonPositivePrice,

    /// Price times quantity, or the list total, exceeds what a `Decimal` holds.
    #[error("Amount is too large")]
    TooLarge,
}

/// A rejected mutation. The display string is what the alert shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("\"{name}\" is already on the list")]
    Duplicate { name: String },
}
