//! Basket core - in-memory shopping list state.
//!
//! All state lives in a single [`ShoppingList`]. The view layer never mutates
//! it directly; it sends [`Action`]s through [`ShoppingList::dispatch`] and
//! re-renders from the accessors afterwards.

pub mod alert;
pub mod draft;
pub mod edit;
pub mod error;
pub mod item;
pub mod list;
pub mod total;

pub use alert::{AlertChannel, DEFAULT_ALERT_WINDOW};
pub use draft::{ApplyField, DraftField, ItemDraft};
pub use edit::EditSession;
pub use error::{ListError, ValidationError};
pub use item::{Category, IdGenerator, Item, ItemId};
pub use list::{Action, Outcome, ShoppingList, ViewMode};
pub use total::{format_money, total};

pub use rust_decimal::Decimal;
