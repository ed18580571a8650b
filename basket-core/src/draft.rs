use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::item::{Category, Item, ItemId};

/// A single field change coming from a form input.
///
/// Quantity arrives as a signed value because form input can go below one;
/// it is clamped when applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Quantity(i64),
    Price(Decimal),
    Category(Option<Category>),
    SuggestedBy(String),
}

/// Shared field-update rules for the new-item draft and the edit draft.
pub trait ApplyField {
    fn apply(&mut self, field: DraftField);
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

/// Uncommitted new item. Has no id until it is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub category: Option<Category>,
    pub suggested_by: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            price: Decimal::ZERO,
            category: None,
            suggested_by: String::new(),
        }
    }
}

impl ItemDraft {
    /// Add-time checks: a non-blank name and a positive price.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(())
    }

    /// Materialize the draft as an item with the given id.
    pub fn to_item(&self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
            category: self.category,
            suggested_by: self.suggested_by.clone(),
        }
    }
}

macro_rules! impl_apply_field {
    ($($ty:ty),*) => {$(
        impl ApplyField for $ty {
            fn apply(&mut self, field: DraftField) {
                match field {
                    DraftField::Name(name) => self.name = name,
                    DraftField::Quantity(q) => self.quantity = clamp_quantity(q),
                    DraftField::Price(price) => self.price = price,
                    DraftField::Category(category) => self.category = category,
                    DraftField::SuggestedBy(who) => self.suggested_by = who,
                }
            }
        }
    )*};
}

impl_apply_field!(ItemDraft, Item);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft() {
        let draft = ItemDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.price, Decimal::ZERO);
        assert_eq!(draft.category, None);
        assert_eq!(draft.suggested_by, "");
    }

    #[test]
    fn quantity_is_clamped_to_one() {
        let mut draft = ItemDraft::default();
        draft.apply(DraftField::Quantity(5));
        assert_eq!(draft.quantity, 5);
        draft.apply(DraftField::Quantity(0));
        assert_eq!(draft.quantity, 1);
        draft.apply(DraftField::Quantity(-3));
        assert_eq!(draft.quantity, 1);
        draft.apply(DraftField::Quantity(i64::MAX));
        assert_eq!(draft.quantity, u32::MAX);
    }

    #[test]
    fn price_is_not_clamped() {
        let mut draft = ItemDraft::default();
        draft.apply(DraftField::Price(Decimal::new(-150, 2)));
        assert_eq!(draft.price, Decimal::new(-150, 2));
    }

    #[test]
    fn validate_requires_name_and_positive_price() {
        let mut draft = ItemDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyName));

        draft.apply(DraftField::Name("Eggs".into()));
        assert_eq!(draft.validate(), Err(ValidationError::NonPositivePrice));

        draft.apply(DraftField::Price(Decimal::new(-1, 0)));
        assert_eq!(draft.validate(), Err(ValidationError::NonPositivePrice));

        draft.apply(DraftField::Price(Decimal::new(299, 2)));
        assert_eq!(draft.validate(), Ok(()));

        draft.apply(DraftField::Name("   ".into()));
        assert_eq!(draft.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn edit_draft_uses_same_rules() {
        let mut item = ItemDraft::default().to_item(7);
        item.apply(DraftField::Quantity(0));
        item.apply(DraftField::Category(Some(Category::Frozen)));
        item.apply(DraftField::SuggestedBy("Sam".into()));
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.category, Some(Category::Frozen));
        assert_eq!(item.suggested_by, "Sam");
    }
}
