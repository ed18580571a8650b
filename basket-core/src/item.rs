use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;

/// Identifier assigned when an item is added. Never reused within a process.
pub type ItemId = u64;

/// Closed set of shopping categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Produce,
    Dairy,
    Bakery,
    MeatAndFish,
    Pantry,
    Frozen,
    Beverages,
    Household,
    Other,
}

impl Category {
    /// All categories, in the order the form offers them.
    pub const ALL: [Category; 9] = [
        Category::Produce,
        Category::Dairy,
        Category::Bakery,
        Category::MeatAndFish,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::Household,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::MeatAndFish => "Meat & Fish",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Household => "Household",
            Category::Other => "Other",
        }
    }

    /// Display label for an optional category; unset shows as "uncategorized".
    pub fn display(category: Option<Category>) -> &'static str {
        category.map(Category::label).unwrap_or("uncategorized")
    }

    /// Step through `None` followed by [`Category::ALL`], wrapping at both ends.
    pub fn cycle(current: Option<Category>, forward: bool) -> Option<Category> {
        // Slot 0 is "uncategorized"
        let slots = Self::ALL.len() + 1;
        let index = match current {
            None => 0,
            Some(c) => Self::ALL.iter().position(|&x| x == c).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (index + 1) % slots
        } else {
            (index + slots - 1) % slots
        };
        if next == 0 { None } else { Some(Self::ALL[next - 1]) }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An item on the active or archived list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub category: Option<Category>,
    pub suggested_by: String,
}

impl Item {
    /// Unit price times quantity, or `None` if it does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        line_total(self.price, self.quantity)
    }
}

pub(crate) fn line_total(price: Decimal, quantity: u32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

pub(crate) fn names_collide(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Issues time-based, strictly increasing item ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: ItemId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: the current time in milliseconds, bumped past the last id if
    /// the clock has not moved (or moved backwards).
    pub fn next_id(&mut self) -> ItemId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as ItemId)
            .unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, price: Decimal) -> Item {
        Item {
            id: 1,
            name: name.to_string(),
            quantity,
            price,
            category: None,
            suggested_by: String::new(),
        }
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        let milk = item("Milk", 2, Decimal::new(350, 2));
        assert_eq!(milk.subtotal(), Some(Decimal::new(700, 2)));
    }

    #[test]
    fn subtotal_overflow_is_none() {
        let huge = item("Gold", u32::MAX, Decimal::MAX);
        assert_eq!(huge.subtotal(), None);
    }

    #[test]
    fn names_compare_case_insensitively() {
        assert!(names_collide("Milk", "milk"));
        assert!(names_collide("Milk", "MILK"));
        assert!(!names_collide("Milk", "Milk "));
    }

    #[test]
    fn ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn unset_category_displays_as_uncategorized() {
        assert_eq!(Category::display(None), "uncategorized");
        assert_eq!(Category::display(Some(Category::Bakery)), "Bakery");
    }

    #[test]
    fn cycle_wraps_through_uncategorized() {
        assert_eq!(Category::cycle(None, true), Some(Category::Produce));
        assert_eq!(Category::cycle(Some(Category::Other), true), None);
        assert_eq!(Category::cycle(None, false), Some(Category::Other));
        assert_eq!(Category::cycle(Some(Category::Produce), false), None);
    }
}
