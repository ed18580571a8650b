use rust_decimal::{Decimal, RoundingStrategy};

use crate::item::Item;

/// Sum of price times quantity over `items`, or `None` on overflow.
pub fn total<'a>(items: impl IntoIterator<Item = &'a Item>) -> Option<Decimal> {
    items
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.subtotal()?))
}

/// Two-decimal display form, e.g. `7.00`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
