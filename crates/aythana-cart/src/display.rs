//! Item-count display contract.

use crate::cart::Cart;

/// A widget showing how many items are in the cart.
pub trait CountDisplay {
    /// Write the count. `visible` is false when the count is zero.
    fn render(&mut self, count: u64, visible: bool);
}

/// Recompute the item count and write it to `display`, hiding it when the
/// cart is empty.
pub fn refresh_count_display<D: CountDisplay + ?Sized>(cart: &Cart, display: &mut D) {
    let count = cart.item_count();
    display.render(count, count > 0);
}

/// Plain in-memory count display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountBadge {
    pub count: u64,
    pub visible: bool,
}

impl CountDisplay for CountBadge {
    fn render(&mut self, count: u64, visible: bool) {
        self.count = count;
        self.visible = visible;
    }
}
