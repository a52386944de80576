//! Cart and line item types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::CartError;

/// A line item in the cart.
///
/// Name and price are captured when the product is first added and are not
/// re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product being ordered.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at add time.
    pub price: u32,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1 from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Price times quantity.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// An ordered cart. Insertion order is display and summary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing line items, checking the invariants:
    /// every quantity is at least 1 and no product appears twice.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.quantity == 0 {
                return Err(CartError::InvalidCart(format!(
                    "product {} has quantity 0",
                    item.id
                )));
            }
            if !seen.insert(item.id) {
                return Err(CartError::InvalidCart(format!(
                    "product {} appears more than once",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1. Returns the updated line.
    pub fn add_product(&mut self, product: &Product) -> Result<&LineItem, CartError> {
        if let Some(pos) = self.items.iter().position(|i| i.id == product.id) {
            let item = &mut self.items[pos];
            item.quantity = item
                .quantity
                .checked_add(1)
                .ok_or(CartError::Overflow(product.id.get()))?;
            return Ok(&self.items[pos]);
        }

        self.items.push(LineItem::from_product(product));
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.subtotal()))
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get the line for a product.
    pub fn get_item(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shampoo() -> Product {
        Product::new(1, "Shampoo Nutritivo", 2500)
    }

    fn mascarilla() -> Product {
        Product::new(3, "Mascarilla Hidratante", 3800)
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        let item = cart.add_product(&shampoo()).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.name, "Shampoo Nutritivo");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_existing_increments() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo()).unwrap();
        cart.add_product(&mascarilla()).unwrap();
        let item = cart.add_product(&shampoo()).unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(cart.len(), 2);
        // Incrementing keeps the original position.
        assert_eq!(cart.items()[0].id, ProductId::new(1));
        assert_eq!(cart.items()[1].id, ProductId::new(3));
    }

    #[test]
    fn test_captured_price_not_resynced() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo()).unwrap();

        let repriced = Product::new(1, "Shampoo Nutritivo", 9999);
        cart.add_product(&repriced).unwrap();

        let item = cart.get_item(ProductId::new(1)).unwrap();
        assert_eq!(item.price, 2500);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_counts_and_total() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo()).unwrap();
        cart.add_product(&shampoo()).unwrap();
        cart.add_product(&mascarilla()).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 2 * 2500 + 3800);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo()).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::from_items(vec![LineItem {
            id: ProductId::new(1),
            name: "Shampoo Nutritivo".to_string(),
            price: 2500,
            quantity: u32::MAX,
        }])
        .unwrap();
        assert!(matches!(
            cart.add_product(&shampoo()),
            Err(CartError::Overflow(1))
        ));
        assert_eq!(cart.get_item(ProductId::new(1)).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_from_items_rejects_zero_quantity() {
        let mut item = LineItem::from_product(&shampoo());
        item.quantity = 0;
        assert!(matches!(
            Cart::from_items(vec![item]),
            Err(CartError::InvalidCart(_))
        ));
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let item = LineItem::from_product(&shampoo());
        assert!(Cart::from_items(vec![item.clone(), item]).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = Cart::new();
        cart.add_product(&shampoo()).unwrap();
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1,"name":"Shampoo Nutritivo","price":2500,"quantity":1}]"#
        );
    }
}
