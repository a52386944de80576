//! Product and catalog types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::CartError;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: u32,
}

impl Product {
    /// Create a new product.
    pub fn new(id: u32, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
        }
    }
}

/// The fixed set of products a cart can hold, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting zero and duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CartError> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.id.get() == 0 {
                return Err(CartError::InvalidCatalog(format!(
                    "product {:?} has id 0",
                    product.name
                )));
            }
            if !seen.insert(product.id) {
                return Err(CartError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.name.trim().is_empty() {
                return Err(CartError::InvalidCatalog(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The Aythana hair-care line.
    pub fn aythana() -> Self {
        Self {
            products: vec![
                Product::new(1, "Shampoo Nutritivo", 2500),
                Product::new(2, "Acondicionador Reparador", 2300),
                Product::new(3, "Mascarilla Hidratante", 3800),
                Product::new(4, "Sérum Protector", 1950),
                Product::new(5, "Alisado", 2750),
                Product::new(6, "Restaurador de Puntas", 4650),
                Product::new(7, "Acondicionador Loreal", 1950),
                Product::new(8, "Restaurador Molecular", 3500),
            ],
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Check whether an id belongs to the catalog.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::aythana()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aythana_catalog() {
        let catalog = Catalog::aythana();
        assert_eq!(catalog.len(), 8);

        let shampoo = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(shampoo.name, "Shampoo Nutritivo");
        assert_eq!(shampoo.price, 2500);

        assert_eq!(catalog.get(ProductId::new(3)).unwrap().price, 3800);
        assert!(catalog.get(ProductId::new(9)).is_none());
        assert!(!catalog.contains(ProductId::new(0)));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = Catalog::new(vec![
            Product::new(1, "A", 100),
            Product::new(1, "B", 200),
        ]);
        assert!(matches!(result, Err(CartError::InvalidCatalog(_))));
    }

    #[test]
    fn test_new_rejects_zero_id_and_blank_name() {
        assert!(Catalog::new(vec![Product::new(0, "A", 100)]).is_err());
        assert!(Catalog::new(vec![Product::new(2, "  ", 100)]).is_err());
    }

    #[test]
    fn test_iter_keeps_order() {
        let catalog = Catalog::new(vec![
            Product::new(5, "E", 1),
            Product::new(2, "B", 1),
        ])
        .unwrap();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![5, 2]);
    }
}
