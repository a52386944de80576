//! Order summary text.

use serde::Serialize;

use crate::cart::Cart;
use crate::money::NumberFormat;

/// Text used when the cart has no lines.
pub const EMPTY_CART_TEXT: &str = "Mi carrito está vacío.";

/// Opening line of a non-empty summary, followed by a blank line.
pub const SUMMARY_GREETING: &str =
    "¡Hola! Me gustaría hacer un pedido con los siguientes productos de Aythana:\n\n";

/// Label in front of the formatted total.
pub const SUMMARY_TOTAL_LABEL: &str = "Total estimado: ";

/// Closing paragraph of a non-empty summary.
pub const SUMMARY_CLOSING: &str =
    "Por favor, confirmen disponibilidad y el proceso de pago. Gracias.";

/// Order text plus the numeric total it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Multi-line order text.
    pub text: String,
    /// Sum of price times quantity.
    pub total: u64,
}

impl OrderSummary {
    /// Build the summary for a cart.
    ///
    /// ```text
    /// ¡Hola! Me gustaría hacer un pedido con los siguientes productos de Aythana:
    ///
    /// 2 x Shampoo Nutritivo ($2.500) - Subtotal: $5.000
    ///
    /// Total estimado: $5.000
    ///
    /// Por favor, confirmen disponibilidad y el proceso de pago. Gracias.
    /// ```
    pub fn for_cart(cart: &Cart, format: &NumberFormat) -> Self {
        if cart.is_empty() {
            return Self {
                text: EMPTY_CART_TEXT.to_string(),
                total: 0,
            };
        }

        let mut text = String::from(SUMMARY_GREETING);
        let mut total = 0u64;

        for item in cart.items() {
            let subtotal = item.subtotal();
            text.push_str(&format!(
                "{} x {} ({}) - Subtotal: {}\n",
                item.quantity,
                item.name,
                format.price(u64::from(item.price)),
                format.price(subtotal),
            ));
            total = total.saturating_add(subtotal);
        }

        text.push('\n');
        text.push_str(SUMMARY_TOTAL_LABEL);
        text.push_str(&format.price(total));
        text.push_str("\n\n");
        text.push_str(SUMMARY_CLOSING);

        Self { text, total }
    }

    /// Check if this is the empty-cart summary.
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.text == EMPTY_CART_TEXT
    }

    /// The summary without its greeting, for showing back to the customer.
    pub fn body(&self) -> &str {
        self.text
            .strip_prefix(SUMMARY_GREETING)
            .unwrap_or(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let shampoo = Product::new(1, "Shampoo Nutritivo", 2500);
        cart.add_product(&shampoo).unwrap();
        cart.add_product(&shampoo).unwrap();
        cart.add_product(&Product::new(3, "Mascarilla Hidratante", 3800))
            .unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::for_cart(&Cart::new(), &NumberFormat::ES_AR);
        assert_eq!(summary.text, "Mi carrito está vacío.");
        assert_eq!(summary.total, 0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_summary_text() {
        let summary = OrderSummary::for_cart(&sample_cart(), &NumberFormat::ES_AR);
        let expected = "¡Hola! Me gustaría hacer un pedido con los siguientes productos de Aythana:\n\n\
                        2 x Shampoo Nutritivo ($2.500) - Subtotal: $5.000\n\
                        1 x Mascarilla Hidratante ($3.800) - Subtotal: $3.800\n\
                        \n\
                        Total estimado: $8.800\n\
                        \n\
                        Por favor, confirmen disponibilidad y el proceso de pago. Gracias.";
        assert_eq!(summary.text, expected);
        assert_eq!(summary.total, 8800);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summary_respects_locale() {
        let summary = OrderSummary::for_cart(&sample_cart(), &NumberFormat::ES_ES);
        assert!(summary.text.contains("1 x Mascarilla Hidratante ($3800) - Subtotal: $3800"));
        assert!(summary.text.contains("Total estimado: $8800"));
    }

    #[test]
    fn test_body_strips_greeting() {
        let summary = OrderSummary::for_cart(&sample_cart(), &NumberFormat::ES_AR);
        assert!(summary.body().starts_with("2 x Shampoo Nutritivo"));

        let empty = OrderSummary::for_cart(&Cart::new(), &NumberFormat::ES_AR);
        assert_eq!(empty.body(), EMPTY_CART_TEXT);
    }
}
