use crate::price::Price;

/// One product added to the cart. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    name: String,
    price: Price,
}

impl CartLineItem {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// What the cart panel shows for a non-empty cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartLineItem>,
    pub total: Price,
}

/// Ordered list of line items.
///
/// Insertion order is display order and duplicates are kept as separate
/// lines. There is no stored total: `total()` sums the items on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Append an item to the end of the cart.
    pub fn push(&mut self, item: CartLineItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line prices.
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::price).sum()
    }

    /// Lines plus total, or `None` when the cart is empty.
    pub fn summary(&self) -> Option<CartSummary> {
        if self.is_empty() {
            return None;
        }
        Some(CartSummary {
            lines: self.items.clone(),
            total: self.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: u64) -> CartLineItem {
        CartLineItem::new(name, Price::from_cents(cents))
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.summary(), None);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut cart = Cart::default();
        cart.push(item("a", 100));
        cart.push(item("b", 200));
        cart.push(item("c", 300));
        let names: Vec<&str> = cart.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let mut cart = Cart::default();
        cart.push(item("patch", 1000));
        cart.push(item("patch", 1000));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0], cart.items()[1]);
    }

    #[test]
    fn test_total_tracks_every_push() {
        let mut cart = Cart::default();
        let mut expected = 0;
        for cents in [1000, 1, 99, 250, 0] {
            cart.push(item("x", cents));
            expected += cents;
            assert_eq!(cart.total(), Price::from_cents(expected));
        }
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::default();
        cart.push(item("a", 1000));
        cart.push(item("b", 550));
        let summary = cart.summary().expect("non-empty cart has a summary");
        assert_eq!(summary.lines, cart.items());
        assert_eq!(summary.total.to_string(), "$15.50");
    }
}
