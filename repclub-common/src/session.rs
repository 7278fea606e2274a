//! Storefront session state machine
//!
//! One session owns the active section and the cart. Every transition is
//! synchronous and infallible: all inputs come from the page's own controls.

use crate::cart::{Cart, CartLineItem};
use crate::catalog;
use crate::section::Section;

/// A user action on the storefront page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorefrontAction {
    /// Tab click
    SelectTab(Section),
    /// Add-to-cart on the patch panel
    AddToCart,
    /// Checkout button on the cart panel (no effect)
    Checkout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontSession {
    active_section: Section,
    cart: Cart,
}

impl StorefrontSession {
    /// Fresh session on the home panel with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// Show `section`. The cart is untouched.
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Append `item` to the cart, then switch to the cart panel.
    pub fn add_to_cart(&mut self, item: CartLineItem) {
        self.cart.push(item);
        self.navigate(Section::Cart);
    }

    /// Placeholder: there is no order submission.
    pub fn checkout(&self) {}

    pub fn apply(&mut self, action: StorefrontAction) {
        match action {
            StorefrontAction::SelectTab(section) => self.navigate(section),
            StorefrontAction::AddToCart => self.add_to_cart(catalog::featured_line_item()),
            StorefrontAction::Checkout => self.checkout(),
        }
    }
}
