//! repclub-common - Storefront state shared by the view and web crates
//!
//! Pure data structures with no I/O and no UI framework: the section tag,
//! money, the cart, the session state machine, and the fixed catalog copy.

pub mod cart;
pub mod catalog;
pub mod price;
pub mod section;
pub mod session;

pub use cart::{Cart, CartLineItem, CartSummary};
pub use price::Price;
pub use section::Section;
pub use session::{StorefrontAction, StorefrontSession};
