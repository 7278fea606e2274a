//! Fixed storefront content
//!
//! There is no backing catalog; the page sells one product and lists a fixed
//! set of book categories.

use crate::cart::CartLineItem;
use crate::price::Price;

/// The single product offered on the patch panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub attribution: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub image_src: &'static str,
    pub image_alt: &'static str,
}

impl Product {
    pub fn line_item(&self) -> CartLineItem {
        CartLineItem::new(self.name, self.price)
    }
}

pub const FEATURED_PRODUCT: Product = Product {
    name: "Panther's Free Food Program Patch",
    attribution: "Philadelphia Printworks",
    price: Price::from_dollars(10),
    description: "On January, 1969, the Free Breakfast for School Children Program was \
        initiated at St. Augustine's Church in Oakland by the Black Panther Party. \
        The Panthers would cook and serve...",
    image_src: "/placeholder.svg",
    image_alt: "Historical photo of two women with 'People's Free Food Program' bags",
};

/// Line item added by the patch panel's add-to-cart action.
pub fn featured_line_item() -> CartLineItem {
    FEATURED_PRODUCT.line_item()
}

pub const STORE_NAME: &str = "REPCLUB";
pub const TAGLINE: &str =
    "IS A CONCEPT BOOKSHOP & CREATIVE SPACE CURATED BY BLACKNESS IN LOS ANGELES.";
pub const OFFERINGS: &str =
    "Books, Audiobooks, Noname's Book Club, Home + Apparel & Gift Cards";
pub const OWNERSHIP: &str = "BLACK-OWNED. WOMAN-OWNED.";

pub const CONTACT_PHONE: &str = "+1 323-591-0012";
pub const CONTACT_EMAIL: &str = "info@reparations.club";
pub const CONTACT_STREET: &str = "3054 S. Victoria Ave.";
pub const CONTACT_CITY: &str = "Los Angeles, CA 90016";

pub const BOOK_CATEGORIES: [&str; 5] = [
    "Audiobooks",
    "Noname's Book Club",
    "Home + Apparel",
    "Gift Cards",
    "All",
];

pub const NEWSLETTER_HEADING: &str = "STAY IN TOUCH";
pub const NEWSLETTER_PLACEHOLDER: &str = "Email address";

/// Segments in the rep panel's progress indicator; only the first is lit.
pub const REP_PROGRESS_SEGMENTS: usize = 4;
pub const REP_ACTIVE_SEGMENT: usize = 0;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_line_item() {
        let item = featured_line_item();
        assert_eq!(item.name(), "Panther's Free Food Program Patch");
        assert_eq!(item.price(), Price::from_dollars(10));
    }

    #[test]
    fn test_line_item_name_matches_displayed_product() {
        assert_eq!(featured_line_item().name(), FEATURED_PRODUCT.name);
    }

    #[test]
    fn test_rep_active_segment_in_range() {
        assert!(REP_ACTIVE_SEGMENT < REP_PROGRESS_SEGMENTS);
    }
}
