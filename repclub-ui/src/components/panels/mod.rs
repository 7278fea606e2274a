//! The five storefront panels

mod books;
mod cart;
mod home;
mod patch;
mod rep;

pub use books::BooksPanel;
pub use cart::CartPanel;
pub use home::HomePanel;
pub use patch::PatchPanel;
pub use rep::RepPanel;
