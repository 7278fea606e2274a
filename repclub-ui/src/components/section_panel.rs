//! Render selection: exactly one panel for the active section

use crate::components::panels::{BooksPanel, CartPanel, HomePanel, PatchPanel, RepPanel};
use dioxus::prelude::*;
use repclub_common::{Cart, Section};
use tracing::trace;

/// Renders the panel for `section`. Only the patch and cart panels take input.
#[component]
pub fn SectionPanel(
    section: Section,
    cart: Cart,
    on_add_to_cart: EventHandler<()>,
    on_checkout: EventHandler<()>,
) -> Element {
    trace!("Rendering {} panel ({} cart lines)", section, cart.len());

    match section {
        Section::Home => rsx! { HomePanel {} },
        Section::Rep => rsx! { RepPanel {} },
        Section::Patch => rsx! { PatchPanel { on_add_to_cart } },
        Section::Books => rsx! { BooksPanel {} },
        Section::Cart => rsx! { CartPanel { cart, on_checkout } },
    }
}
