//! Patch panel view

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use repclub_common::catalog::FEATURED_PRODUCT;

/// Single product panel
#[component]
pub fn PatchPanel(
    /// Called when the add-to-cart button is clicked
    on_add_to_cart: EventHandler<()>,
) -> Element {
    let product = FEATURED_PRODUCT;
    let heading = product.name.to_uppercase();

    rsx! {
        div { class: "p-4 min-h-[calc(100vh-10rem)] flex flex-col text-white",
            h1 { class: "text-xl font-black mb-2", "{heading}" }
            p { class: "text-sm mb-2", "{product.attribution}" }
            img {
                class: "mb-2",
                src: product.image_src,
                alt: product.image_alt,
                width: "200",
                height: "200",
            }
            p { class: "text-xs mb-4", "{product.description}" }
            div { class: "flex justify-between items-center mt-auto",
                span { class: "text-2xl font-bold", "{product.price}" }
                Button {
                    variant: ButtonVariant::Light,
                    onclick: move |_| on_add_to_cart.call(()),
                    "ADD TO CART"
                }
            }
        }
    }
}
