//! Cart panel view

use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use repclub_common::catalog::EMPTY_CART_MESSAGE;
use repclub_common::Cart;

/// Cart contents in insertion order, the total, and a checkout button
#[component]
pub fn CartPanel(
    /// Cart to render
    cart: Cart,
    /// Called when the checkout button is clicked
    on_checkout: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "p-4 min-h-[calc(100vh-10rem)] bg-white text-black flex flex-col",
            h1 { class: "text-xl font-bold mb-4", "CART" }
            if let Some(summary) = cart.summary() {
                ul { class: "space-y-2 flex-grow",
                    for (index, line) in summary.lines.iter().enumerate() {
                        li { key: "{index}", class: "flex justify-between",
                            span { "{line.name()}" }
                            span { "{line.price()}" }
                        }
                    }
                }
                div { class: "mt-4 font-bold text-xl", "TOTAL: {summary.total}" }
                Button {
                    variant: ButtonVariant::Dark,
                    class: Some("mt-4 justify-center".to_string()),
                    onclick: move |_| on_checkout.call(()),
                    "CHECKOUT"
                }
            } else {
                p { class: "text-sm flex-grow", "{EMPTY_CART_MESSAGE}" }
            }
        }
    }
}
