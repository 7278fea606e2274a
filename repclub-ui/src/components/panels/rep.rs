//! Rep panel view

use crate::components::utils::rep_segment_states;
use dioxus::prelude::*;
use repclub_common::catalog::FEATURED_PRODUCT;

/// Promotional panel with a static progress indicator
#[component]
pub fn RepPanel() -> Element {
    let segments = rep_segment_states();

    rsx! {
        div { class: "p-4 min-h-[calc(100vh-10rem)] flex flex-col justify-between",
            h1 { class: "text-8xl sm:text-9xl font-black text-white leading-none", "REP" }
            div { class: "text-white text-sm",
                p { "NEW IN: {FEATURED_PRODUCT.name}" }
                div { class: "flex mt-2",
                    for (index, lit) in segments.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if lit { "w-6 h-1 mr-1 bg-white" } else { "w-6 h-1 mr-1 bg-gray-600" },
                        }
                    }
                }
            }
        }
    }
}
