//! Tab strip - one dot per section plus the live cart counter

use crate::components::button::ChromelessButton;
use crate::components::utils::format_cart_count;
use dioxus::prelude::*;
use repclub_common::Section;

/// A row of dot buttons where exactly one section is active
#[component]
pub fn TabStrip(active: Section, cart_count: usize, on_select: EventHandler<Section>) -> Element {
    rsx! {
        div { class: "h-6 bg-[#d4ff4f] flex items-center justify-between px-2",
            nav { class: "flex space-x-1",
                for section in Section::ALL {
                    ChromelessButton {
                        key: "{section}",
                        class: Some(dot_class(section == active).to_string()),
                        title: Some(section.label().to_string()),
                        aria_label: Some(section.label().to_string()),
                        aria_current: if section == active { Some("page") } else { None },
                        onclick: move |_| on_select.call(section),
                        span { class: "sr-only", "{section.label()}" }
                    }
                }
            }
            div { class: "text-black text-xs font-bold", "{format_cart_count(cart_count)}" }
        }
    }
}

fn dot_class(is_active: bool) -> &'static str {
    if is_active {
        "w-4 h-4 bg-black rounded-full ring-2 ring-white transition-transform hover:scale-110 active:scale-90"
    } else {
        "w-4 h-4 bg-black rounded-full transition-transform hover:scale-110 active:scale-90"
    }
}
