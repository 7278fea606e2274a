//! Phone frame layout
//!
//! Renders the device-shaped shell: a header strip on top and the active
//! panel below it.

use dioxus::prelude::*;

/// Phone frame view (pure, props-based)
#[component]
pub fn PhoneFrame(
    /// Header strip (typically the tab strip)
    header: Element,
    /// Active panel
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-200 p-4 font-sans",
            div { class: "max-w-md mx-auto",
                div { class: "bg-black rounded-3xl overflow-hidden",
                    {header}
                    div { {children} }
                }
            }
        }
    }
}
