//! Home panel view

use dioxus::prelude::*;
use repclub_common::catalog::{
    CONTACT_CITY, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_STREET, OFFERINGS, OWNERSHIP, STORE_NAME,
    TAGLINE,
};

/// Store intro and contact details
#[component]
pub fn HomePanel() -> Element {
    rsx! {
        div { class: "p-4 bg-[#d4ff4f] min-h-[calc(100vh-10rem)]",
            h1 { class: "text-2xl sm:text-3xl font-black mb-2", "{STORE_NAME}" }
            p { class: "text-sm font-bold mb-4", "{TAGLINE}" }
            p { class: "text-sm mb-4", "{OFFERINGS}" }
            p { class: "text-sm font-bold mb-4", "{OWNERSHIP}" }
            address { class: "text-xs not-italic",
                "{CONTACT_PHONE}"
                br {}
                a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                br {}
                "{CONTACT_STREET}"
                br {}
                "{CONTACT_CITY}"
            }
        }
    }
}
