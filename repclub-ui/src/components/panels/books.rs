//! Books panel view

use dioxus::prelude::*;
use repclub_common::catalog::{
    BOOK_CATEGORIES, CONTACT_EMAIL, NEWSLETTER_HEADING, NEWSLETTER_PLACEHOLDER,
};

/// Category list plus the newsletter block.
///
/// The email field is presentational: it has no submit handler.
#[component]
pub fn BooksPanel() -> Element {
    rsx! {
        div { class: "min-h-[calc(100vh-10rem)] flex flex-col",
            div { class: "bg-white p-4 flex-grow",
                h2 { class: "text-xl font-serif mb-4", "BOOKS" }
                ul { class: "space-y-2",
                    for category in BOOK_CATEGORIES {
                        li { key: "{category}", class: "text-lg font-bold text-black",
                            "{category}"
                        }
                    }
                }
            }
            div { class: "bg-[#d4ff4f] p-4 text-black",
                h3 { class: "text-sm font-bold mb-2", "{NEWSLETTER_HEADING}" }
                input {
                    class: "w-full px-2 py-1 border border-black bg-transparent text-sm",
                    r#type: "email",
                    placeholder: NEWSLETTER_PLACEHOLDER,
                }
                p { class: "text-xs mt-2", "{CONTACT_EMAIL}" }
            }
        }
    }
}
