//! repclub-web - Web entry for the RepClub storefront

pub mod config;
pub mod storefront;

use dioxus::prelude::*;
use storefront::Storefront;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "REPCLUB" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Storefront {}
    }
}
