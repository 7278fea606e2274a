//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for the tab dots.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_current: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_current,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// White background, black text - for actions on dark panels
    Light,
    /// Black background, white text - for actions on light panels
    Dark,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = button_class(variant, class.as_deref());

    rsx! {
        ChromelessButton {
            class: Some(computed_class),
            r#type: Some("button"),
            onclick,
            {children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    let base = "inline-flex items-center font-bold px-4 py-2 transition-transform";

    let variant_class = match variant {
        ButtonVariant::Light => "bg-white text-black hover:scale-105 active:scale-95",
        ButtonVariant::Dark => "bg-black text-white hover:scale-105 active:scale-95",
    };

    match extra {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    }
}
