//! Storefront container
//!
//! Owns the session for the lifetime of the page and wires the pure views'
//! callbacks to session actions.

use dioxus::prelude::*;
use repclub_common::{Section, StorefrontAction, StorefrontSession};
use repclub_ui::{PhoneFrame, SectionPanel, TabStrip};
use tracing::{debug, info};

/// Apply `action` to the session and log the resulting transition.
pub fn dispatch(session: &mut StorefrontSession, action: StorefrontAction) {
    let from = session.active_section();
    session.apply(action);
    match action {
        StorefrontAction::SelectTab(_) => {
            debug!("Section {} -> {}", from, session.active_section());
        }
        StorefrontAction::AddToCart => {
            info!(
                "Added to cart ({} lines, total {}), section {} -> {}",
                session.cart_count(),
                session.cart().total(),
                from,
                session.active_section()
            );
        }
        StorefrontAction::Checkout => {
            info!("Checkout requested with {} lines; no order flow", session.cart_count());
        }
    }
}

/// Entrance animation class. It sits on the keyed panel wrapper, which is
/// replaced on every section change, so the animation restarts each switch.
pub const PANEL_ENTER_CLASS: &str = "animate-panel-in";

/// Key of the panel wrapper; distinct per section.
pub fn panel_key(section: Section) -> String {
    format!("panel-{section}")
}

#[component]
pub fn Storefront() -> Element {
    let mut session = use_signal(StorefrontSession::new);

    let active = session.read().active_section();
    let cart = session.read().cart().clone();
    let cart_count = cart.len();
    let key = panel_key(active);

    rsx! {
        PhoneFrame {
            header: rsx! {
                TabStrip {
                    active,
                    cart_count,
                    on_select: move |section| {
                        dispatch(&mut session.write(), StorefrontAction::SelectTab(section));
                    },
                }
            },
            div { key: "{key}", class: PANEL_ENTER_CLASS,
                SectionPanel {
                    section: active,
                    cart,
                    on_add_to_cart: move |_| {
                        dispatch(&mut session.write(), StorefrontAction::AddToCart);
                    },
                    on_checkout: move |_| {
                        dispatch(&mut session.write(), StorefrontAction::Checkout);
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dispatch_walk() {
        let mut session = StorefrontSession::new();
        dispatch(&mut session, StorefrontAction::SelectTab(Section::Patch));
        assert_eq!(session.active_section(), Section::Patch);

        dispatch(&mut session, StorefrontAction::AddToCart);
        assert_eq!(session.active_section(), Section::Cart);
        assert_eq!(session.cart_count(), 1);

        dispatch(&mut session, StorefrontAction::Checkout);
        assert_eq!(session.active_section(), Section::Cart);
        assert_eq!(session.cart_count(), 1);
    }

    #[test]
    fn test_panel_key_changes_on_every_switch() {
        let keys: HashSet<String> = Section::ALL.into_iter().map(panel_key).collect();
        assert_eq!(keys.len(), Section::ALL.len());
        for from in Section::ALL {
            for to in Section::ALL {
                assert_eq!(panel_key(from) == panel_key(to), from == to);
            }
        }
    }
}
