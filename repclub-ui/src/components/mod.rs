//! Shared UI components

pub mod button;
pub mod panels;
pub mod phone_frame;
pub mod section_panel;
pub mod tab_strip;
pub mod utils;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use panels::{BooksPanel, CartPanel, HomePanel, PatchPanel, RepPanel};
pub use phone_frame::PhoneFrame;
pub use section_panel::SectionPanel;
pub use tab_strip::TabStrip;
pub use utils::{format_cart_count, rep_segment_states};
