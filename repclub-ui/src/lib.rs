//! repclub-ui - View components for the RepClub storefront
//!
//! Pure, props-based views. Session state lives in the caller; these
//! components only render what they are given and report clicks back.

pub mod components;

pub use components::*;
