//! Reusable overlay widgets.

pub mod panel;
pub mod status_bar;
