//! Leptos view components for the widget.
//!
//! Everything rendered derives from the `{panel-open, messages, pending}`
//! state signals; there is no imperative DOM mutation outside the embed
//! layer's container/stylesheet injection.

pub mod launcher;
pub mod panel;
