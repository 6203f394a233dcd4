//! # akissi-widget
//!
//! Embeddable chat widget for the Akissi assistant, compiled to WebAssembly
//! and dropped into third-party pages. It renders a floating launcher button
//! and an expandable chat panel, and exchanges messages with the backend
//! widget endpoint over HTTP.
//!
//! The widget is client-side rendered with Leptos. Everything that does not
//! depend on a browser (the send/settle state machine, option resolution,
//! and the wire types) is plain Rust, testable on the host. Browser glue
//! (DOM injection, `fetch`, the `wasm-bindgen` embed API) is gated behind
//! the `csr` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Panel/chat state machine and session identity |
//! | [`components`] | Leptos view components (launcher, chat panel) |
//! | [`net`] | Wire types and the HTTP chat call |
//! | [`config`] | Init options, documented defaults, merge logic |
//! | [`app`] | Root component and the shared send dispatch |
//! | [`embed`] | JS-facing `init`/`open`/`close`/`sendMessage`/`destroy` |
//! | [`util`] | Browser/host shims (clock, page origin) |

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod embed;
pub mod net;
pub mod state;
pub mod util;
