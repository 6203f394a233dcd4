//! Widget-instance state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`panel`, `chat`, `session`) so the interaction
//! state machine can be exercised without a browser. Components observe these
//! structs through `RwSignal` wrappers owned by the widget instance; nothing
//! here touches the DOM.

pub mod chat;
pub mod panel;
pub mod session;
