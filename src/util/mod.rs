//! Browser/host shims.

pub mod host;
