#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Opaque client-generated identifier correlating one page load's messages
/// with one backend conversation.
///
/// Generated once per `init` and never persisted; a reload starts a fresh
/// conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
