use super::*;

fn texts(state: &ChatState) -> Vec<(&Sender, &str)> {
    state
        .messages
        .iter()
        .map(|m| (&m.sender, m.text.as_str()))
        .collect()
}

// =============================================================
// Defaults and welcome
// =============================================================

#[test]
fn chat_state_default_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.pending);
}

#[test]
fn welcome_is_first_assistant_message() {
    let mut state = ChatState::default();
    state.welcome("Bonjour! Comment puis-je vous aider?");
    assert_eq!(
        texts(&state),
        vec![(&Sender::Assistant, "Bonjour! Comment puis-je vous aider?")]
    );
}

// =============================================================
// begin_send validation
// =============================================================

#[test]
fn begin_send_rejects_whitespace_only_input() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("   \t\n  "), None);
    assert!(state.messages.is_empty());
    assert!(!state.pending);
}

#[test]
fn begin_send_trims_input() {
    let mut state = ChatState::default();
    let dispatched = state.begin_send("  Salut  ");
    assert_eq!(dispatched.as_deref(), Some("Salut"));
    assert_eq!(texts(&state), vec![(&Sender::User, "Salut")]);
    assert!(state.pending);
}

#[test]
fn begin_send_clamps_to_backend_limit() {
    let mut state = ChatState::default();
    let input = "é".repeat(MAX_MESSAGE_CHARS + 50);
    let dispatched = state.begin_send(&input).expect("should dispatch");
    assert_eq!(dispatched.chars().count(), MAX_MESSAGE_CHARS);
    assert_eq!(state.messages[0].text, dispatched);
}

// =============================================================
// One request in flight
// =============================================================

#[test]
fn begin_send_while_pending_is_a_no_op() {
    let mut state = ChatState::default();
    assert!(state.begin_send("first").is_some());
    assert_eq!(state.begin_send("second"), None);
    assert_eq!(state.begin_send("third"), None);
    assert_eq!(texts(&state), vec![(&Sender::User, "first")]);
}

#[test]
fn settle_allows_the_next_send() {
    let mut state = ChatState::default();
    state.begin_send("first").unwrap();
    state.settle(Ok("reply".to_owned()));
    assert!(state.begin_send("second").is_some());
}

// =============================================================
// Settle outcomes
// =============================================================

#[test]
fn successful_reply_preserves_exact_order() {
    let mut state = ChatState::default();
    state.welcome("Bonjour! Comment puis-je vous aider?");
    state.begin_send("Salut").unwrap();
    state.settle(Ok("Bonjour!".to_owned()));

    assert_eq!(
        texts(&state),
        vec![
            (&Sender::Assistant, "Bonjour! Comment puis-je vous aider?"),
            (&Sender::User, "Salut"),
            (&Sender::Assistant, "Bonjour!"),
        ]
    );
    assert!(!state.pending);
}

#[test]
fn failed_send_appends_fallback_and_clears_pending() {
    let mut state = ChatState::default();
    state.welcome("Bonjour!");
    state.begin_send("Test").unwrap();
    state.settle(Err(SendError::Status(500)));

    let last = state.messages.last().expect("fallback message");
    assert_eq!(last.sender, Sender::Assistant);
    assert_eq!(last.text, FALLBACK_REPLY);
    assert!(!state.pending);
}

#[test]
fn each_failure_adds_one_fallback_message() {
    let mut state = ChatState::default();
    state.begin_send("a").unwrap();
    state.settle(Err(SendError::Network("offline".to_owned())));
    state.begin_send("b").unwrap();
    state.settle(Err(SendError::Status(502)));

    let fallbacks = state
        .messages
        .iter()
        .filter(|m| m.text == FALLBACK_REPLY)
        .count();
    assert_eq!(fallbacks, 2);
}

#[test]
fn settle_without_pending_send_is_dropped() {
    let mut state = ChatState::default();
    state.welcome("Bonjour!");
    state.settle(Ok("ghost".to_owned()));
    assert_eq!(texts(&state), vec![(&Sender::Assistant, "Bonjour!")]);
    assert!(!state.pending);
}
