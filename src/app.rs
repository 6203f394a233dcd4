//! Root widget component and the shared send dispatch.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::launcher::Launcher;
use crate::components::panel::ChatPanel;
use crate::config::{Position, WidgetConfig};
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::state::panel::PanelState;
use crate::state::session::SessionId;

/// Root component for one widget instance.
///
/// Owns nothing itself: configuration and state signals are created by the
/// embed layer so the JS API can reach them, and are provided as contexts for
/// the child components here.
#[component]
pub fn ChatWidget(
    config: WidgetConfig,
    session: SessionId,
    chat: RwSignal<ChatState>,
    panel: RwSignal<PanelState>,
) -> impl IntoView {
    let anchored_left = config.position == Position::Left;

    provide_context(chat);
    provide_context(panel);
    provide_context(StoredValue::new(session));
    provide_context(StoredValue::new(config));

    view! {
        <div class="akissi-widget" class:akissi-widget--left=anchored_left>
            <ChatPanel/>
            <Launcher/>
        </div>
    }
}

/// Run the send pipeline for one message: gate through
/// [`ChatState::begin_send`], then dispatch the HTTP call and settle the
/// state when it resolves.
///
/// Returns `true` if a send was actually started, so callers know to clear
/// the input. Both the panel's send control and the JS `sendMessage` entry
/// go through here.
pub(crate) fn dispatch_send(
    chat: RwSignal<ChatState>,
    config: &WidgetConfig,
    session: &SessionId,
    input: &str,
) -> bool {
    let mut dispatched = None;
    chat.update(|c| dispatched = c.begin_send(input));
    let Some(message) = dispatched else {
        return false;
    };

    let request = ChatRequest {
        message,
        session_id: session.as_str().to_owned(),
        widget_key: config.widget_key.clone(),
    };

    #[cfg(feature = "csr")]
    {
        let api_url = config.api_url.clone();
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::send_chat(&api_url, &request).await;
            if let Err(err) = &reply {
                leptos::logging::warn!("chat send failed: {err}");
            }
            // The signal is disposed once the widget is destroyed; a reply
            // that lands afterwards is dropped here.
            if chat.try_update(|c| c.settle(reply)).is_none() {
                leptos::logging::log!("chat reply arrived after widget teardown");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
    }

    true
}
