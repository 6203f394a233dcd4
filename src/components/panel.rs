//! Expandable chat panel: header, message history, typing indicator, input.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::chat::{ChatState, Sender};
use crate::state::panel::PanelState;
use crate::state::session::SessionId;

/// Chat panel showing the conversation and an input for sending messages.
///
/// The panel body is only mounted while open; the conversation itself lives
/// in the shared `ChatState` signal, so closing and reopening re-renders the
/// same history. Enter without a modifier sends, Escape closes.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let panel = expect_context::<RwSignal<PanelState>>();
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let session = expect_context::<StoredValue<SessionId>>();

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let accent = config.with_value(|c| c.accent_color.clone());
    let company = config.with_value(|c| c.company_name.clone());
    let assistant = config.with_value(|c| c.assistant_name.clone());

    // Keep the newest message visible.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Focus the input whenever the panel opens (the input node mounts with
    // the panel body, so this fires once the ref attaches).
    Effect::new(move || {
        let open = panel.get().open;

        #[cfg(feature = "csr")]
        {
            if open {
                if let Some(el) = input_ref.get() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = open;
    });

    let do_send = move || {
        let text = input.get();
        let cfg = config.get_value();
        let sess = session.get_value();
        if crate::app::dispatch_send(chat, &cfg, &sess, &text) {
            input.set(String::new());
        }
    };

    let on_input_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter"
            && !ev.shift_key()
            && !ev.ctrl_key()
            && !ev.alt_key()
            && !ev.meta_key()
        {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;

    let placeholder = move || {
        let assistant = config.with_value(|c| c.assistant_name.clone());
        format!("Écrivez à {assistant}...")
    };

    view! {
        <Show when=move || panel.get().open>
            <section
                class="akissi-widget__window"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        panel.update(|p| p.close());
                    }
                }
            >
                <header class="akissi-widget__header" style:background-color=accent.clone()>
                    <div class="akissi-widget__identity">
                        <span class="akissi-widget__assistant">{assistant.clone()}</span>
                        <span class="akissi-widget__company">{company.clone()}</span>
                    </div>
                    <button
                        class="akissi-widget__close"
                        aria-label="Fermer"
                        on:click=move |_| panel.update(|p| p.close())
                    >
                        "×"
                    </button>
                </header>

                <div class="akissi-widget__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .messages
                            .iter()
                            .map(|msg| {
                                let text = msg.text.clone();
                                let from_user = msg.sender == Sender::User;
                                let from_assistant = !from_user;
                                view! {
                                    <div
                                        class="akissi-widget__message"
                                        class:akissi-widget__message--user=from_user
                                        class:akissi-widget__message--assistant=from_assistant
                                    >
                                        <div class="akissi-widget__bubble">{text}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    {move || {
                        chat.get().pending.then(|| {
                            view! {
                                <div class="akissi-widget__typing" aria-live="polite">
                                    <span class="akissi-widget__typing-dot"></span>
                                    <span class="akissi-widget__typing-dot"></span>
                                    <span class="akissi-widget__typing-dot"></span>
                                </div>
                            }
                        })
                    }}
                </div>

                <div class="akissi-widget__input-row">
                    <input
                        class="akissi-widget__input"
                        type="text"
                        maxlength="2000"
                        placeholder=placeholder
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_input_keydown
                    />
                    <button
                        class="akissi-widget__send"
                        style:background-color=accent.clone()
                        disabled=move || !can_send()
                        on:click=move |_| do_send()
                    >
                        "Envoyer"
                    </button>
                </div>
            </section>
        </Show>
    }
}
