//! Floating launcher button toggling the chat panel.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::panel::PanelState;

/// Accent-colored round button anchored to the configured corner. Shows a
/// chat bubble while the panel is closed and a cross while it is open.
#[component]
pub fn Launcher() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let config = expect_context::<StoredValue<WidgetConfig>>();

    let accent = config.with_value(|c| c.accent_color.clone());
    let label = config.with_value(|c| format!("Discuter avec {}", c.assistant_name));

    view! {
        <button
            class="akissi-widget__launcher"
            style:background-color=accent
            aria-label=label
            on:click=move |_| panel.update(|p| p.toggle())
        >
            {move || {
                if panel.get().open {
                    view! { <span class="akissi-widget__launcher-icon">"×"</span> }.into_any()
                } else {
                    view! {
                        <svg class="akissi-widget__launcher-icon" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M4 4h16v12H8l-4 4z"></path>
                        </svg>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}
