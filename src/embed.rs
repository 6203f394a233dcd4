//! JS-facing embed surface.
//!
//! The embedding page loads the WASM module and drives the widget through
//! `init`, `open`, `close`, `sendMessage`, and `destroy`. One widget instance
//! exists per page; `init` is a single-call lifecycle and later calls are
//! logged no-ops until `destroy` releases the instance.
//!
//! This module owns the only imperative DOM work in the crate: injecting the
//! stylesheet and the fixed-position container the Leptos tree mounts into.

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::ChatWidget;
use crate::config::{WidgetConfig, WidgetOptions};
use crate::state::chat::ChatState;
use crate::state::panel::PanelState;
use crate::state::session::SessionId;
use crate::util::host;

const CONTAINER_ID: &str = "akissi-widget-container";
const STYLE_ID: &str = "akissi-widget-style";
const STYLE_SHEET: &str = include_str!("../style/widget.css");

struct WidgetInstance {
    chat: RwSignal<ChatState>,
    panel: RwSignal<PanelState>,
    config: WidgetConfig,
    session: SessionId,
    unmount: Box<dyn FnOnce()>,
}

thread_local! {
    static INSTANCE: RefCell<Option<WidgetInstance>> = const { RefCell::new(None) };
}

/// Initialize the widget: resolve options, inject the container and
/// stylesheet, mount the view, and append the welcome message.
///
/// Malformed or missing options degrade to the documented defaults. Calling
/// `init` while an instance is already live is a logged no-op.
#[wasm_bindgen]
pub fn init(options: JsValue) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if INSTANCE.with(|slot| slot.borrow().is_some()) {
        leptos::logging::warn!("widget already initialized; ignoring init()");
        return;
    }

    let config = WidgetConfig::resolve(parse_options(options), &host::page_origin());
    let session = SessionId::generate();

    let chat = RwSignal::new(ChatState::default());
    let panel = RwSignal::new(PanelState::default());
    chat.update(|c| c.welcome(&config.welcome_message));

    let Some(container) = install_dom() else {
        leptos::logging::warn!("widget init failed: no document to attach to");
        return;
    };

    let mount_config = config.clone();
    let mount_session = session.clone();
    let handle = leptos::mount::mount_to(container, move || {
        view! {
            <ChatWidget
                config=mount_config
                session=mount_session
                chat=chat
                panel=panel
            />
        }
    });

    INSTANCE.with(|slot| {
        *slot.borrow_mut() = Some(WidgetInstance {
            chat,
            panel,
            config,
            session,
            unmount: Box::new(move || drop(handle)),
        });
    });

    leptos::logging::log!("chat widget initialized");
}

/// Open the chat panel. Idempotent; a no-op before `init`.
#[wasm_bindgen]
pub fn open() {
    with_instance(|instance| instance.panel.update(|p| p.open()));
}

/// Close the chat panel. Idempotent; a no-op before `init`. Closing does not
/// cancel an in-flight request; its reply is still appended to the history.
#[wasm_bindgen]
pub fn close() {
    with_instance(|instance| instance.panel.update(|p| p.close()));
}

/// Send a message through the same pipeline as the panel's send control.
#[wasm_bindgen(js_name = sendMessage)]
pub fn send_message(text: String) {
    with_instance(|instance| {
        crate::app::dispatch_send(instance.chat, &instance.config, &instance.session, &text);
    });
}

/// Tear the widget down: unmount the view, remove the injected DOM, and
/// release the instance so `init` may be called again. A reply that settles
/// after teardown is dropped.
#[wasm_bindgen]
pub fn destroy() {
    let Some(instance) = INSTANCE.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    (instance.unmount)();
    instance.chat.dispose();
    instance.panel.dispose();
    remove_dom();
    leptos::logging::log!("chat widget destroyed");
}

fn with_instance(f: impl FnOnce(&WidgetInstance)) {
    INSTANCE.with(|slot| {
        if let Some(instance) = slot.borrow().as_ref() {
            f(instance);
        }
    });
}

fn parse_options(options: JsValue) -> WidgetOptions {
    if options.is_undefined() || options.is_null() {
        return WidgetOptions::default();
    }

    let json = js_sys::JSON::stringify(&options)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();

    match serde_json::from_str(&json) {
        Ok(parsed) => parsed,
        Err(err) => {
            leptos::logging::warn!("invalid widget options, using defaults: {err}");
            WidgetOptions::default()
        }
    }
}

/// Inject the stylesheet into `<head>` and the mount container into `<body>`.
fn install_dom() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;

    if document.get_element_by_id(STYLE_ID).is_none() {
        let style = document.create_element("style").ok()?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(STYLE_SHEET));
        document.head()?.append_child(&style).ok()?;
    }

    let container = document.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    document.body()?.append_child(&container).ok()?;
    container.dyn_into::<web_sys::HtmlElement>().ok()
}

fn remove_dom() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(container) = document.get_element_by_id(CONTAINER_ID) {
        container.remove();
    }
    if let Some(style) = document.get_element_by_id(STYLE_ID) {
        style.remove();
    }
}
