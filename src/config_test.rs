use super::*;

const ORIGIN: &str = "https://example.test";

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_options_resolve_to_documented_defaults() {
    let config = WidgetConfig::resolve(WidgetOptions::default(), ORIGIN);
    assert_eq!(config.position, Position::Right);
    assert_eq!(config.accent_color, DEFAULT_ACCENT_COLOR);
    assert_eq!(config.company_name, DEFAULT_COMPANY_NAME);
    assert_eq!(config.assistant_name, DEFAULT_ASSISTANT_NAME);
    assert_eq!(config.welcome_message, DEFAULT_WELCOME_MESSAGE);
    assert_eq!(config.api_url, "https://example.test/widget");
    assert_eq!(config.widget_key, None);
}

#[test]
fn partial_options_keep_other_defaults() {
    let options: WidgetOptions = serde_json::from_value(serde_json::json!({
        "position": "left",
        "accentColor": "#10b981"
    }))
    .unwrap();

    let config = WidgetConfig::resolve(options, ORIGIN);
    assert_eq!(config.position, Position::Left);
    assert_eq!(config.accent_color, "#10b981");
    assert_eq!(config.company_name, DEFAULT_COMPANY_NAME);
    assert_eq!(config.assistant_name, DEFAULT_ASSISTANT_NAME);
    assert_eq!(config.welcome_message, DEFAULT_WELCOME_MESSAGE);
    assert_eq!(config.api_url, "https://example.test/widget");
}

// =============================================================
// Option parsing
// =============================================================

#[test]
fn options_use_camel_case_keys() {
    let options: WidgetOptions = serde_json::from_value(serde_json::json!({
        "companyName": "Acme",
        "assistantName": "Ada",
        "welcomeMessage": "Salut!",
        "apiUrl": "https://api.acme.test/widget",
        "widgetKey": "wk-123"
    }))
    .unwrap();

    let config = WidgetConfig::resolve(options, ORIGIN);
    assert_eq!(config.company_name, "Acme");
    assert_eq!(config.assistant_name, "Ada");
    assert_eq!(config.welcome_message, "Salut!");
    assert_eq!(config.api_url, "https://api.acme.test/widget");
    assert_eq!(config.widget_key.as_deref(), Some("wk-123"));
}

#[test]
fn unrecognized_keys_are_ignored() {
    let parsed: Result<WidgetOptions, _> = serde_json::from_value(serde_json::json!({
        "position": "left",
        "theme": "dark"
    }));
    assert!(parsed.is_ok());
}

#[test]
fn unrecognized_position_falls_back_to_right() {
    let options = WidgetOptions {
        position: Some("top".to_owned()),
        ..WidgetOptions::default()
    };
    let config = WidgetConfig::resolve(options, ORIGIN);
    assert_eq!(config.position, Position::Right);
}

// =============================================================
// API URL resolution
// =============================================================

#[test]
fn trailing_slash_on_api_url_is_stripped() {
    let options = WidgetOptions {
        api_url: Some("https://api.acme.test/widget/".to_owned()),
        ..WidgetOptions::default()
    };
    let config = WidgetConfig::resolve(options, ORIGIN);
    assert_eq!(config.api_url, "https://api.acme.test/widget");
}

#[test]
fn empty_origin_yields_relative_api_url() {
    let config = WidgetConfig::resolve(WidgetOptions::default(), "");
    assert_eq!(config.api_url, "/widget");
}
