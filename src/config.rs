#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";
pub const DEFAULT_COMPANY_NAME: &str = "BMI";
pub const DEFAULT_ASSISTANT_NAME: &str = "Akissi";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Bonjour! Comment puis-je vous aider?";

/// Screen corner the widget is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    Left,
    #[default]
    Right,
}

impl Position {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Raw options object passed to `init` by the embedding page.
///
/// Keys are camelCase on the JS side. Unrecognized keys are ignored; missing
/// keys keep their documented defaults when resolved into a [`WidgetConfig`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetOptions {
    pub position: Option<String>,
    pub accent_color: Option<String>,
    pub company_name: Option<String>,
    pub assistant_name: Option<String>,
    pub welcome_message: Option<String>,
    pub api_url: Option<String>,
    pub widget_key: Option<String>,
}

/// Resolved widget configuration. Built once at `init` and immutable for the
/// lifetime of the instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub position: Position,
    pub accent_color: String,
    pub company_name: String,
    pub assistant_name: String,
    pub welcome_message: String,
    /// Base URL of the widget API; the chat endpoint is `{api_url}/chat`.
    pub api_url: String,
    /// Opaque per-deployment key forwarded with every chat request.
    pub widget_key: Option<String>,
}

impl WidgetConfig {
    /// Merge init options over the documented defaults.
    ///
    /// `page_origin` seeds the default API base URL (`{origin}/widget`) when
    /// the embedding page does not supply `apiUrl`. An unrecognized
    /// `position` value falls back to the default corner.
    #[must_use]
    pub fn resolve(options: WidgetOptions, page_origin: &str) -> Self {
        let api_url = options
            .api_url
            .unwrap_or_else(|| format!("{page_origin}/widget"));

        Self {
            position: options
                .position
                .as_deref()
                .and_then(Position::parse)
                .unwrap_or_default(),
            accent_color: options
                .accent_color
                .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_owned()),
            company_name: options
                .company_name
                .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_owned()),
            assistant_name: options
                .assistant_name
                .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_owned()),
            welcome_message: options
                .welcome_message
                .unwrap_or_else(|| DEFAULT_WELCOME_MESSAGE.to_owned()),
            api_url: api_url.trim_end_matches('/').to_owned(),
            widget_key: options.widget_key,
        }
    }
}
