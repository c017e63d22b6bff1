//! About section, merged field by field against its defaults.

use serde::Deserialize;

use super::non_blank;
use crate::error::GatewayError;
use crate::hydrate::{decode_json, Extracted};
use crate::traits::Response;

pub const ABOUT_ENDPOINT: &str = "/about";

pub const DEFAULT_CONTENT: &str = "Information coming soon...";
pub const DEFAULT_FRONTEND_FOCUS: &str = "Expertise in building responsive UIs.";
pub const DEFAULT_PERFORMANCE: &str = "Focused on clean and efficient code.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub content: String,
    pub frontend_focus: String,
    pub performance: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT.to_string(),
            frontend_focus: DEFAULT_FRONTEND_FOCUS.to_string(),
            performance: DEFAULT_PERFORMANCE.to_string(),
        }
    }
}

/// One collapsible section of the about accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutSection {
    pub title: &'static str,
    pub body: String,
}

impl AboutContent {
    /// Accordion sections in display order.
    pub fn sections(&self) -> Vec<AboutSection> {
        vec![
            AboutSection {
                title: "Who I Am",
                body: self.content.clone(),
            },
            AboutSection {
                title: "Frontend Focus",
                body: self.frontend_focus.clone(),
            },
            AboutSection {
                title: "Performance",
                body: self.performance.clone(),
            },
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AboutPayload {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    frontend_focus: Option<String>,
    #[serde(default)]
    performance: Option<String>,
}

/// Extractor for `GET /about`. Blank or missing fields keep their default.
pub fn extract_about(
    response: &Response,
    default: &AboutContent,
) -> Result<Extracted<AboutContent>, GatewayError> {
    let payload: Option<AboutPayload> = decode_json(response, ABOUT_ENDPOINT)?;
    let payload = payload.unwrap_or_default();

    let content = non_blank(payload.content);
    let frontend_focus = non_blank(payload.frontend_focus);
    let performance = non_blank(payload.performance);

    if content.is_none() && frontend_focus.is_none() && performance.is_none() {
        return Ok(Extracted::Empty);
    }

    Ok(Extracted::Success(AboutContent {
        content: content.unwrap_or_else(|| default.content.clone()),
        frontend_focus: frontend_focus.unwrap_or_else(|| default.frontend_focus.clone()),
        performance: performance.unwrap_or_else(|| default.performance.clone()),
    }))
}
