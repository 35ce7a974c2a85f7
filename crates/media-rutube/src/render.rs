//! Template rendering of embed results
//!
//! The host normally owns templating. [`IframeRenderer`] is the stock
//! rendering of the `media_rutube/embed` template for hosts without one.

use crate::builder::{escape_html, EmbedResult};
use crate::error::{EmbedError, Result};

/// Template name for the embed snippet
pub const EMBED_TEMPLATE: &str = "media_rutube/embed";

/// Host template engine
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer {
    /// Render a named template with embed parameters
    fn render(&self, template: &str, context: &EmbedResult) -> Result<String>;
}

/// Renders the embed template as an iframe snippet
#[derive(Debug, Clone, Copy, Default)]
pub struct IframeRenderer;

impl TemplateRenderer for IframeRenderer {
    fn render(&self, template: &str, context: &EmbedResult) -> Result<String> {
        if template != EMBED_TEMPLATE {
            return Err(EmbedError::Render(format!("Unknown template: {}", template)));
        }

        // `title` arrives escaped from the builder.
        Ok(format!(
            concat!(
                "<span class=\"mediaplugin mediaplugin_rutube\">",
                "<iframe title=\"{title}\" width=\"{width}\" height=\"{height}\" ",
                "style=\"max-width: 100%;\" src=\"{src}\" frameborder=\"0\" ",
                "allow=\"clipboard-write; autoplay\" ",
                "webkitAllowFullScreen mozallowfullscreen allowfullscreen></iframe>",
                "</span>"
            ),
            title = context.title,
            width = context.width,
            height = context.height,
            src = escape_html(&context.embed_url),
        ))
    }
}
