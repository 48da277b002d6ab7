//! HTML templates for full page loads.
//!
//! On a first visit the serialized page object is embedded in the root
//! element's `data-page` attribute. [`SimpleTemplateRenderer`] replaces every
//! `@PageObject@` placeholder with the attribute-escaped JSON:
//!
//! ```html
//! <div id="app" data-page="@PageObject@"></div>
//! ```

use crate::error::{InertiaError, Result};
use crate::protocol::constants::PAGE_PLACEHOLDER;
use std::path::Path;

/// Turns serialized page JSON into a full HTML document.
pub trait TemplateRenderer: Send + Sync {
    /// Render a document embedding `page_json`.
    ///
    /// The JSON must be escaped so it survives inside an HTML attribute value.
    ///
    /// # Errors
    ///
    /// Any error is propagated unchanged to the caller of `render`.
    fn render(&self, page_json: &str) -> Result<String>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, page_json: &str) -> Result<String> {
        Ok(self(page_json))
    }
}

const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <div id="app" data-page="@PageObject@"></div>
  </body>
</html>
"#;

/// Template held in memory with `@PageObject@` placeholders.
#[derive(Clone, Debug)]
pub struct SimpleTemplateRenderer {
    template: String,
}

impl SimpleTemplateRenderer {
    /// Use `template` as the document skeleton.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Load the skeleton from a file once, up front.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::TemplateRendering`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let template =
            std::fs::read_to_string(path).map_err(|source| InertiaError::TemplateRendering {
                path: path.to_path_buf(),
                source,
            })?;

        if !template.contains(PAGE_PLACEHOLDER) {
            tracing::warn!(
                path = %path.display(),
                "template has no {PAGE_PLACEHOLDER} placeholder"
            );
        }
        tracing::debug!(path = %path.display(), "loaded inertia template");
        Ok(Self::new(template))
    }

    /// The raw skeleton.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Default for SimpleTemplateRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl TemplateRenderer for SimpleTemplateRenderer {
    fn render(&self, page_json: &str) -> Result<String> {
        Ok(self
            .template
            .replace(PAGE_PLACEHOLDER, &escape_attribute(page_json)))
    }
}

/// Escape text for use inside a quoted HTML attribute value.
///
/// # Examples
///
/// ```
/// use inertia_axum::template::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"{"a":"<b>"}"#), "{&quot;a&quot;:&quot;&lt;b&gt;&quot;}");
/// ```
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + value.len() / 4);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
