//! Engine configuration.
//!
//! [`InertiaConfig`] wires the collaborators together and holds the defaults
//! that apply when a render call leaves an override unset. Plain settings can
//! also be loaded from JSON through [`InertiaSettings`].
//!
//! | Field | Default |
//! |-------|---------|
//! | `version` | [`StaticVersion`] returning `"1"` |
//! | `serializer` | [`JsonPageSerializer`] |
//! | `template_renderer` | `None`: load [`SimpleTemplateRenderer`] from `template_path` |
//! | `template_path` | `templates/app.html` |
//! | `encrypt_history` | `false` |
//! | `clear_history` | `false` |
//!
//! # Examples
//!
//! ```
//! use inertia_axum::{InertiaConfig, SimpleTemplateRenderer};
//!
//! let config = InertiaConfig::default()
//!     .with_version(|| "build-7".to_string())
//!     .with_template_renderer(SimpleTemplateRenderer::default())
//!     .with_encrypt_history(true);
//!
//! assert!(config.encrypt_history);
//! ```

use crate::error::{InertiaError, Result};
use crate::serializer::{JsonPageSerializer, PageSerializer};
use crate::template::{SimpleTemplateRenderer, TemplateRenderer};
use crate::version::{StaticVersion, VersionResolver};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default location of the HTML template.
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/app.html";

/// Collaborators and defaults for an [`InertiaEngine`](crate::InertiaEngine).
#[derive(Clone)]
pub struct InertiaConfig {
    /// Supplies the current asset version.
    pub version: Arc<dyn VersionResolver>,

    /// Serializes page objects.
    pub serializer: Arc<dyn PageSerializer>,

    /// Renders full page loads; loaded from `template_path` when `None`.
    pub template_renderer: Option<Arc<dyn TemplateRenderer>>,

    /// Template file used when no renderer is supplied.
    pub template_path: PathBuf,

    /// Default `encryptHistory` flag.
    pub encrypt_history: bool,

    /// Default `clearHistory` flag.
    pub clear_history: bool,
}

impl InertiaConfig {
    /// Build a configuration from plain settings, using default collaborators.
    pub fn from_settings(settings: InertiaSettings) -> Self {
        let mut config = Self {
            template_path: settings.template_path,
            encrypt_history: settings.encrypt_history,
            clear_history: settings.clear_history,
            ..Self::default()
        };
        if let Some(version) = settings.version {
            config.version = Arc::new(StaticVersion::new(version));
        }
        config
    }

    /// Use a different version resolver.
    #[must_use]
    pub fn with_version(mut self, version: impl VersionResolver + 'static) -> Self {
        self.version = Arc::new(version);
        self
    }

    /// Use a different page serializer.
    #[must_use]
    pub fn with_serializer(mut self, serializer: impl PageSerializer + 'static) -> Self {
        self.serializer = Arc::new(serializer);
        self
    }

    /// Use a specific template renderer instead of loading `template_path`.
    #[must_use]
    pub fn with_template_renderer(mut self, renderer: impl TemplateRenderer + 'static) -> Self {
        self.template_renderer = Some(Arc::new(renderer));
        self
    }

    /// Change the template file loaded when no renderer is supplied.
    #[must_use]
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Change the default `encryptHistory` flag.
    #[must_use]
    pub fn with_encrypt_history(mut self, encrypt: bool) -> Self {
        self.encrypt_history = encrypt;
        self
    }

    /// Change the default `clearHistory` flag.
    #[must_use]
    pub fn with_clear_history(mut self, clear: bool) -> Self {
        self.clear_history = clear;
        self
    }

    /// The configured renderer, or one loaded from `template_path`.
    ///
    /// # Errors
    ///
    /// A missing or unreadable template file is a configuration error.
    pub(crate) fn resolve_template_renderer(&self) -> Result<Arc<dyn TemplateRenderer>> {
        if let Some(renderer) = &self.template_renderer {
            return Ok(Arc::clone(renderer));
        }
        let renderer = SimpleTemplateRenderer::from_path(&self.template_path)
            .map_err(|e| InertiaError::Configuration(e.to_string()))?;
        Ok(Arc::new(renderer))
    }
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            version: Arc::new(StaticVersion::default()),
            serializer: Arc::new(JsonPageSerializer),
            template_renderer: None,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            encrypt_history: false,
            clear_history: false,
        }
    }
}

impl fmt::Debug for InertiaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InertiaConfig")
            .field("template_renderer", &self.template_renderer.is_some())
            .field("template_path", &self.template_path)
            .field("encrypt_history", &self.encrypt_history)
            .field("clear_history", &self.clear_history)
            .finish_non_exhaustive()
    }
}

/// Plain-data settings, e.g. from a JSON config file.
///
/// ```
/// use inertia_axum::InertiaSettings;
///
/// let settings = InertiaSettings::from_json_str(r#"{"encryptHistory": true}"#).unwrap();
/// assert!(settings.encrypt_history);
/// assert_eq!(settings.template_path.to_str(), Some("templates/app.html"));
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InertiaSettings {
    /// Template file for full page loads.
    pub template_path: PathBuf,
    /// Default `encryptHistory` flag.
    pub encrypt_history: bool,
    /// Default `clearHistory` flag.
    pub clear_history: bool,
    /// Fixed asset version; `"1"` when absent.
    pub version: Option<String>,
}

impl InertiaSettings {
    /// Parse settings from JSON.
    ///
    /// # Errors
    ///
    /// Malformed JSON or unknown fields are configuration errors.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| InertiaError::Configuration(format!("invalid inertia settings: {e}")))
    }
}

impl Default for InertiaSettings {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            encrypt_history: false,
            clear_history: false,
            version: None,
        }
    }
}
