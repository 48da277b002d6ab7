//! Caller-supplied render options.

use super::page::Props;
use serde::Serialize;
use serde_json::Value;

/// What to render, plus optional per-call overrides.
///
/// Overrides left unset fall back to the engine configuration at render time:
/// the url defaults to the request URI, `encryptHistory` to the configured
/// default and `clearHistory` to the configured default (normally `false`).
///
/// # Examples
///
/// ```
/// use inertia_axum::RenderOptions;
/// use serde_json::json;
///
/// let options = RenderOptions::new("Users/Show")
///     .with_prop("user", json!({"id": 1, "name": "Ada"}))
///     .with_url("/users/1")
///     .clear_history(true);
///
/// assert_eq!(options.component(), "Users/Show");
/// assert_eq!(options.url(), Some("/users/1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    component: String,
    props: Props,
    url: Option<String>,
    encrypt_history: Option<bool>,
    clear_history: Option<bool>,
}

impl RenderOptions {
    /// Options for rendering `component` with no props.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Default::default()
        }
    }

    /// Replace all props.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Add or replace one prop.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Replace all props with the fields of a serializable struct or map.
    ///
    /// # Errors
    ///
    /// Fails if `props` does not serialize to a JSON object.
    pub fn with_serialized_props<T: Serialize>(mut self, props: &T) -> crate::Result<Self> {
        match serde_json::to_value(props)? {
            Value::Object(map) => {
                self.props = map;
                Ok(self)
            }
            other => Err(crate::InertiaError::InvalidOptions(format!(
                "props must serialize to an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Override the page url.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Override the `encryptHistory` flag.
    #[must_use]
    pub fn encrypt_history(mut self, encrypt: bool) -> Self {
        self.encrypt_history = Some(encrypt);
        self
    }

    /// Override the `clearHistory` flag.
    #[must_use]
    pub fn clear_history(mut self, clear: bool) -> Self {
        self.clear_history = Some(clear);
        self
    }

    /// Component name.
    #[inline]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Props supplied so far.
    #[inline]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Url override, if any.
    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// `encryptHistory` override, if any.
    #[inline]
    pub fn encrypt_history_override(&self) -> Option<bool> {
        self.encrypt_history
    }

    /// `clearHistory` override, if any.
    #[inline]
    pub fn clear_history_override(&self) -> Option<bool> {
        self.clear_history
    }

    pub(crate) fn into_parts(self) -> (String, Props) {
        (self.component, self.props)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct UserProps {
        id: u32,
        name: &'static str,
    }

    #[test]
    fn test_overrides_default_to_none() {
        let options = RenderOptions::new("Home");
        assert_eq!(options.url(), None);
        assert_eq!(options.encrypt_history_override(), None);
        assert_eq!(options.clear_history_override(), None);
        assert!(options.props().is_empty());
    }

    #[test]
    fn test_with_prop_replaces_existing_key() {
        let options = RenderOptions::new("Home")
            .with_prop("count", 1)
            .with_prop("count", 2);
        assert_eq!(options.props().len(), 1);
        assert_eq!(options.props()["count"], json!(2));
    }

    #[test]
    fn test_with_serialized_props() {
        let options = RenderOptions::new("Users/Show")
            .with_serialized_props(&UserProps { id: 7, name: "Ada" })
            .unwrap();
        assert_eq!(options.props()["id"], json!(7));
        assert_eq!(options.props()["name"], json!("Ada"));
    }

    #[test]
    fn test_with_serialized_props_rejects_non_object() {
        let err = RenderOptions::new("Home")
            .with_serialized_props(&vec![1, 2, 3])
            .unwrap_err();
        assert!(err.to_string().contains("an array"));
    }
}
