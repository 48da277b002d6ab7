//! The Inertia page object.
//!
//! A [`PageObject`] describes one navigable view. It is built once per render,
//! never mutated afterwards, and serialized either as the JSON body of an XHR
//! response or embedded in the `data-page` attribute of a full HTML load.
//!
//! ```text
//! {"component": "Users/Index", "props": {...}, "url": "/users",
//!  "version": "1", "encryptHistory": false, "clearHistory": false}
//! ```
//!
//! See [the page object](https://inertiajs.com/the-protocol#the-page-object).

use serde::Serialize;
use serde_json::{Map, Value};

/// Props passed to a client-side component.
///
/// Keys keep insertion order so serialization is deterministic.
pub type Props = Map<String, Value>;

/// Description of a single navigable view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageObject {
    component: String,
    props: Props,
    url: String,
    version: String,
    encrypt_history: bool,
    clear_history: bool,
}

impl PageObject {
    /// Assemble a page object from fully resolved fields.
    pub fn new(
        component: impl Into<String>,
        props: Props,
        url: impl Into<String>,
        version: impl Into<String>,
        encrypt_history: bool,
        clear_history: bool,
    ) -> Self {
        Self {
            component: component.into(),
            props,
            url: url.into(),
            version: version.into(),
            encrypt_history,
            clear_history,
        }
    }

    /// Client-side component to mount.
    #[inline]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Data handed to the component.
    #[inline]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Canonical URL of the page.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Asset version active at render time.
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the client must encrypt this history entry.
    ///
    /// See [history encryption](https://inertiajs.com/history-encryption).
    #[inline]
    pub fn encrypt_history(&self) -> bool {
        self.encrypt_history
    }

    /// Whether the client must discard prior history state.
    #[inline]
    pub fn clear_history(&self) -> bool {
        self.clear_history
    }
}
