//! Core data types for the Inertia protocol.
//!
//! ```text
//! RenderOptions ──► PageObject ──► (serializer / template) ──► InertiaResponse
//!  (caller input)   (per request)                              (status, headers, body)
//! ```
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PageObject`] | One navigable view: component, props, url, version, history flags |
//! | [`Props`] | Insertion-ordered prop map |
//! | [`RenderOptions`] | Component, props and optional overrides supplied by a handler |
//! | [`InertiaResponse`] | Status, ordered header multi-map and optional body |

mod options;
mod page;
mod response;

pub use options::RenderOptions;
pub use page::{PageObject, Props};
pub use response::InertiaResponse;
