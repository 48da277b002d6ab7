//! Axum integration.
//!
//! # Module Organization
//!
//! ```text
//! server/
//! ├── request    - RequestView trait and InertiaRequest snapshot
//! ├── middleware - InertiaLayer installing the engine
//! └── extract    - Inertia extractor for handlers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`InertiaLayer`] | Tower layer sharing one engine across requests |
//! | [`Inertia`] | Extractor: render, redirect and location for the current request |
//! | [`RequestView`] | What the engine reads from a request |
//! | [`InertiaRequest`] | Owned request snapshot |

mod extract;
mod middleware;
mod request;

pub use extract::Inertia;
pub use middleware::{InertiaLayer, InertiaService};
pub use request::{InertiaRequest, RequestView};
