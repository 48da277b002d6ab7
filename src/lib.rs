#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Inertia.js for Axum
//!
//! This crate implements the server side of the [Inertia protocol]: classic
//! server-rendered routes that the Inertia client turns into single-page
//! navigation, without a client-side router.
//!
//! ## Overview
//!
//! For every request the [`InertiaEngine`] decides, purely from request headers
//! and the current asset version, which response to send:
//!
//! 1. **Full page load** - first visit; an HTML document embedding the page object
//! 2. **JSON page** - XHR visit with `X-Inertia: true`
//! 3. **Partial reload** - JSON page restricted to the props named in `X-Inertia-Partial-Data`
//! 4. **Version conflict** - stale `X-Inertia-Version` on a `GET`; 409 forcing a hard reload
//!
//! plus two redirect helpers:
//!
//! - **Redirect** - `Location` with 302, or 303 after `PUT`/`PATCH`/`DELETE`
//! - **External location** - 409 with `X-Inertia-Location`
//!
//! ## Server Usage
//!
//! ```ignore
//! use axum::{routing::get, Router};
//! use inertia_axum::{Inertia, InertiaConfig, InertiaError, InertiaLayer, InertiaResponse};
//! use serde_json::json;
//!
//! async fn home(inertia: Inertia) -> Result<InertiaResponse, InertiaError> {
//!     inertia.render_props("Home", &json!({"greeting": "hello"}))
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = Router::new()
//!         .route("/", get(home))
//!         .layer(InertiaLayer::from_config(InertiaConfig::default())?);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Framework-Neutral Usage
//!
//! The engine only needs a [`RequestView`](server::RequestView) and returns an
//! [`InertiaResponse`] descriptor, so it can sit behind any HTTP stack:
//!
//! ```
//! use inertia_axum::{InertiaEngine, JsonPageSerializer, RenderOptions, SimpleTemplateRenderer};
//! use inertia_axum::server::InertiaRequest;
//! use inertia_axum::version::StaticVersion;
//!
//! let engine = InertiaEngine::new(
//!     StaticVersion::new("1"),
//!     JsonPageSerializer,
//!     SimpleTemplateRenderer::default(),
//! );
//!
//! let stale = InertiaRequest::new("GET", "/")
//!     .with_header("X-Inertia", "true")
//!     .with_header("X-Inertia-Version", "0");
//! let response = engine.render(&stale, RenderOptions::new("Home")).unwrap();
//! assert_eq!(response.status(), 409);
//! assert_eq!(response.header("X-Inertia-Location"), Some("/"));
//! ```
//!
//! ## Module Structure
//!
//! - **[types]** - Page object, render options and response descriptor
//! - **[error]** - Error types and result handling
//! - **[engine]** - Protocol negotiation
//! - **[version]** - Asset version resolvers
//! - **[serializer]** - Page object serialization
//! - **[template]** - HTML templates for full page loads
//! - **[config]** - Engine configuration
//! - **[server]** - Axum layer and extractor
//! - **[protocol]** - Header names, status codes and header parsing
//!
//! [Inertia protocol]: https://inertiajs.com/the-protocol

pub mod config;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod serializer;
pub mod server;
pub mod template;
pub mod types;
pub mod version;

pub use config::{InertiaConfig, InertiaSettings};
pub use engine::InertiaEngine;
pub use error::{InertiaError, Result};
pub use serializer::{JsonPageSerializer, PageSerializer};
pub use server::{Inertia, InertiaLayer};
pub use template::{SimpleTemplateRenderer, TemplateRenderer};
pub use types::{InertiaResponse, PageObject, Props, RenderOptions};
pub use version::VersionResolver;
