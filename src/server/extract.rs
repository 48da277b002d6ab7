//! Request-bound Inertia handle for Axum handlers.

use super::request::{InertiaRequest, RequestView};
use crate::engine::InertiaEngine;
use crate::error::{InertiaError, Result};
use crate::types::{InertiaResponse, Props, RenderOptions};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Serialize;
use std::sync::Arc;

/// Axum extractor binding the shared engine to the current request.
///
/// Requires [`InertiaLayer`](super::InertiaLayer); without it extraction fails
/// with [`InertiaError::NotInstalled`].
///
/// ```ignore
/// use inertia_axum::{Inertia, InertiaError, InertiaResponse};
/// use serde_json::json;
///
/// async fn show_user(inertia: Inertia) -> Result<InertiaResponse, InertiaError> {
///     inertia.render_props("Users/Show", &json!({"user": {"id": 1}}))
/// }
///
/// async fn update_user(inertia: Inertia) -> InertiaResponse {
///     inertia.redirect("/users/1")
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Inertia {
    engine: Arc<InertiaEngine>,
    request: InertiaRequest,
}

impl Inertia {
    /// Bind `engine` to a request snapshot.
    pub fn new(engine: Arc<InertiaEngine>, request: InertiaRequest) -> Self {
        Self { engine, request }
    }

    /// Render `component` with `props`, using configured defaults for everything else.
    ///
    /// # Errors
    ///
    /// See [`InertiaEngine::render`].
    pub fn render(&self, component: &str, props: Props) -> Result<InertiaResponse> {
        self.render_with(RenderOptions::new(component).with_props(props))
    }

    /// Render `component` with props taken from any serializable value.
    ///
    /// # Errors
    ///
    /// Fails if `props` is not a JSON object, or as [`InertiaEngine::render`].
    pub fn render_props<T: Serialize>(&self, component: &str, props: &T) -> Result<InertiaResponse> {
        self.render_with(RenderOptions::new(component).with_serialized_props(props)?)
    }

    /// Render with full control over the options.
    ///
    /// # Errors
    ///
    /// See [`InertiaEngine::render`].
    pub fn render_with(&self, options: RenderOptions) -> Result<InertiaResponse> {
        self.engine.render(&self.request, options)
    }

    /// Redirect within the application (302, or 303 after `PUT`/`PATCH`/`DELETE`).
    pub fn redirect(&self, location: &str) -> InertiaResponse {
        self.engine.redirect(&self.request, location)
    }

    /// Hard browser visit to `location` (409 + `X-Inertia-Location`).
    pub fn location(&self, location: &str) -> InertiaResponse {
        self.engine.location(location)
    }

    /// Whether the current request is an Inertia XHR visit.
    #[inline]
    pub fn is_inertia(&self) -> bool {
        self.request.is_inertia()
    }

    /// The request snapshot.
    #[inline]
    pub fn request(&self) -> &InertiaRequest {
        &self.request
    }

    /// The shared engine.
    #[inline]
    pub fn engine(&self) -> &Arc<InertiaEngine> {
        &self.engine
    }
}

impl<S> FromRequestParts<S> for Inertia
where
    S: Send + Sync,
{
    type Rejection = InertiaError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let engine = parts
            .extensions
            .get::<Arc<InertiaEngine>>()
            .cloned()
            .ok_or(InertiaError::NotInstalled)?;
        Ok(Self::new(engine, InertiaRequest::from_parts(parts)))
    }
}
