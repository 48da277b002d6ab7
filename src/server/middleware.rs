//! Axum middleware installing the Inertia engine.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use inertia_axum::{InertiaConfig, InertiaLayer};
//!
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(InertiaLayer::from_config(InertiaConfig::default())?);
//! ```
//!
//! # How It Works
//!
//! The layer:
//! 1. Holds one shared [`InertiaEngine`] built at startup
//! 2. Inserts an `Arc<InertiaEngine>` into every request's extensions
//! 3. Lets the [`Inertia`](super::Inertia) extractor bind the engine to the request
//!
//! Configuration errors (such as a missing template file) surface when the
//! layer is built, not on the first request.

use crate::config::InertiaConfig;
use crate::engine::InertiaEngine;
use crate::error::Result;
use axum::{
    extract::Request,
    http,
    middleware::Next,
    response::Response,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Axum/Tower layer that makes an [`InertiaEngine`] available to handlers.
///
/// # Examples
///
/// ```
/// use inertia_axum::{InertiaConfig, InertiaLayer, SimpleTemplateRenderer};
///
/// let layer = InertiaLayer::from_config(
///     InertiaConfig::default().with_template_renderer(SimpleTemplateRenderer::default()),
/// )
/// .unwrap();
/// assert_eq!(layer.engine().version().unwrap(), "1");
/// ```
#[derive(Clone, Debug)]
pub struct InertiaLayer {
    engine: Arc<InertiaEngine>,
}

impl InertiaLayer {
    /// Wrap an already built engine.
    #[must_use]
    pub fn new(engine: InertiaEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Build the engine from `config`.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`InertiaEngine::from_config`].
    pub fn from_config(config: InertiaConfig) -> Result<Self> {
        Ok(Self::new(InertiaEngine::from_config(config)?))
    }

    /// The shared engine.
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &Arc<InertiaEngine> {
        &self.engine
    }

    /// Middleware function for use with [`axum::middleware::from_fn`].
    ///
    /// Equivalent to using the layer directly; handy when composing with other
    /// `from_fn` middleware.
    ///
    /// ```ignore
    /// let app = Router::new()
    ///     .route("/", get(handler))
    ///     .layer(axum::middleware::from_fn(layer.middleware()));
    /// ```
    #[must_use]
    pub fn middleware(
        &self,
    ) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>>
           + Send
           + Sync
           + Clone {
        let engine = Arc::clone(&self.engine);

        move |mut req: Request, next: Next| {
            let engine = Arc::clone(&engine);
            Box::pin(async move {
                req.extensions_mut().insert(engine);
                next.run(req).await
            })
        }
    }
}

impl<S> Layer<S> for InertiaLayer {
    type Service = InertiaService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InertiaService {
            inner,
            engine: Arc::clone(&self.engine),
        }
    }
}

/// Service produced by [`InertiaLayer`].
#[derive(Clone, Debug)]
pub struct InertiaService<S> {
    inner: S,
    engine: Arc<InertiaEngine>,
}

impl<S, B> Service<http::Request<B>> for InertiaService<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(Arc::clone(&self.engine));
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::SimpleTemplateRenderer;

    fn layer() -> InertiaLayer {
        InertiaLayer::from_config(
            InertiaConfig::default().with_template_renderer(SimpleTemplateRenderer::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_clones_share_engine() {
        let layer = layer();
        let other = layer.clone();
        assert!(Arc::ptr_eq(layer.engine(), other.engine()));
    }

    #[test]
    fn test_missing_template_fails_at_build_time() {
        let err = InertiaLayer::from_config(
            InertiaConfig::default().with_template_path("/no/such/template.html"),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_service_inserts_engine() {
        let layer = layer();
        let mut service = layer.layer(tower::service_fn(|req: http::Request<()>| async move {
            Ok::<_, std::convert::Infallible>(req.extensions().get::<Arc<InertiaEngine>>().is_some())
        }));

        let future = service.call(http::Request::new(()));
        let found = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
            .unwrap();
        assert!(found);
    }
}
