//! Protocol negotiation engine.
//!
//! [`InertiaEngine`] decides, from request headers and the current asset
//! version, which of the protocol's response shapes to produce:
//!
//! ```text
//!                 ┌──────────────┐
//!   request ────► │   render     │──► no X-Inertia ───────────────► 200 text/html
//!   options       │              │──► X-Inertia, stale version, GET ► 409 X-Inertia-Location
//!                 │              │──► X-Inertia ─────────────────► 200 application/json
//!                 └──────────────┘
//!   redirect(request, loc) ────────► 302 / 303 Location
//!   location(loc) ─────────────────► 409 X-Inertia-Location
//! ```
//!
//! Each call is a pure function of the request snapshot, the options, the
//! version read from the resolver and the collaborators' output. Nothing is
//! cached between calls, so one engine can serve any number of concurrent
//! requests behind an `Arc`.

use crate::config::InertiaConfig;
use crate::error::{InertiaError, Result};
use crate::protocol::{
    self,
    constants::{content_type, headers, status},
};
use crate::serializer::PageSerializer;
use crate::server::RequestView;
use crate::template::TemplateRenderer;
use crate::types::{InertiaResponse, PageObject, RenderOptions};
use crate::version::VersionResolver;
use axum::http::header;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// The Inertia protocol negotiation engine.
///
/// # Examples
///
/// ```
/// use inertia_axum::{InertiaConfig, InertiaEngine, RenderOptions, SimpleTemplateRenderer};
/// use inertia_axum::server::InertiaRequest;
///
/// let engine = InertiaEngine::from_config(
///     InertiaConfig::default().with_template_renderer(SimpleTemplateRenderer::default()),
/// )
/// .unwrap();
///
/// let request = InertiaRequest::new("GET", "/users").with_header("X-Inertia", "true");
/// let response = engine
///     .render(&request, RenderOptions::new("Users/Index").with_prop("total", 3))
///     .unwrap();
///
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.header("X-Inertia"), Some("true"));
/// ```
#[derive(Clone)]
pub struct InertiaEngine {
    version: Arc<dyn VersionResolver>,
    serializer: Arc<dyn PageSerializer>,
    template_renderer: Arc<dyn TemplateRenderer>,
    encrypt_history: bool,
    clear_history: bool,
}

impl InertiaEngine {
    /// Build an engine, resolving the template renderer up front.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::Configuration`] when no renderer was supplied and
    /// the template file cannot be loaded.
    pub fn from_config(config: InertiaConfig) -> Result<Self> {
        let template_renderer = config.resolve_template_renderer()?;
        Ok(Self {
            version: config.version,
            serializer: config.serializer,
            template_renderer,
            encrypt_history: config.encrypt_history,
            clear_history: config.clear_history,
        })
    }

    /// Build an engine from explicit collaborators with both history defaults off.
    pub fn new(
        version: impl VersionResolver + 'static,
        serializer: impl PageSerializer + 'static,
        template_renderer: impl TemplateRenderer + 'static,
    ) -> Self {
        Self {
            version: Arc::new(version),
            serializer: Arc::new(serializer),
            template_renderer: Arc::new(template_renderer),
            encrypt_history: false,
            clear_history: false,
        }
    }

    /// Current asset version, read fresh from the resolver.
    ///
    /// # Errors
    ///
    /// Propagates resolver failures.
    pub fn version(&self) -> Result<String> {
        self.version.version()
    }

    /// Render a page for `request`.
    ///
    /// # Errors
    ///
    /// Fails with [`InertiaError::InvalidOptions`] for an empty component name
    /// and otherwise propagates collaborator failures unchanged.
    pub fn render(
        &self,
        request: &impl RequestView,
        options: RenderOptions,
    ) -> Result<InertiaResponse> {
        let page = self.page_object(request, options)?;

        if !request.is_inertia() {
            tracing::debug!(
                component = page.component(),
                url = page.url(),
                version = page.version(),
                "inertia full page load"
            );
            let json = self.serializer.serialize(&page, None)?;
            let html = self.template_renderer.render(&json)?;
            return Ok(InertiaResponse::new(status::OK)
                .with_header(header::CONTENT_TYPE.as_str(), content_type::HTML)
                .with_body(html));
        }

        if self.is_version_conflict(request, page.version()) {
            tracing::debug!(
                component = page.component(),
                url = page.url(),
                version = page.version(),
                client_version = request.header(headers::VERSION.as_str()),
                "inertia asset version conflict"
            );
            return Ok(self.location(page.url()));
        }

        let keep = partial_reload_props(request, page.component());
        tracing::debug!(
            component = page.component(),
            url = page.url(),
            version = page.version(),
            partial = keep.is_some(),
            "inertia json response"
        );
        let json = self.serializer.serialize(&page, keep.as_ref())?;

        Ok(InertiaResponse::new(status::OK)
            .with_header(headers::INERTIA.as_str(), "true")
            .with_header(header::CONTENT_TYPE.as_str(), content_type::JSON)
            .with_body(json))
    }

    /// Redirect within the application.
    ///
    /// Uses 303 after `PUT`, `PATCH` or `DELETE` so the follow-up visit is a
    /// `GET`, and 302 otherwise.
    pub fn redirect(&self, request: &impl RequestView, location: &str) -> InertiaResponse {
        redirect(request, location)
    }

    /// Send the client on a hard browser visit to `location`.
    pub fn location(&self, location: &str) -> InertiaResponse {
        location_response(location)
    }

    fn page_object(&self, request: &impl RequestView, options: RenderOptions) -> Result<PageObject> {
        if options.component().is_empty() {
            return Err(InertiaError::InvalidOptions(
                "component name must not be empty".into(),
            ));
        }

        let url = options
            .url()
            .map_or_else(|| request.uri().to_string(), str::to_string);
        let encrypt_history = options
            .encrypt_history_override()
            .unwrap_or(self.encrypt_history);
        let clear_history = options
            .clear_history_override()
            .unwrap_or(self.clear_history);
        let version = self.version.version()?;
        let (component, props) = options.into_parts();

        Ok(PageObject::new(
            component,
            props,
            url,
            version,
            encrypt_history,
            clear_history,
        ))
    }

    fn is_version_conflict(&self, request: &impl RequestView, current: &str) -> bool {
        if !protocol::is_version_checked_method(request.method()) {
            return false;
        }
        request
            .header(headers::VERSION.as_str())
            .is_some_and(|client| client != current)
    }
}

impl fmt::Debug for InertiaEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InertiaEngine")
            .field("encrypt_history", &self.encrypt_history)
            .field("clear_history", &self.clear_history)
            .finish_non_exhaustive()
    }
}

/// Props to keep for a partial reload of `component`, if the request asks for one.
///
/// The `X-Inertia-Partial-Data` list only applies when
/// `X-Inertia-Partial-Component` names the component being rendered; on a
/// mismatch every prop is sent.
fn partial_reload_props(request: &impl RequestView, component: &str) -> Option<BTreeSet<String>> {
    let data = request.header(headers::PARTIAL_DATA.as_str())?;
    match request.header(headers::PARTIAL_COMPONENT.as_str()) {
        Some(target) if target == component => Some(protocol::parse_partial_data(data)),
        Some(target) => {
            tracing::warn!(
                requested = target,
                rendered = component,
                "partial reload targets another component, sending all props"
            );
            None
        }
        None => None,
    }
}

/// Redirect response for a request made with `request`'s method.
///
/// ```
/// use inertia_axum::engine::redirect;
/// use inertia_axum::server::InertiaRequest;
///
/// let response = redirect(&InertiaRequest::new("PUT", "/users/1"), "/users");
/// assert_eq!(response.status(), 303);
/// assert_eq!(response.header("Location"), Some("/users"));
/// ```
pub fn redirect(request: &impl RequestView, location: &str) -> InertiaResponse {
    let code = protocol::redirect_status(request.method());
    tracing::debug!(status = code, location, "inertia redirect");
    InertiaResponse::new(code).with_header(header::LOCATION.as_str(), location)
}

/// External location response: 409 with `X-Inertia-Location`.
///
/// ```
/// use inertia_axum::engine::location_response;
///
/// let response = location_response("https://example.com");
/// assert_eq!(response.status(), 409);
/// assert_eq!(response.header("X-Inertia-Location"), Some("https://example.com"));
/// ```
pub fn location_response(location: &str) -> InertiaResponse {
    tracing::debug!(location, "inertia external location");
    InertiaResponse::new(status::CONFLICT).with_header(headers::LOCATION.as_str(), location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::JsonPageSerializer;
    use crate::server::InertiaRequest;
    use crate::template::SimpleTemplateRenderer;
    use crate::version::StaticVersion;

    fn engine() -> InertiaEngine {
        InertiaEngine::new(
            StaticVersion::new("1"),
            JsonPageSerializer,
            SimpleTemplateRenderer::new("<div data-page=\"@PageObject@\"></div>"),
        )
    }

    fn inertia_get(uri: &str) -> InertiaRequest {
        InertiaRequest::new("GET", uri).with_header("X-Inertia", "true")
    }

    #[test]
    fn test_url_defaults_to_request_uri() {
        let response = engine()
            .render(&inertia_get("/users?page=2"), RenderOptions::new("Users"))
            .unwrap();
        assert!(response.body().unwrap().contains(r#""url":"/users?page=2""#));
    }

    #[test]
    fn test_url_override_wins() {
        let response = engine()
            .render(
                &inertia_get("/users"),
                RenderOptions::new("Users").with_url("/people"),
            )
            .unwrap();
        assert!(response.body().unwrap().contains(r#""url":"/people""#));
    }

    #[test]
    fn test_history_defaults_come_from_config() {
        let engine = InertiaEngine::from_config(
            InertiaConfig::default()
                .with_template_renderer(SimpleTemplateRenderer::default())
                .with_encrypt_history(true)
                .with_clear_history(true),
        )
        .unwrap();

        let body = engine
            .render(&inertia_get("/"), RenderOptions::new("Home"))
            .unwrap()
            .body()
            .unwrap()
            .to_string();
        assert!(body.contains(r#""encryptHistory":true"#));
        assert!(body.contains(r#""clearHistory":true"#));

        let body = engine
            .render(
                &inertia_get("/"),
                RenderOptions::new("Home").encrypt_history(false).clear_history(false),
            )
            .unwrap()
            .body()
            .unwrap()
            .to_string();
        assert!(body.contains(r#""encryptHistory":false"#));
        assert!(body.contains(r#""clearHistory":false"#));
    }

    #[test]
    fn test_empty_component_rejected() {
        let err = engine()
            .render(&inertia_get("/"), RenderOptions::new(""))
            .unwrap_err();
        assert!(matches!(err, InertiaError::InvalidOptions(_)));
    }

    #[test]
    fn test_version_conflict_only_for_safe_methods() {
        let engine = engine();
        for method in ["GET", "HEAD"] {
            let request = InertiaRequest::new(method, "/")
                .with_header("X-Inertia", "true")
                .with_header("X-Inertia-Version", "old");
            let response = engine.render(&request, RenderOptions::new("Home")).unwrap();
            assert_eq!(response.status(), 409, "{method}");
        }
        for method in ["POST", "PUT", "PATCH", "DELETE"] {
            let request = InertiaRequest::new(method, "/")
                .with_header("X-Inertia", "true")
                .with_header("X-Inertia-Version", "old");
            let response = engine.render(&request, RenderOptions::new("Home")).unwrap();
            assert_eq!(response.status(), 200, "{method}");
        }
    }

    #[test]
    fn test_non_inertia_request_ignores_version() {
        let request = InertiaRequest::new("GET", "/").with_header("X-Inertia-Version", "old");
        let response = engine().render(&request, RenderOptions::new("Home")).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.header("Content-Type"), Some("text/html"));
    }

    #[test]
    fn test_partial_reload_requires_matching_component() {
        let options = || {
            RenderOptions::new("Users")
                .with_prop("users", 3)
                .with_prop("stats", 4)
        };
        let partial = |component: &str| {
            inertia_get("/users")
                .with_header("X-Inertia-Partial-Data", "users")
                .with_header("X-Inertia-Partial-Component", component)
        };

        let body = engine().render(&partial("Users"), options()).unwrap();
        assert!(body.body().unwrap().contains(r#""props":{"users":3}"#));

        let body = engine().render(&partial("Dashboard"), options()).unwrap();
        assert!(body.body().unwrap().contains(r#""props":{"users":3,"stats":4}"#));
    }

    #[test]
    fn test_partial_data_without_component_is_ignored() {
        let request = inertia_get("/").with_header("X-Inertia-Partial-Data", "a");
        let response = engine()
            .render(&request, RenderOptions::new("Home").with_prop("a", 1).with_prop("b", 2))
            .unwrap();
        assert!(response.body().unwrap().contains(r#""props":{"a":1,"b":2}"#));
    }

    #[test]
    fn test_version_resolver_failure_propagates() {
        struct Broken;
        impl VersionResolver for Broken {
            fn version(&self) -> Result<String> {
                Err(InertiaError::VersionResolution("manifest missing".into()))
            }
        }

        let engine = InertiaEngine::new(Broken, JsonPageSerializer, SimpleTemplateRenderer::default());
        let err = engine
            .render(&inertia_get("/"), RenderOptions::new("Home"))
            .unwrap_err();
        assert!(matches!(err, InertiaError::VersionResolution(_)));
    }

    #[test]
    fn test_template_failure_propagates() {
        struct Failing;
        impl TemplateRenderer for Failing {
            fn render(&self, _page_json: &str) -> Result<String> {
                Err(InertiaError::Template("layout missing".into()))
            }
        }

        let engine = InertiaEngine::new(StaticVersion::default(), JsonPageSerializer, Failing);
        let err = engine
            .render(&InertiaRequest::new("GET", "/"), RenderOptions::new("Home"))
            .unwrap_err();
        assert!(matches!(err, InertiaError::Template(_)));
    }

    #[test]
    fn test_non_ascii_stale_version_conflicts() {
        let engine = InertiaEngine::new(
            StaticVersion::new("build-é2"),
            JsonPageSerializer,
            SimpleTemplateRenderer::default(),
        );
        let (parts, _) = axum::http::Request::builder()
            .uri("/albums")
            .header("X-Inertia", "true")
            .header(
                "X-Inertia-Version",
                axum::http::HeaderValue::from_bytes("build-é1".as_bytes()).unwrap(),
            )
            .body(())
            .unwrap()
            .into_parts();

        let response = engine.render(&parts, RenderOptions::new("Albums")).unwrap();
        assert_eq!(response.status(), 409);
        assert_eq!(response.header("X-Inertia-Location"), Some("/albums"));

        let (parts, _) = axum::http::Request::builder()
            .uri("/albums")
            .header("X-Inertia", "true")
            .header(
                "X-Inertia-Version",
                axum::http::HeaderValue::from_bytes("build-é2".as_bytes()).unwrap(),
            )
            .body(())
            .unwrap()
            .into_parts();
        let response = engine.render(&parts, RenderOptions::new("Albums")).unwrap();
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_unknown_method_skips_version_check() {
        let request = InertiaRequest::new("NOT A METHOD", "/")
            .with_header("X-Inertia", "true")
            .with_header("X-Inertia-Version", "old");
        let response = engine().render(&request, RenderOptions::new("Home")).unwrap();
        assert_eq!(response.status(), 200);
    }

    struct FailingSerializer;

    impl PageSerializer for FailingSerializer {
        fn serialize(&self, _page: &PageObject, _keep: Option<&BTreeSet<String>>) -> Result<String> {
            Err(InertiaError::Serialization(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }
    }

    fn failing_serializer_engine() -> InertiaEngine {
        InertiaEngine::from_config(
            InertiaConfig::default()
                .with_serializer(FailingSerializer)
                .with_template_renderer(SimpleTemplateRenderer::default()),
        )
        .unwrap()
    }

    fn serializer_error_message() -> String {
        FailingSerializer
            .serialize(
                &PageObject::new("Home", Default::default(), "/", "1", false, false),
                None,
            )
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_serializer_failure_propagates_on_json_visit() {
        let err = failing_serializer_engine()
            .render(&inertia_get("/"), RenderOptions::new("Home"))
            .unwrap_err();
        assert!(matches!(err, InertiaError::Serialization(_)));
        assert_eq!(err.to_string(), serializer_error_message());
    }

    #[test]
    fn test_serializer_failure_propagates_on_full_load() {
        let err = failing_serializer_engine()
            .render(&InertiaRequest::new("GET", "/"), RenderOptions::new("Home"))
            .unwrap_err();
        assert!(matches!(err, InertiaError::Serialization(_)));
        assert_eq!(err.to_string(), serializer_error_message());
    }

    #[derive(Clone, Default)]
    struct RecordingSerializer {
        seen: Arc<parking_lot::Mutex<Vec<Option<BTreeSet<String>>>>>,
    }

    impl PageSerializer for RecordingSerializer {
        fn serialize(&self, page: &PageObject, keep: Option<&BTreeSet<String>>) -> Result<String> {
            self.seen.lock().push(keep.cloned());
            JsonPageSerializer.serialize(page, keep)
        }
    }

    #[test]
    fn test_serializer_receives_partial_reload_set() {
        let recorder = RecordingSerializer::default();
        let engine = InertiaEngine::from_config(
            InertiaConfig::default()
                .with_serializer(recorder.clone())
                .with_template_renderer(SimpleTemplateRenderer::default()),
        )
        .unwrap();
        let options = || RenderOptions::new("Users").with_prop("users", 1).with_prop("stats", 2);

        let full_load = InertiaRequest::new("GET", "/users")
            .with_header("X-Inertia-Partial-Component", "Users")
            .with_header("X-Inertia-Partial-Data", "users");
        engine.render(&full_load, options()).unwrap();

        let partial = inertia_get("/users")
            .with_header("X-Inertia-Partial-Component", "Users")
            .with_header("X-Inertia-Partial-Data", "users, stats,,users");
        engine.render(&partial, options()).unwrap();

        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], None);
        assert_eq!(
            seen[1],
            Some(BTreeSet::from(["stats".to_string(), "users".to_string()]))
        );
    }
}
