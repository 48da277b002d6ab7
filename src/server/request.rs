//! Read-only view of an inbound request.
//!
//! The engine only needs three things from a request: case-insensitive header
//! lookup, the method and the URI used as the default page url.
//! [`RequestView`] captures exactly that so the engine stays independent of
//! any particular request type.

use crate::protocol::{self, constants::headers};
use axum::http::{request::Parts, HeaderMap, Method, Request, Uri};

/// What the negotiation engine reads from a request.
pub trait RequestView {
    /// First value of a header, matched case-insensitively.
    ///
    /// Values that are not valid UTF-8 are treated as absent.
    fn header(&self, name: &str) -> Option<&str>;

    /// HTTP method, e.g. `GET`.
    fn method(&self) -> &str;

    /// Path and query of the request, used as the default page url.
    fn uri(&self) -> &str;

    /// Whether the request carries `X-Inertia: true`.
    fn is_inertia(&self) -> bool {
        self.header(headers::INERTIA.as_str())
            .is_some_and(protocol::is_truthy)
    }
}

fn header_str<'a>(map: &'a HeaderMap, name: &str) -> Option<&'a str> {
    map.get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

fn path_and_query(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

/// Owned snapshot of the parts of a request the engine reads.
///
/// # Examples
///
/// ```
/// use inertia_axum::server::{InertiaRequest, RequestView};
///
/// let request = InertiaRequest::new("GET", "/users?page=2")
///     .with_header("X-Inertia", "true");
///
/// assert!(request.is_inertia());
/// assert_eq!(request.header("x-inertia"), Some("true"));
/// assert_eq!(request.uri(), "/users?page=2");
/// ```
#[derive(Clone, Debug)]
pub struct InertiaRequest {
    method: String,
    uri: String,
    headers: HeaderMap,
}

impl InertiaRequest {
    /// Snapshot with no headers. The method string is kept verbatim.
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Snapshot of a method, URI and header map taken from any HTTP stack.
    pub fn from_http(method: &Method, uri: &Uri, headers: HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            uri: path_and_query(uri).to_string(),
            headers,
        }
    }

    /// Snapshot of request parts.
    pub fn from_parts(parts: &Parts) -> Self {
        Self::from_http(&parts.method, &parts.uri, parts.headers.clone())
    }

    /// Add a header. Invalid names or values are ignored.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            axum::http::HeaderName::try_from(name),
            axum::http::HeaderValue::try_from(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// All captured headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl RequestView for InertiaRequest {
    fn header(&self, name: &str) -> Option<&str> {
        header_str(&self.headers, name)
    }

    fn method(&self) -> &str {
        &self.method
    }

    fn uri(&self) -> &str {
        &self.uri
    }
}

impl RequestView for Parts {
    fn header(&self, name: &str) -> Option<&str> {
        header_str(&self.headers, name)
    }

    fn method(&self) -> &str {
        self.method.as_str()
    }

    fn uri(&self) -> &str {
        path_and_query(&self.uri)
    }
}

impl<B> RequestView for Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        header_str(self.headers(), name)
    }

    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn uri(&self) -> &str {
        path_and_query(Request::uri(self))
    }
}
