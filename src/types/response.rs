//! Framework-neutral response descriptor.
//!
//! [`InertiaResponse`] is everything the engine hands back: a status code, an
//! ordered multi-map of headers and an optional body. It never touches a live
//! connection; the Axum binding converts it with [`IntoResponse`].
//!
//! # Examples
//!
//! ```
//! use inertia_axum::InertiaResponse;
//!
//! let response = InertiaResponse::new(302).with_header("Location", "/users");
//!
//! assert_eq!(response.status(), 302);
//! assert_eq!(response.header("location"), Some("/users"));
//! assert!(response.body().is_none());
//! ```

use crate::error::{InertiaError, Result};
use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Status, headers and body produced by the negotiation engine.
///
/// There is no status-less constructor; every descriptor starts from
/// [`InertiaResponse::new`].
///
/// ```compile_fail
/// let response = inertia_axum::InertiaResponse::default();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InertiaResponse {
    status: u16,
    headers: Vec<(String, Vec<String>)>,
    body: Option<String>,
}

impl InertiaResponse {
    /// Empty response with the given status code.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a header value, keeping any values already set under `name`.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append_header(name, value);
        self
    }

    /// Set the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a header value in place.
    ///
    /// Names compare case-insensitively; the first spelling used is kept.
    pub fn append_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, values)) => values.push(value),
            None => self.headers.push((name, vec![value])),
        }
    }

    /// HTTP status code.
    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// All headers in insertion order.
    #[inline]
    pub fn headers(&self) -> &[(String, Vec<String>)] {
        &self.headers
    }

    /// First value of a header (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value of a header (case-insensitive).
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// Whether a header is present (case-insensitive).
    #[inline]
    pub fn has_header(&self, name: &str) -> bool {
        self.header_values(name).is_some()
    }

    /// Response body, if any.
    #[inline]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Convert into an [`http::Response`], validating status and header values.
    ///
    /// # Errors
    ///
    /// Returns [`InertiaError::InvalidHeader`] if the status or any header cannot
    /// be represented on the wire.
    pub fn try_into_http(self) -> Result<Response> {
        let status = StatusCode::from_u16(self.status)
            .map_err(|_| InertiaError::InvalidHeader(format!("status {}", self.status)))?;

        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = status;

        let header_map = response.headers_mut();
        for (name, values) in self.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| InertiaError::InvalidHeader(format!("{name}: {e}")))?;
            for value in values {
                let header_value = HeaderValue::try_from(value.as_str())
                    .map_err(|e| InertiaError::InvalidHeader(format!("{name}: {e}")))?;
                header_map.append(header_name.clone(), header_value);
            }
        }

        Ok(response)
    }
}

impl IntoResponse for InertiaResponse {
    fn into_response(self) -> Response {
        match self.try_into_http() {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }
}
