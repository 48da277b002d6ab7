//! Inertia protocol constants.
//!
//! Header names are lowercase, matching how [`http::HeaderName`] stores them.

/// Inertia request and response header names.
pub mod headers {
    use http::HeaderName;

    /// `X-Inertia`: set by the client on XHR visits, echoed on JSON responses.
    pub const INERTIA: HeaderName = HeaderName::from_static("x-inertia");

    /// `X-Inertia-Version`: asset version the client was built against.
    pub const VERSION: HeaderName = HeaderName::from_static("x-inertia-version");

    /// `X-Inertia-Location`: target of a hard browser visit (409 responses).
    pub const LOCATION: HeaderName = HeaderName::from_static("x-inertia-location");

    /// `X-Inertia-Partial-Data`: comma-separated prop names to keep.
    pub const PARTIAL_DATA: HeaderName = HeaderName::from_static("x-inertia-partial-data");

    /// `X-Inertia-Partial-Component`: component a partial reload targets.
    pub const PARTIAL_COMPONENT: HeaderName =
        HeaderName::from_static("x-inertia-partial-component");
}

/// Status codes used by the protocol.
pub mod status {
    /// Regular page response.
    pub const OK: u16 = 200;
    /// Redirect after `GET`/`POST`.
    pub const FOUND: u16 = 302;
    /// Redirect after `PUT`/`PATCH`/`DELETE`, forcing a follow-up `GET`.
    pub const SEE_OTHER: u16 = 303;
    /// Asset version conflict or external location.
    pub const CONFLICT: u16 = 409;
}

/// Content types set on successful renders.
pub mod content_type {
    /// Inertia XHR responses.
    pub const JSON: &str = "application/json";
    /// Full page loads.
    pub const HTML: &str = "text/html";
}

/// Placeholder replaced by the page JSON in HTML templates.
pub const PAGE_PLACEHOLDER: &str = "@PageObject@";
