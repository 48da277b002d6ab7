//! Inertia wire protocol: header names, status codes and header parsing.
//!
//! | Request | Response |
//! |---------|----------|
//! | no `X-Inertia` | 200, `text/html`, full document |
//! | `X-Inertia: true`, matching or absent version | 200, `X-Inertia: true`, `application/json` |
//! | `X-Inertia: true`, stale version, `GET`/`HEAD` | 409, `X-Inertia-Location` |
//! | redirect after `PUT`/`PATCH`/`DELETE` | 303, `Location` |
//! | redirect after anything else | 302, `Location` |
//! | external location | 409, `X-Inertia-Location` |
//!
//! See the [Inertia protocol](https://inertiajs.com/the-protocol) for details.

pub mod constants;
mod headers;

pub use headers::{
    is_truthy, is_version_checked_method, parse_partial_data, redirect_status,
    requires_see_other,
};
