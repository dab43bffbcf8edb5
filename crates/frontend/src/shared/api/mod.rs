//! REST transport for the backend
//!
//! Screens talk to the backend through [`ApiTransport`]. The browser uses
//! [`HttpTransport`] (gloo-net); tests use an in-memory fake.

mod error;
mod http;
mod transport;

#[cfg(test)]
pub mod testing;

pub use error::ApiError;
pub use http::HttpTransport;
pub use transport::{get_json, send_checked, ApiRequest, ApiResponse, ApiTransport, Method};
