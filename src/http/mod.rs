//! HTTP module
//!
//! Request construction and the transport that puts requests on the wire.
//!
//! # Overview
//!
//! - **Request**: immutable value producing the final URL and form body
//! - **Transport**: the single `send(request) -> decoded body` capability
//! - **HttpTransport**: `reqwest` implementation of `Transport`

mod request;
mod transport;

pub use request::{
    encode, Request, RequestFactory, DEFAULT_AUTHORIZATION_URL, DEFAULT_GRAPH_URL, DEFAULT_GRAPH_VERSION,
};
pub use transport::{decode_body, HttpTransport, HttpTransportConfig, Transport};

#[cfg(test)]
mod tests;
