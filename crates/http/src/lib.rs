//! HTTP plumbing for the shelf access layer: the transport seam, a reqwest
//! implementation, response envelope decoding and the error taxonomy.

pub mod client;
pub mod envelope;
pub mod error;
pub mod transport;

pub use client::{ReqwestTransport, TransportBuilder};
pub use envelope::{acknowledge, decode, Envelope};
pub use error::ApiError;
pub use transport::{resource_path, ApiRequest, ApiResponse, Method, Transport};
