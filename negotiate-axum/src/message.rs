//! Extractor and response types for axum handlers.

mod request;
mod response;

pub use request::{AcceptFormat, Negotiated};
pub use response::NegotiatedResponse;
