//! # negotiate-axum
//!
//! Content-Type driven request binding and response encoding for
//! [Axum](https://github.com/tokio-rs/axum).
//!
//! Three wire formats are supported, each selected by its Content-Type token:
//!
//! | Format        | Token                   |
//! |---------------|-------------------------|
//! | JSON          | `application/json`      |
//! | BSON          | `application/x-bson`    |
//! | MessagePack   | `application/x-msgpack` |
//!
//! ## Operations
//!
//! - [`bind`]: read a request body and decode it into a destination value
//!   according to the request's `Content-Type`. Empty bodies leave the
//!   destination untouched.
//! - [`send`]: encode a value and write it to a [`ResponseSink`] with the
//!   matching `Content-Type`. Nothing is written unless encoding succeeds.
//!   [`send_json`], [`send_bson`] and [`send_msgpack`] fix the format.
//!
//! Both have methods on [`NegotiateConfig`] that apply body size limits.
//!
//! ## Axum integration
//!
//! - [`Negotiated<T>`]: extractor running [`bind`].
//! - [`AcceptFormat`]: extractor picking a response format from `Accept`.
//! - [`NegotiatedResponse<T>`]: handler return type running [`send`].
//! - [`NegotiateLayer`]: installs a [`NegotiateConfig`] for the extractors.

pub mod context;
pub mod error;
pub mod layer;
pub mod message;
pub mod request;
pub mod response;

pub use context::{MessageLimits, NegotiateConfig};
pub use error::NegotiateError;
pub use layer::{NegotiateLayer, NegotiateService};
pub use message::{AcceptFormat, Negotiated, NegotiatedResponse};
pub use request::{bind, bind_bytes, request_format};
pub use response::{ResponseSink, send, send_bson, send_format, send_json, send_msgpack};

// Re-export the core crate
pub use negotiate_axum_core::{
    APPLICATION_BSON, APPLICATION_JSON, APPLICATION_MSGPACK, BsonCodec, Codec, CodecError, Format,
    JsonCodec, MsgPackCodec, SUPPORTED_CONTENT_TYPES, negotiate_response_format,
};

pub mod prelude {
    //! A prelude for `negotiate-axum` providing the most common types.
    pub use crate::error::NegotiateError;
    pub use crate::message::{AcceptFormat, Negotiated, NegotiatedResponse};
    pub use crate::{Format, NegotiateConfig, NegotiateLayer};
}
