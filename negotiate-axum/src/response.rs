//! Response encoding.
//!
//! Every fallible step (token resolution, encoding, size check) runs before
//! the first write to the [`ResponseSink`], so a failed send leaves the sink
//! exactly as it was.

use axum::body::Body;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use bytes::Bytes;
use negotiate_axum_core::Format;
use serde::Serialize;

use crate::context::NegotiateConfig;
use crate::error::NegotiateError;

/// Destination for an encoded response: headers, status, body.
pub trait ResponseSink {
    /// Set the `Content-Type` header.
    fn set_content_type(&mut self, value: HeaderValue);

    /// Set the status code.
    fn set_status(&mut self, status: StatusCode);

    /// Write the body bytes.
    fn write_body(&mut self, body: Bytes);
}

impl ResponseSink for Response<Body> {
    fn set_content_type(&mut self, value: HeaderValue) {
        self.headers_mut().insert(header::CONTENT_TYPE, value);
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: Bytes) {
        *self.body_mut() = Body::from(body);
    }
}

impl NegotiateConfig {
    /// Encode `value` in the format named by `content_type` and write it to `sink`.
    ///
    /// Fails with an unsupported content-type error before writing anything if
    /// the token is not recognized. `None` writes the status and headers with
    /// a zero-length body.
    pub fn send<S, T>(
        &self,
        sink: &mut S,
        status: StatusCode,
        value: Option<&T>,
        content_type: &str,
    ) -> Result<(), NegotiateError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize,
    {
        let format = Format::from_content_type(content_type)?;
        self.send_format(sink, status, value, format)
    }

    /// Encode `value` with `format` and write it to `sink`.
    pub fn send_format<S, T>(
        &self,
        sink: &mut S,
        status: StatusCode,
        value: Option<&T>,
        format: Format,
    ) -> Result<(), NegotiateError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize,
    {
        let body = match value {
            Some(value) => Bytes::from(format.encode(value)?),
            None => Bytes::new(),
        };
        self.get_limits().check_send_size(body.len())?;

        tracing::trace!(%format, %status, len = body.len(), "sending response body");

        sink.set_content_type(format.header_value());
        sink.set_status(status);
        sink.write_body(body);
        Ok(())
    }
}

/// Encode `value` in the format named by `content_type` with the default config.
///
/// See [`NegotiateConfig::send`].
pub fn send<S, T>(
    sink: &mut S,
    status: StatusCode,
    value: Option<&T>,
    content_type: &str,
) -> Result<(), NegotiateError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    NegotiateConfig::default().send(sink, status, value, content_type)
}

/// Encode `value` with `format` using the default config.
pub fn send_format<S, T>(
    sink: &mut S,
    status: StatusCode,
    value: Option<&T>,
    format: Format,
) -> Result<(), NegotiateError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    NegotiateConfig::default().send_format(sink, status, value, format)
}

/// Send `value` as `application/json`.
pub fn send_json<S, T>(sink: &mut S, status: StatusCode, value: Option<&T>) -> Result<(), NegotiateError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    send_format(sink, status, value, Format::Json)
}

/// Send `value` as `application/x-bson`.
pub fn send_bson<S, T>(sink: &mut S, status: StatusCode, value: Option<&T>) -> Result<(), NegotiateError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    send_format(sink, status, value, Format::Bson)
}

/// Send `value` as `application/x-msgpack`.
pub fn send_msgpack<S, T>(
    sink: &mut S,
    status: StatusCode,
    value: Option<&T>,
) -> Result<(), NegotiateError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    send_format(sink, status, value, Format::MsgPack)
}
