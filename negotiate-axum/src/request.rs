//! Request binding.
//!
//! Flow: check Content-Length → read body → empty? done → resolve
//! Content-Type → decode into a temporary → assign to the destination.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use negotiate_axum_core::{CodecError, Format};
use serde::de::DeserializeOwned;

use crate::context::{MessageLimits, NegotiateConfig};
use crate::error::NegotiateError;

impl NegotiateConfig {
    /// Decode a request body into `dest` according to its `Content-Type`.
    ///
    /// The body is read to the end first. An empty body succeeds without
    /// touching `dest`, whatever the declared content type. Otherwise the
    /// content type must be one of the supported tokens and the bytes must be
    /// valid for that codec; on any failure `dest` is left unchanged.
    pub async fn bind<T>(&self, req: Request<Body>, dest: &mut T) -> Result<(), NegotiateError>
    where
        T: DeserializeOwned,
    {
        let (parts, body) = req.into_parts();

        if let Some(length) = content_length(&parts.headers) {
            self.get_limits().check_receive_size(length)?;
        }

        let bytes = read_body(body, &self.get_limits()).await?;
        bind_bytes(&parts.headers, &bytes, dest)
    }
}

/// Decode a request into `dest` with the default (unlimited) config.
///
/// See [`NegotiateConfig::bind`].
pub async fn bind<T>(req: Request<Body>, dest: &mut T) -> Result<(), NegotiateError>
where
    T: DeserializeOwned,
{
    NegotiateConfig::default().bind(req, dest).await
}

/// Decode an already-read body into `dest` using the `Content-Type` in `headers`.
pub fn bind_bytes<T>(headers: &HeaderMap, body: &[u8], dest: &mut T) -> Result<(), NegotiateError>
where
    T: DeserializeOwned,
{
    if body.is_empty() {
        return Ok(());
    }

    let format = request_format(headers)?;
    tracing::trace!(%format, len = body.len(), "binding request body");

    *dest = format.decode(body)?;
    Ok(())
}

/// Resolve the request's `Content-Type` header to a [`Format`].
///
/// A missing header resolves as the empty string and is rejected. A header
/// that is not visible ASCII is rejected with its lossy text.
pub fn request_format(headers: &HeaderMap) -> Result<Format, CodecError> {
    match headers.get(header::CONTENT_TYPE) {
        None => Err(CodecError::unsupported("")),
        Some(value) => match value.to_str() {
            Ok(content_type) => Format::from_content_type(content_type),
            Err(_) => Err(CodecError::unsupported(
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )),
        },
    }
}

/// Read the whole body, enforcing the receive limit while streaming.
pub(crate) async fn read_body(body: Body, limits: &MessageLimits) -> Result<Bytes, NegotiateError> {
    let Some(max) = limits.get_receive_max_bytes() else {
        return body
            .collect()
            .await
            .map(|collected| collected.to_bytes())
            .map_err(NegotiateError::Body);
    };

    match Limited::new(body, max).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.is::<LengthLimitError>() => Err(NegotiateError::RequestTooLarge { max }),
        // Limited boxes the inner body error; unwrap it so it surfaces unchanged.
        Err(err) => match err.downcast::<axum::Error>() {
            Ok(err) => Err(NegotiateError::Body(*err)),
            Err(err) => Err(NegotiateError::Body(axum::Error::new(err))),
        },
    }
}

/// Get Content-Length header value as usize.
fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
}
