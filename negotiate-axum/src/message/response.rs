//! Response type for negotiated handlers.
use crate::context::{MessageLimits, NegotiateConfig};
use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use negotiate_axum_core::Format;
use serde::Serialize;

/// Handler return type that encodes its value in a chosen [`Format`].
///
/// Usually built from an [`AcceptFormat`](crate::AcceptFormat) so the format
/// follows the client's `Accept` header. Encoding failures turn into an
/// error response instead of a partial one.
#[derive(Debug, Clone)]
pub struct NegotiatedResponse<T> {
    status: StatusCode,
    format: Format,
    value: Option<T>,
    limits: MessageLimits,
}

impl<T> NegotiatedResponse<T> {
    /// A `200 OK` response carrying `value`.
    pub fn new(format: Format, value: T) -> Self {
        Self {
            status: StatusCode::OK,
            format,
            value: Some(value),
            limits: MessageLimits::default(),
        }
    }

    /// A `204 No Content` response with the format's `Content-Type` and no body.
    pub fn empty(format: Format) -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            format,
            value: None,
            limits: MessageLimits::default(),
        }
    }

    /// Override the status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Apply body size limits when encoding.
    pub fn limits(mut self, limits: MessageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Extract the inner value, if any.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> IntoResponse for NegotiatedResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let config = NegotiateConfig::new().limits(self.limits);
        let mut response = Response::new(Body::empty());
        match config.send_format(&mut response, self.status, self.value.as_ref(), self.format) {
            Ok(()) => response,
            Err(err) => err.into_response(),
        }
    }
}
