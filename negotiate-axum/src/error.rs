//! Error type for binding requests and sending responses.
//!
//! [`NegotiateError`] wraps the codec errors from `negotiate-axum-core` and
//! adds the failures that only exist at the HTTP layer: reading the body and
//! size limits. It converts into an HTTP response so it can be used directly
//! as an extractor rejection.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use negotiate_axum_core::CodecError;
use serde::Serialize;

/// Errors returned by [`bind`](crate::bind) and [`send`](crate::send).
#[derive(Debug, thiserror::Error)]
pub enum NegotiateError {
    /// Unsupported content type, or the codec rejected the bytes or the value.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Reading the request body failed.
    #[error("failed to read request body: {0}")]
    Body(#[source] axum::Error),

    /// The request body is larger than the configured receive limit.
    #[error("request body exceeds maximum allowed size of {max} bytes")]
    RequestTooLarge { max: usize },

    /// The encoded response is larger than the configured send limit.
    #[error("message size {size} bytes exceeds maximum allowed size of {max} bytes")]
    ResponseTooLarge { size: usize, max: usize },
}

impl NegotiateError {
    /// Machine-readable error code used in error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Codec(CodecError::UnsupportedContentType { .. }) => "unsupported_content_type",
            Self::Codec(CodecError::Decode { .. }) => "decode_error",
            Self::Codec(CodecError::Encode { .. }) => "encode_error",
            Self::Body(_) => "body_error",
            Self::RequestTooLarge { .. } => "request_too_large",
            Self::ResponseTooLarge { .. } => "response_too_large",
        }
    }

    /// HTTP status code for this error.
    ///
    /// Client mistakes map to 4xx, failures to produce a response map to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Codec(CodecError::UnsupportedContentType { .. }) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            Self::Codec(CodecError::Decode { .. }) | Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::RequestTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Codec(CodecError::Encode { .. }) | Self::ResponseTooLarge { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the underlying codec error, if any.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            Self::Codec(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_unsupported_content_type(&self) -> bool {
        self.codec_error()
            .is_some_and(CodecError::is_unsupported_content_type)
    }

    pub fn is_decode(&self) -> bool {
        self.codec_error().is_some_and(CodecError::is_decode)
    }

    pub fn is_encode(&self) -> bool {
        self.codec_error().is_some_and(CodecError::is_encode)
    }

    /// Message exposed to clients.
    ///
    /// Server-side failures get a generic message.
    fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "internal error".to_string()
        } else {
            self.to_string()
        }
    }
}

/// JSON body structure for error responses.
#[derive(Serialize)]
struct ErrorResponseBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for NegotiateError {
    fn into_response(self) -> Response {
        let body = ErrorResponseBody {
            code: self.code(),
            message: self.public_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
