//! Codec error types.
//!
//! [`CodecError`] covers the three ways a body can fail to go through a codec:
//! the declared content type is unknown, the bytes do not decode, or the value
//! does not encode.

use crate::format::Format;

/// Boxed error used to carry the underlying codec diagnostic.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while resolving a content type or running a codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The content type is not one of the supported tokens.
    #[error("unsupported content-type: {content_type:?}")]
    UnsupportedContentType { content_type: String },

    /// The body bytes are not valid for the declared format.
    #[error("failed to decode {format} body: {source}")]
    Decode {
        format: Format,
        #[source]
        source: BoxError,
    },

    /// The value cannot be represented in the target format.
    #[error("failed to encode {format} body: {source}")]
    Encode {
        format: Format,
        #[source]
        source: BoxError,
    },
}

impl CodecError {
    /// Create an unsupported content-type error for the raw header value.
    pub fn unsupported<S: Into<String>>(content_type: S) -> Self {
        Self::UnsupportedContentType {
            content_type: content_type.into(),
        }
    }

    pub(crate) fn decode<E>(format: Format, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Decode {
            format,
            source: source.into(),
        }
    }

    pub(crate) fn encode<E>(format: Format, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Encode {
            format,
            source: source.into(),
        }
    }

    /// The offending content type, if this is an unsupported content-type error.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::UnsupportedContentType { content_type } => Some(content_type),
            _ => None,
        }
    }

    /// The format whose codec failed, if any.
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::UnsupportedContentType { .. } => None,
            Self::Decode { format, .. } | Self::Encode { format, .. } => Some(*format),
        }
    }

    pub fn is_unsupported_content_type(&self) -> bool {
        matches!(self, Self::UnsupportedContentType { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}
