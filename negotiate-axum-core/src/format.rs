//! Wire formats and Content-Type resolution.
//!
//! [`Format`] is the closed set of body encodings. Every operation that needs
//! to pick a codec matches on it, so adding a variant is a compile error until
//! every dispatch site handles it.

use std::fmt;
use std::str::FromStr;

use http::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{BsonCodec, Codec, JsonCodec, MsgPackCodec};
use crate::error::CodecError;

/// Content-Type token for JSON bodies.
pub const APPLICATION_JSON: &str = "application/json";
/// Content-Type token for BSON bodies.
pub const APPLICATION_BSON: &str = "application/x-bson";
/// Content-Type token for MessagePack bodies.
pub const APPLICATION_MSGPACK: &str = "application/x-msgpack";

/// All recognized Content-Type tokens, in [`Format::ALL`] order.
pub const SUPPORTED_CONTENT_TYPES: &[&str] =
    &[APPLICATION_JSON, APPLICATION_BSON, APPLICATION_MSGPACK];

/// Body encoding selected by a Content-Type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-bson`
    Bson,
    /// `application/x-msgpack`
    MsgPack,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 3] = [Format::Json, Format::Bson, Format::MsgPack];

    /// Resolve a Content-Type header value.
    ///
    /// Media type parameters (`; charset=utf-8`) and surrounding whitespace are
    /// ignored and the media type is compared case-insensitively. The error
    /// carries the raw value unchanged.
    pub fn from_content_type(content_type: &str) -> Result<Self, CodecError> {
        let media_type = content_type
            .split_once(';')
            .map_or(content_type, |(media, _)| media)
            .trim();

        Self::ALL
            .into_iter()
            .find(|format| media_type.eq_ignore_ascii_case(format.content_type()))
            .ok_or_else(|| CodecError::unsupported(content_type))
    }

    /// Canonical Content-Type token for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => APPLICATION_JSON,
            Self::Bson => APPLICATION_BSON,
            Self::MsgPack => APPLICATION_MSGPACK,
        }
    }

    /// Content-Type token as a header value.
    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_static(self.content_type())
    }

    /// Short lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Bson => "bson",
            Self::MsgPack => "msgpack",
        }
    }

    /// Encode a value with this format's codec.
    pub fn encode<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize,
    {
        match self {
            Self::Json => JsonCodec.encode(value),
            Self::Bson => BsonCodec.encode(value),
            Self::MsgPack => MsgPackCodec.encode(value),
        }
    }

    /// Decode bytes with this format's codec.
    pub fn decode<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Json => JsonCodec.decode(bytes),
            Self::Bson => BsonCodec.decode(bytes),
            Self::MsgPack => MsgPackCodec.decode(bytes),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_content_type(s)
    }
}

impl From<Format> for HeaderValue {
    fn from(format: Format) -> Self {
        format.header_value()
    }
}

/// Pick a response format from an `Accept` header.
///
/// Entries are walked in header order and the first recognized media type
/// wins. Quality values do not reorder entries: `q=0` only excludes one, so
/// `application/json;q=0.1, application/x-msgpack;q=0.9` picks JSON.
/// `*/*` and `application/*` resolve to `fallback`, as does a missing or
/// fully unrecognized header.
pub fn negotiate_response_format(accept: Option<&str>, fallback: Format) -> Format {
    let Some(accept) = accept else {
        return fallback;
    };

    for entry in accept.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (media_type, q_value) = match entry.split_once(';') {
            Some((media, params)) => {
                let q = params.split(';').find_map(|p| p.trim().strip_prefix("q="));
                (media.trim(), q)
            }
            None => (entry, None),
        };

        if let Some(q) = q_value
            && q.trim().parse::<f32>().is_ok_and(|q| q <= 0.0)
        {
            continue;
        }

        if media_type == "*/*" || media_type.eq_ignore_ascii_case("application/*") {
            return fallback;
        }

        if let Ok(format) = Format::from_content_type(media_type) {
            return format;
        }
    }

    fallback
}
