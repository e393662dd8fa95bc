//! Body codecs.
//!
//! This module provides the [`Codec`] trait and one implementation per
//! [`Format`]:
//! - [`JsonCodec`]: `serde_json`
//! - [`BsonCodec`]: `bson`
//! - [`MsgPackCodec`]: `rmp-serde`
//!
//! Callers normally go through [`Format::encode`] and [`Format::decode`],
//! which dispatch to the codec matching the variant.

use std::io::Cursor;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;
use crate::format::Format;

/// A paired encode/decode for one wire format.
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// The format this codec implements.
    fn format(&self) -> Format;

    /// Encode a serializable value into bytes.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decode bytes into a deserializable value.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// JSON codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::encode(Format::Json, e))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::decode(Format::Json, e))
    }
}

/// BSON codec.
///
/// BSON can only hold a document at the top level, so the value must
/// serialize as a struct or a map.
#[derive(Debug, Clone, Copy, Default)]
pub struct BsonCodec;

impl Codec for BsonCodec {
    fn format(&self) -> Format {
        Format::Bson
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        bson::to_vec(value).map_err(|e| CodecError::encode(Format::Bson, e))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        bson::from_slice(bytes).map_err(|e| CodecError::decode(Format::Bson, e))
    }
}

/// MessagePack codec.
///
/// Structs are written as maps keyed by field name so that peers which
/// decode by name can read them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackCodec;

impl Codec for MsgPackCodec {
    fn format(&self) -> Format {
        Format::MsgPack
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        rmp_serde::to_vec_named(value).map_err(|e| CodecError::encode(Format::MsgPack, e))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let mut reader = Cursor::new(bytes);
        let value =
            rmp_serde::from_read(&mut reader).map_err(|e| CodecError::decode(Format::MsgPack, e))?;

        // from_read stops after the first value; the body must hold exactly one.
        let consumed = reader.position() as usize;
        if consumed != bytes.len() {
            return Err(CodecError::decode(
                Format::MsgPack,
                format!("{} trailing bytes after value", bytes.len() - consumed),
            ));
        }
        Ok(value)
    }
}
