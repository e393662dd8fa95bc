//! Core wire-format types for negotiate-axum.
//!
//! This crate holds everything that does not depend on axum: the set of
//! supported body encodings and the codecs behind them.
//!
//! ## Modules
//!
//! - [`format`]: The closed [`Format`] enum and Content-Type parsing
//! - [`codec`]: The [`Codec`] trait and the JSON, BSON and MessagePack codecs
//! - [`error`]: Codec error types

pub mod codec;
pub mod error;
pub mod format;

pub use codec::*;
pub use error::*;
pub use format::*;
