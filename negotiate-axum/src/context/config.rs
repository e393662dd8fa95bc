//! Application-owned configuration for binding and sending.
//!
//! Built once by the application and passed by reference (or installed with
//! [`NegotiateLayer`](crate::NegotiateLayer)). There is no process-wide
//! default instance to initialize.

use negotiate_axum_core::Format;

use crate::context::MessageLimits;

/// Configuration for [`bind`](NegotiateConfig::bind) and
/// [`send`](NegotiateConfig::send).
///
/// # Example
///
/// ```rust
/// use negotiate_axum::{Format, NegotiateConfig};
///
/// let config = NegotiateConfig::new()
///     .receive_max_bytes(1024 * 1024)
///     .default_format(Format::MsgPack);
/// assert_eq!(config.get_default_format(), Format::MsgPack);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NegotiateConfig {
    /// Body size limits
    limits: MessageLimits,
    /// Response format when the client states no usable preference
    default_format: Format,
}

impl NegotiateConfig {
    /// Create a config with no limits and JSON as the default response format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the body size limits.
    pub fn limits(mut self, limits: MessageLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum request body size.
    pub fn receive_max_bytes(mut self, max: usize) -> Self {
        self.limits = self.limits.receive_max_bytes(max);
        self
    }

    /// Set the maximum encoded response body size.
    pub fn send_max_bytes(mut self, max: usize) -> Self {
        self.limits = self.limits.send_max_bytes(max);
        self
    }

    /// Set the response format used when `Accept` names nothing supported.
    pub fn default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    pub fn get_limits(&self) -> MessageLimits {
        self.limits
    }

    pub fn get_default_format(&self) -> Format {
        self.default_format
    }
}
