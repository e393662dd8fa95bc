//! Body size limits for binding requests and sending responses.
//!
//! # Receive vs Send Limits
//!
//! - **Receive limit** (`receive_max_bytes`): Limits incoming request bodies.
//!   Prevents clients from sending oversized requests that could exhaust memory.
//!
//! - **Send limit** (`send_max_bytes`): Limits encoded response bodies.
//!   Checked after encoding and before anything is written to the response.

use crate::error::NegotiateError;

/// Configuration for body size limits.
///
/// By default, no limits are applied. Use the builder methods to set limits.
///
/// # Example
///
/// ```rust
/// use negotiate_axum::MessageLimits;
///
/// // Set receive limit only
/// let limits = MessageLimits::new().receive_max_bytes(4 * 1024 * 1024);
///
/// // Set both receive and send limits
/// let limits = MessageLimits::new()
///     .receive_max_bytes(16 * 1024 * 1024)
///     .send_max_bytes(8 * 1024 * 1024);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageLimits {
    /// Maximum size of incoming bodies in bytes.
    receive_max_bytes: Option<usize>,
    /// Maximum size of outgoing bodies in bytes.
    send_max_bytes: Option<usize>,
}

impl MessageLimits {
    /// Create new limits with no restrictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum size for incoming (receive) bodies.
    pub fn receive_max_bytes(mut self, max: usize) -> Self {
        self.receive_max_bytes = Some(max);
        self
    }

    /// Set the maximum size for outgoing (send) bodies.
    pub fn send_max_bytes(mut self, max: usize) -> Self {
        self.send_max_bytes = Some(max);
        self
    }

    /// Returns the maximum receive body size, or `None` if unlimited.
    pub fn get_receive_max_bytes(&self) -> Option<usize> {
        self.receive_max_bytes
    }

    /// Returns the maximum send body size, or `None` if unlimited.
    pub fn get_send_max_bytes(&self) -> Option<usize> {
        self.send_max_bytes
    }

    /// Check an incoming body size against the receive limit.
    pub fn check_receive_size(&self, size: usize) -> Result<(), NegotiateError> {
        if let Some(max) = self.receive_max_bytes
            && size > max
        {
            return Err(NegotiateError::RequestTooLarge { max });
        }
        Ok(())
    }

    /// Check an encoded body size against the send limit.
    pub fn check_send_size(&self, size: usize) -> Result<(), NegotiateError> {
        if let Some(max) = self.send_max_bytes
            && size > max
        {
            return Err(NegotiateError::ResponseTooLarge { size, max });
        }
        Ok(())
    }
}
