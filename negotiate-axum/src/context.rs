//! Configuration types for binding and sending.
//!
//! [`NegotiateConfig`] is created by the application and either passed to
//! [`NegotiateConfig::bind`]/[`NegotiateConfig::send`] directly or stored in
//! request extensions by [`NegotiateLayer`](crate::NegotiateLayer).

pub mod config;
pub mod limit;

pub use config::NegotiateConfig;
pub use limit::MessageLimits;

use axum::http::Extensions;

/// Get the config stored by the layer, if any.
pub(crate) fn config_from_extensions(extensions: &Extensions) -> Option<NegotiateConfig> {
    extensions.get::<NegotiateConfig>().copied()
}
