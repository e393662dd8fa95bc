//! Middleware that installs a [`NegotiateConfig`] for extractors.
//!
//! [`Negotiated`](crate::Negotiated) and [`AcceptFormat`](crate::AcceptFormat)
//! read the config from request extensions. Without this layer they fall back
//! to the default config (no size limits, JSON as the default format).
//!
//! ```rust,ignore
//! use negotiate_axum::{NegotiateConfig, NegotiateLayer};
//!
//! let app = Router::new()
//!     .route("/orders", post(create_order))
//!     .layer(NegotiateLayer::new(
//!         NegotiateConfig::new().receive_max_bytes(1024 * 1024),
//!     ));
//! ```

use axum::http::Request;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::context::NegotiateConfig;

/// Layer that stores a [`NegotiateConfig`] in every request's extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegotiateLayer {
    config: NegotiateConfig,
}

impl NegotiateLayer {
    /// Create a layer that installs `config`.
    pub fn new(config: NegotiateConfig) -> Self {
        Self { config }
    }

    /// The config this layer installs.
    pub fn config(&self) -> &NegotiateConfig {
        &self.config
    }
}

impl<S> Layer<S> for NegotiateLayer {
    type Service = NegotiateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NegotiateService {
            inner,
            config: self.config,
        }
    }
}

/// Service produced by [`NegotiateLayer`].
#[derive(Debug, Clone)]
pub struct NegotiateService<S> {
    inner: S,
    config: NegotiateConfig,
}

impl<S, B> Service<Request<B>> for NegotiateService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        req.extensions_mut().insert(self.config);
        self.inner.call(req)
    }
}
