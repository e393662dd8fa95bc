//! Extractors for negotiated requests.
use crate::context::{MessageLimits, NegotiateConfig, config_from_extensions};
use crate::error::NegotiateError;
use crate::message::NegotiatedResponse;
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
};
use negotiate_axum_core::{Format, negotiate_response_format};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};

// Flag to ensure we only log the missing layer warning once per process
static WARNED_MISSING_LAYER: AtomicBool = AtomicBool::new(false);

/// Get the config installed by `NegotiateLayer`, or the default one.
fn config_or_default<B>(req: &axum::http::Request<B>) -> NegotiateConfig {
    if let Some(config) = config_from_extensions(req.extensions()) {
        return config;
    }

    if !WARNED_MISSING_LAYER.swap(true, Ordering::Relaxed) {
        tracing::warn!(
            target: "negotiate_axum",
            "NegotiateLayer not found. Using default config with no body size limits."
        );
    }

    NegotiateConfig::default()
}

/// Extractor that binds the request body according to its `Content-Type`.
///
/// An empty body yields `T::default()`. Rejections are [`NegotiateError`],
/// which render as JSON error responses (415 for an unsupported content
/// type, 400 for undecodable bytes, 413 for oversized bodies).
///
/// ```ignore
/// async fn create(Negotiated(order): Negotiated<Order>) -> StatusCode {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Negotiated<T>(pub T);

impl<T> Negotiated<T> {
    /// Extract the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Negotiated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = NegotiateError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let config = config_or_default(&req);
        let mut value = T::default();
        config.bind(req, &mut value).await?;
        Ok(Negotiated(value))
    }
}

/// The response format negotiated from the request's `Accept` header.
///
/// Falls back to the configured default format. Carries the configured
/// limits so responses built from it respect the send limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptFormat {
    format: Format,
    limits: MessageLimits,
}

impl AcceptFormat {
    /// Negotiate from request parts.
    pub fn from_parts(parts: &Parts) -> Self {
        let config = config_from_extensions(&parts.extensions).unwrap_or_default();
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok());

        Self {
            format: negotiate_response_format(accept, config.get_default_format()),
            limits: config.get_limits(),
        }
    }

    /// The negotiated format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Build a `200 OK` response with `value` in the negotiated format.
    pub fn respond<T>(&self, value: T) -> NegotiatedResponse<T> {
        NegotiatedResponse::new(self.format, value).limits(self.limits)
    }

    /// Build a bodyless response in the negotiated format.
    pub fn respond_empty<T>(&self) -> NegotiatedResponse<T> {
        NegotiatedResponse::empty(self.format).limits(self.limits)
    }
}

impl<S> FromRequestParts<S> for AcceptFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Ping {
        seq: i32,
    }

    #[tokio::test]
    async fn test_negotiated_extracts_msgpack() {
        let bytes = Format::MsgPack
            .encode(&serde_json::json!({ "seq": 5 }))
            .unwrap();
        let req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-msgpack")
            .body(Body::from(bytes))
            .unwrap();

        let Negotiated(ping) = Negotiated::<Ping>::from_request(req, &()).await.unwrap();
        assert_eq!(ping, Ping { seq: 5 });
    }

    #[tokio::test]
    async fn test_negotiated_empty_body_is_default() {
        let req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::empty())
            .unwrap();

        let Negotiated(ping) = Negotiated::<Ping>::from_request(req, &()).await.unwrap();
        assert_eq!(ping, Ping::default());
    }

    #[tokio::test]
    async fn test_negotiated_uses_config_from_extensions() {
        let mut req = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"seq":123456}"#))
            .unwrap();
        req.extensions_mut()
            .insert(NegotiateConfig::new().receive_max_bytes(4));

        let err = Negotiated::<Ping>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_accept_format_default() {
        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert_eq!(AcceptFormat::from_parts(&parts).format(), Format::Json);
    }

    #[test]
    fn test_accept_format_header() {
        let (parts, _) = Request::builder()
            .header(header::ACCEPT, "application/x-bson, application/json;q=0.5")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(AcceptFormat::from_parts(&parts).format(), Format::Bson);
    }

    #[test]
    fn test_accept_format_configured_fallback() {
        let (mut parts, _) = Request::builder()
            .header(header::ACCEPT, "*/*")
            .body(())
            .unwrap()
            .into_parts();
        parts
            .extensions
            .insert(NegotiateConfig::new().default_format(Format::MsgPack));
        assert_eq!(AcceptFormat::from_parts(&parts).format(), Format::MsgPack);
    }
}
