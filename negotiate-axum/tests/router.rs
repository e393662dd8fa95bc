use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
    routing::post,
};
use http_body_util::BodyExt;
use negotiate_axum::prelude::*;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Order {
    id: String,
    items: Vec<String>,
    total_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Receipt {
    order_id: String,
    item_count: i32,
}

async fn create_order(
    accept: AcceptFormat,
    Negotiated(order): Negotiated<Order>,
) -> NegotiatedResponse<Receipt> {
    if order.id.is_empty() {
        return accept.respond_empty();
    }
    accept
        .respond(Receipt {
            order_id: order.id,
            item_count: order.items.len() as i32,
        })
        .with_status(StatusCode::CREATED)
}

fn app(config: NegotiateConfig) -> Router {
    Router::new()
        .route("/orders", post(create_order))
        .layer(NegotiateLayer::new(config))
}

fn order() -> Order {
    Order {
        id: "o-1".to_string(),
        items: vec!["apple".to_string(), "pear".to_string()],
        total_cents: 450,
    }
}

fn post_order(content_type: &str, accept: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/orders")
        .header(header::CONTENT_TYPE, content_type);
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    builder.body(body.into()).unwrap()
}

async fn read_body(response: Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_every_request_format_to_every_response_format() {
    let expected = Receipt {
        order_id: "o-1".to_string(),
        item_count: 2,
    };

    for request_format in Format::ALL {
        for response_format in Format::ALL {
            let body = request_format.encode(&order()).unwrap();
            let req = post_order(
                request_format.content_type(),
                Some(response_format.content_type()),
                body,
            );

            let response = app(NegotiateConfig::new()).oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            assert_eq!(content_type(&response), response_format.content_type());

            let bytes = read_body(response).await;
            let receipt: Receipt = response_format.decode(&bytes).unwrap();
            assert_eq!(receipt, expected, "{request_format} -> {response_format}");
        }
    }
}

#[tokio::test]
async fn test_empty_body_binds_default() {
    let req = post_order("application/json", None, Body::empty());
    let response = app(NegotiateConfig::new()).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(content_type(&response), "application/json");
    assert!(read_body(response).await.is_empty());
}

#[tokio::test]
async fn test_unsupported_content_type_is_415() {
    let req = post_order("text/plain", None, "id=o-1");
    let response = app(NegotiateConfig::new()).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(json["code"], "unsupported_content_type");
    assert!(json["message"].as_str().unwrap().contains("text/plain"));
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let req = post_order("application/json", None, r#"{"a":}"#);
    let response = app(NegotiateConfig::new()).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(json["code"], "decode_error");
}

#[tokio::test]
async fn test_receive_limit_is_413() {
    let body = serde_json::to_vec(&order()).unwrap();
    let req = post_order("application/json", None, body);
    let response = app(NegotiateConfig::new().receive_max_bytes(16))
        .oneshot(req)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_send_limit_is_500() {
    let body = serde_json::to_vec(&order()).unwrap();
    let req = post_order("application/json", Some("application/json"), body);
    let response = app(NegotiateConfig::new().send_max_bytes(8))
        .oneshot(req)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(json["message"], "internal error");
}

#[tokio::test]
async fn test_configured_default_format_for_wildcard_accept() {
    let body = serde_json::to_vec(&order()).unwrap();
    let req = post_order("application/json", Some("*/*"), body);
    let response = app(NegotiateConfig::new().default_format(Format::MsgPack))
        .oneshot(req)
        .await
        .unwrap();
    assert_eq!(content_type(&response), "application/x-msgpack");

    let receipt: Receipt = rmp_serde::from_slice(&read_body(response).await).unwrap();
    assert_eq!(receipt.order_id, "o-1");
}

#[tokio::test]
async fn test_bson_body_matches_bson_crate() {
    let body = bson::to_vec(&order()).unwrap();
    let req = post_order("application/x-bson", Some("application/x-bson"), body);
    let response = app(NegotiateConfig::new()).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let receipt: Receipt = bson::from_slice(&read_body(response).await).unwrap();
    assert_eq!(receipt.item_count, 2);
}
