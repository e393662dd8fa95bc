use axum::{Router, http::StatusCode, routing::post};
use negotiate_axum::prelude::*;
use negotiate_axum_examples::{Order, Receipt, init_tracing, server_addr};

// Accepts JSON, BSON or MessagePack and answers in whatever `Accept` asks for.
async fn create_order(
    accept: AcceptFormat,
    Negotiated(order): Negotiated<Order>,
) -> NegotiatedResponse<Receipt> {
    if order.id.is_empty() {
        return accept.respond_empty().with_status(StatusCode::BAD_REQUEST);
    }

    tracing::info!(order_id = %order.id, format = %accept.format(), "order accepted");
    accept
        .respond(Receipt::from(order))
        .with_status(StatusCode::CREATED)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = NegotiateConfig::new()
        .receive_max_bytes(1024 * 1024)
        .send_max_bytes(1024 * 1024);

    let app = Router::new()
        .route("/orders", post(create_order))
        .layer(NegotiateLayer::new(config));

    let addr = server_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "orders server listening");
    tracing::info!("  POST /orders with Content-Type application/json, application/x-bson or application/x-msgpack");

    axum::serve(listener, app).await?;
    Ok(())
}
