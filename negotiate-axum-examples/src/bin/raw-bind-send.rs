use axum::{
    Router,
    body::Body,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use negotiate_axum::{NegotiateConfig, NegotiateError, request_format};
use negotiate_axum_examples::{Order, Receipt, init_tracing, server_addr};

// Echoes the order back as a receipt in the same format it arrived in,
// driving bind/send by hand instead of through the extractors.
async fn echo_order(req: Request) -> Response {
    match handle(req).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn handle(req: Request) -> Result<Response, NegotiateError> {
    let config = NegotiateConfig::new().receive_max_bytes(64 * 1024);
    let reply_format = request_format(req.headers()).unwrap_or_default();

    let mut order = Order::default();
    config.bind(req, &mut order).await?;

    let mut response = Response::new(Body::empty());
    config.send_format(
        &mut response,
        StatusCode::OK,
        Some(&Receipt::from(order)),
        reply_format,
    )?;
    Ok(response)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app = Router::new().route("/echo", post(echo_order));

    let addr = server_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "raw bind/send server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
