//! HTTP wrapper around the extraction engine
//!
//! Thin plumbing: validate the request body, hand the text and format hint to
//! the engine, relay its result. The engine itself has no network surface and
//! the server holds no state of its own.

pub mod error;
pub mod routes;

/// Binds the listener and serves the extraction API until shutdown.
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let app = routes::create_router();

    let addr = format!("{host}:{port}");
    tracing::info!("snipsmart listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
