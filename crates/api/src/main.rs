use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    joyeria_observability::init();

    let services = joyeria_api::app::services::build_services().await;
    let app = joyeria_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .context("failed to bind 0.0.0.0:3000")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
