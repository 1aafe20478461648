use anyhow::Context;
use orderdesk_core::config::Config;
use orderdesk_core::store::RecordStore;

pub fn run(config: &Config, store: RecordStore) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let addr = config.server.bind_addr();

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let actual_port = listener.local_addr()?.port();

        println!(
            "orderdesk serving {} orders and {} customers at http://localhost:{actual_port}",
            store.orders.len(),
            store.customers.len(),
        );

        orderdesk_server::serve_on(listener, store, shutdown_signal()).await
    })
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server runs until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await
        }
    }
}
