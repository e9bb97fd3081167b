use std::sync::Arc;

use anyhow::Context as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use server::{GRAPHQL_PATH, make_app};
use store::Store;

mod config;
mod datamodel;
mod server;
mod store;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(Store::seeded());
    let app = make_app(store, &config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(graphiql = config.graphiql, "listening on http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
