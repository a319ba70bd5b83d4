use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Arc::new(Args::parse());
    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("FoodChain API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
