use std::future::IntoFuture as _;

use application::{api, logging, server, Args, Config};
use futures::TryFutureExt as _;
use service::{infra::Rest, Service};
use tokio::net::TcpListener;
use tracing as log;

#[tokio::main]
async fn main() {
    logging::init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        server,
        backend,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    logging::set_max_level(log.level.into());

    log::info!("using clinic backend at `{}`", backend.url);
    let backend = Rest::new(backend.into()).map_err(|e| {
        log::error!("failed to initialize `Rest` backend client: {e}");
    })?;

    let cors = server::cors(&server.cors).map_err(|e| log::error!("{e}"))?;
    let app = server::router(api::schema(), Service::new(backend), cors);

    let listener = TcpListener::bind((server.host.clone(), server.port))
        .await
        .map_err(|e| {
            log::error!(
                "failed to listen on `{}:{}`: {e}",
                server.host,
                server.port,
            );
        })?;

    log::info!("listening on `{}:{}`", server.host, server.port);

    axum::serve(listener, app)
        .into_future()
        .map_err(|e| log::error!("webserver failed: {e}"))
        .await
}
