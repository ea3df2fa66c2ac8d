use clap::Parser;
use contacts_server::http;
use contacts_server::service::AppState;
use contacts_store_adapters::FileStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "contacts-server")]
struct Args {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "CONTACTS_HTTP_ADDR", default_value = "0.0.0.0:4000")]
    http_addr: String,

    /// Directory holding the contacts.json backing file.
    #[arg(long, env = "CONTACTS_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    setup_tracing();
    let args = Args::parse();

    let store = Arc::new(FileStore::new(&args.data_dir));
    let app = axum::Router::new()
        .merge(http::health_routes())
        .merge(http::contact_routes())
        .with_state(AppState { store });

    let listener = tokio::net::TcpListener::bind(&args.http_addr)
        .await
        .expect("failed to bind http listener");

    tracing::info!(
        addr = %args.http_addr,
        data_dir = %args.data_dir.display(),
        "contacts api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("http server crashed");
}
