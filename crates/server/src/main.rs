use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use streamdex_core::access::{AuthorizationMap, UnknownTagPolicy};
use streamdex_core::config;
use streamdex_core::storage::{MemoryStore, StreamStore};
use streamdex_server::api::create_router;
use streamdex_server::api::handlers::AppState;
use streamdex_server::api::metrics;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "streamdex", about = "Tag-scoped stream metadata query service")]
struct Args {
    /// JSON file mapping each tag to its permitted path prefixes
    tag_definitions: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = config::DEFAULT_BIND)]
    bind: String,

    /// JSON array of stream documents to serve (omit for an empty store)
    #[arg(short, long)]
    documents: Option<PathBuf>,

    /// Tags missing from the definitions grant nothing instead of lifting restrictions
    #[arg(long, default_value_t = false)]
    deny_unknown_tags: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::REQUEST_TIMEOUT_SECS)]
    request_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "streamdex_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "streamdex_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    if args.request_timeout == 0 {
        eprintln!("Error: request_timeout must be > 0");
        std::process::exit(1);
    }

    let authz = AuthorizationMap::from_file(&args.tag_definitions).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Usage: streamdex <tag_definitions.json> [--port <PORT>]");
        std::process::exit(1);
    });
    let policy = if args.deny_unknown_tags {
        UnknownTagPolicy::Deny
    } else {
        UnknownTagPolicy::Allow
    };
    let authz = authz.with_unknown_tag_policy(policy);

    let store = match &args.documents {
        Some(path) => MemoryStore::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => {
            tracing::warn!("No --documents given, serving an empty store");
            MemoryStore::new()
        }
    };
    let document_count = store.len();

    let prometheus_handle =
        metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;
    metrics::set_store_documents(document_count);

    let state = AppState {
        authz: Arc::new(authz),
        store: Arc::new(store),
        prometheus_handle,
        request_timeout: Duration::from_secs(args.request_timeout),
    };

    let app = create_router(state);
    let addr = format!("{}:{}", args.bind, args.port);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %addr,
        tag_definitions = %args.tag_definitions.display(),
        unknown_tag_policy = ?policy,
        documents = document_count,
        "streamdex ready"
    );
    tracing::info!(
        "Tag grants held in the account store are not consulted; \
         only tags present in the definitions file restrict access"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
