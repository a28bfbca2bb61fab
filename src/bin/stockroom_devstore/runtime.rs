use std::net::SocketAddr;
use std::path::PathBuf;

use axum::routing::{get, post};
use clap::Parser;

use super::*;

#[derive(Parser)]
#[command(name = "stockroom-devstore")]
#[command(about = "Development Admin GraphQL endpoint for stockroom", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8090")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Access token clients must send
    #[arg(long, default_value = "dev")]
    token: String,

    /// Answer productCreate with a top-level error instead of data
    #[arg(long)]
    fail_product_create: bool,

    /// Create products without their default variant
    #[arg(long)]
    no_default_variant: bool,

    /// Reject every productVariantUpdate with a user error
    #[arg(long)]
    fail_variant_update: bool,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    stockroom::logging::init_stderr("info");

    let state = Arc::new(AppState {
        token: args.token.clone(),
        faults: Faults {
            fail_product_create: args.fail_product_create,
            no_default_variant: args.no_default_variant,
            fail_variant_update: args.fail_variant_update,
        },
        store: RwLock::new(Store::seeded()),
    });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/admin/api/:version/graphql.json", post(graphql))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(%local_addr, "stockroom-devstore listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
