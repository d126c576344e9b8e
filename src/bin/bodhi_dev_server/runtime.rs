use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use super::*;

const LOG_ENV: &str = "BODHI_DEV_SERVER_LOG";

#[derive(Parser)]
#[command(name = "bodhi-dev-server")]
#[command(about = "In-memory Bodhi release API (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// User allowed to create releases when --dev-password is set
    #[arg(long, default_value = "dev")]
    dev_user: String,

    /// Require this password (HTTP Basic) for writes
    #[arg(long)]
    dev_password: Option<String>,

    /// Known Koji tag; repeat to build the set. Without any, every tag is accepted
    #[arg(long = "koji-tag", value_name = "TAG")]
    koji_tags: Vec<String>,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    bodhi_release::logging::init(LOG_ENV, "info");

    let koji_tags = if args.koji_tags.is_empty() {
        None
    } else {
        Some(args.koji_tags.iter().cloned().collect::<HashSet<_>>())
    };

    let state = Arc::new(AppState {
        dev_user: args.dev_user,
        dev_password: args.dev_password,
        koji_tags,
        releases: RwLock::new(Vec::new()),
        sessions: RwLock::new(HashMap::new()),
    });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    info!("bodhi-dev-server listening on {}", local_addr);

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
