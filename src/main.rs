//! Cubana back-office main entry point

use clap::Parser;
use cubana_api::start_server;
use cubana_client::{ApiClient, FileTokenStore, Session};
use cubana_config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "cubana")]
#[command(version = "0.1.0")]
#[command(about = "Back-office service for the Cubana Express remittance platform", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = Config::load(args.config.clone()).expect("Failed to load configuration");

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    let rt = Runtime::new()?;

    rt.block_on(async {
        eprintln!(
            "[INFO] Config loaded: upstream={}, listen={}:{}",
            config.upstream.base_url, config.server.host, config.server.port
        );

        let store = Arc::new(FileTokenStore::new(config.upstream.auth_file.clone()));
        let session = Arc::new(Session::new(store));
        match session.restore().await {
            Ok(true) => eprintln!("[INFO] Restored persisted session"),
            Ok(false) => eprintln!("[INFO] No persisted session, log in via /api/auth/login"),
            Err(e) => eprintln!("[WARN] Failed to restore session: {}", e),
        }

        let upstream = ApiClient::new(
            &config.upstream.base_url,
            Duration::from_secs(config.upstream.timeout_secs),
            session,
        );

        start_server(config, upstream).await
    })?;

    Ok(())
}
