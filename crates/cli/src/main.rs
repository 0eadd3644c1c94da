use clap::Parser;
use ferrous_blacklist_api::AppState;
use ferrous_blacklist_application::use_cases::LookupHostUseCase;
use ferrous_blacklist_domain::CliOverrides;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod errors;
mod server;

use errors::{StartupError, EXIT_CONFIG};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "ferrous-blacklist")]
#[command(version)]
#[command(about = "Ferrous Blacklist - HTTP hostname blacklist lookup service")]
struct Cli {
    /// Blacklist file (newline-delimited hostnames)
    #[arg(long, value_name = "FILE", default_value = "")]
    blacklist: String,

    /// Load the blacklist from etcd instead of a file; exits with code 1 if --blacklist is also set
    #[arg(long)]
    etcd: bool,

    /// etcd client URL (repeatable)
    #[arg(long = "etcd-endpoint", value_name = "URL")]
    etcd_endpoints: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            blacklist_file: Some(self.blacklist.clone()).filter(|f| !f.is_empty()),
            etcd: self.etcd,
            etcd_endpoints: self.etcd_endpoints.clone(),
            port: self.port,
            bind_address: self.bind.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_CONFIG)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides());

    let log_level = match &config {
        Ok(config) => config.logging.level.clone(),
        Err(_) => cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
    };
    bootstrap::init_logging(&log_level);

    let config = config?;

    info!("Starting Ferrous Blacklist v{}", env!("CARGO_PKG_VERSION"));

    let source = config.blacklist_source()?;
    let blacklist = bootstrap::load_blacklist(&source).await?;

    let app_state = AppState {
        lookup: Arc::new(LookupHostUseCase::new(blacklist)),
    };

    server::start_web_server(&config.server.listen_address(), app_state).await
}
