use clap::{Parser, Subcommand};
use tierdns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod client;
mod server;
mod table;

#[derive(Parser)]
#[command(name = "tierdns")]
#[command(version)]
#[command(about = "Tiered name-resolution simulator: client, recursive resolver, authoritative server")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address shared by the serving tiers
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Recursive resolver port
    #[arg(long)]
    recursive_port: Option<u16>,

    /// Authoritative server port
    #[arg(long)]
    authoritative_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    role: Role,
}

#[derive(Subcommand)]
enum Role {
    /// Serve the static zone; the terminal tier of every resolution
    Authoritative,
    /// Recursive (local) resolver between clients and the authoritative tier
    Recursive,
    /// Interactive client with its own cache
    Client,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind.clone(),
        recursive_port: cli.recursive_port,
        authoritative_port: cli.authoritative_port,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting tierdns v{}", env!("CARGO_PKG_VERSION"));

    match cli.role {
        Role::Authoritative => server::run_authoritative(&config).await,
        Role::Recursive => server::run_recursive(&config).await,
        Role::Client => client::run(&config).await,
    }
}
