use {
    clap::Parser,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "snoochat", about = "snoochat — subreddit-scoped chat assistant")]
struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1", env = "SNOOCHAT_BIND")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 5000, env = "SNOOCHAT_PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap resolves env-backed arguments.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    info!(bind = %cli.bind, port = cli.port, "snoochat starting");
    snoochat_gateway::server::start_gateway(&cli.bind, cli.port).await
}
