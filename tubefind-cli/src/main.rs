//! Tubefind CLI - starts the search web server
//!
//! Configuration comes from the environment (and `.env`); flags given on the
//! command line take precedence.

use std::path::PathBuf;

use clap::Parser;
use tubefind_core::{CliLogLevel, TubefindConfig, init_tracing};

#[derive(Parser)]
#[command(name = "tubefind")]
#[command(about = "A web front end for YouTube video search")]
#[command(version)]
struct Cli {
    /// Host to bind to (overrides TUBEFIND_HOST)
    #[arg(long)]
    host: Option<String>,
    /// Port to bind to (overrides TUBEFIND_PORT)
    #[arg(short, long)]
    port: Option<u16>,
    /// Console log level; RUST_LOG takes precedence
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,
    /// Directory for the per-run debug log
    #[arg(long)]
    logs_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self, mut config: TubefindConfig) -> TubefindConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Loads .env before the subscriber reads RUST_LOG
    let env_config = TubefindConfig::from_env();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let config = cli.into_config(env_config);
    tubefind_web::run_server(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["tubefind", "--host", "0.0.0.0", "-p", "8080"]);
        assert_eq!(cli.log_level, CliLogLevel::Info);

        let config = cli.into_config(TubefindConfig::default());

        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let cli = Cli::parse_from(["tubefind", "--log-level", "debug"]);
        assert_eq!(cli.log_level, CliLogLevel::Debug);

        let config = cli.into_config(TubefindConfig::default());

        assert_eq!(config.server.port, 3000);
    }
}
