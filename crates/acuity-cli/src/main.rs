use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use acuity_cli::config::{self, LogFormat};
use acuity_cli::{Cli, commands};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let dir = config::config_dir()?;

    // Tracing comes up before any config load so migration logs are kept.
    // A broken config only costs the log-format preference here; the
    // commands that need the config report the real error.
    let hint = config::log_format_hint(&dir);
    init_tracing(cli.log_json || matches!(hint, Ok(Some(LogFormat::Json))));
    if let Err(e) = &hint {
        tracing::warn!(error = %e, "ignoring log_format from unreadable config");
    }

    let output = commands::run(cli.command, &dir)?;
    if let Some(banner) = &output.banner {
        eprintln!("{banner}");
    }
    println!("{}", output.stdout);

    Ok(())
}

// Logs go to stderr; stdout carries the JSON output.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
