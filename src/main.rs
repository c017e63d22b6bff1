use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::cli::{parse_args, run_command, CliCommand, USAGE, VERSION};
use folio::config::ClientConfig;
use folio::portfolio::Portfolio;

/// Log filter variable, checked before `RUST_LOG`.
const LOG_ENV: &str = "FOLIO_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("folio=info"));

    // stdout carries the rendered content
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Handle client-free commands before any initialization
    let command = parse_args(std::env::args());
    match &command {
        CliCommand::Version => {
            println!("folio {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        _ => {}
    }

    color_eyre::install()?;
    init_tracing();

    let config = ClientConfig::from_env()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let portfolio = Portfolio::from_config(config)?;
        run_command(&portfolio, command).await
    })
}
