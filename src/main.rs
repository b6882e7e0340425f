use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use hn_upvoted::{
    config::Config,
    credentials::{self, TerminalPrompt},
    export::ensure_writable,
    info_time,
    process::process_site,
    Result,
};
use tracing::{debug, error};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    init_tracing(&config);
    debug!(?config, "configuration resolved");

    let start_time = Local::now();
    match run(args, &config).await {
        Ok(count) => {
            info_time!(start_time, "Done, {} upvoted posts exported", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = Config::new(&args.base_url)?;
    config.delay = Duration::from_millis(args.delay_ms);
    config.output = args.output.clone();
    config.overwrite = args.overwrite;
    config.debug = args.debug;
    Ok(config)
}

/// RUST_LOG wins over --debug.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives(config.debug)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--debug` only opens up this crate. Dependencies stay at info, cookie_store
/// would otherwise print the session cookie.
fn default_directives(debug: bool) -> &'static str {
    if debug {
        "info,hn_upvoted=debug"
    } else {
        "info"
    }
}

async fn run(args: Args, config: &Config) -> Result<usize> {
    // Bail out on an existing file before asking for anything.
    ensure_writable(&config.output, config.overwrite)?;

    let credentials = credentials::resolve(
        args.username,
        args.password,
        credentials::process_env,
        &mut TerminalPrompt,
    )?;

    process_site(config, &credentials).await
}
