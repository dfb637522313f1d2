use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gpt_chat::cli::Args;
use gpt_chat::cli::commands::chat::{self, ChatOptions};
use gpt_chat::ui::Style;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = ChatOptions {
        config: args.config,
        endpoint: args.endpoint,
        model: args.model,
        max_history: args
            .max_history
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
    };

    let config = match chat::load_session_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", Style::error("Error:"));
            let code = if e.is_fatal() {
                exitcode::CONFIG
            } else {
                exitcode::SOFTWARE
            };
            std::process::exit(code);
        }
    };

    chat::run_chat(config).await
}
