use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gpt-chat")]
#[command(about = "Minimal interactive chat for OpenAI-compatible completion endpoints")]
#[command(version)]
pub struct Args {
    /// Path to config.json (defaults to ~/.config/gpt-chat/config.json)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Number of messages kept in the conversation, system message included (minimum 3)
    #[arg(long, value_parser = clap::value_parser!(u64).range(3..))]
    pub max_history: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
