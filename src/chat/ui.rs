//! Chat transcript rendering.

use crate::config::{ResolvedConfig, mask_api_key};
use crate::ui::Style;

use super::message::{Message, Role};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(model: &str) {
    println!(
        "{} {} - {}",
        Style::header("gpt-chat"),
        Style::version(format!("v{VERSION}")),
        Style::value(model)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_message(message: &Message) {
    let tag = match message.role() {
        Role::User => Style::user("you"),
        Role::Assistant => Style::assistant("assistant"),
        Role::System => return,
    };
    println!("{tag}");
    println!("{}", message.content());
    println!();
}

pub fn print_history<'a>(messages: impl Iterator<Item = &'a Message>) {
    let mut any = false;
    for message in messages {
        print_message(message);
        any = true;
    }
    if !any {
        println!("{}", Style::secondary("No messages yet."));
        println!();
    }
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}        {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}  {}",
        Style::label("max history"),
        Style::value(config.max_history)
    );
    println!(
        "  {}      {}",
        Style::label("api key"),
        Style::secondary(mask_api_key(&config.api_key))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/history"),
        Style::secondary("Show the conversation so far")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Exit the chat")
    );
    println!(
        "  {}  {}",
        Style::command("//text"),
        Style::secondary("Send a message that starts with /")
    );
    println!();
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
