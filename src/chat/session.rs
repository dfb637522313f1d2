use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::conversation::Conversation;
use super::message::{Message, Role};
use super::ui;
use crate::completion::CompletionClient;
use crate::config::ResolvedConfig;
use crate::ui::{Spinner, is_prompt_cancelled};

/// An interactive chat session in the terminal.
///
/// Owns the session's [`Conversation`] for as long as the REPL runs and
/// re-renders from it after every turn.
pub struct ChatSession {
    config: ResolvedConfig,
    client: CompletionClient,
    conversation: Option<Conversation>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: ResolvedConfig) -> Self {
        let client = CompletionClient::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.model.clone(),
        );
        Self {
            config,
            client,
            conversation: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        Conversation::initialize(&mut self.conversation, self.config.max_history);
        ui::print_header(self.client.model());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask anything, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Message(text) => self.send_and_print(&text).await,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::History => {
                if let Some(conversation) = &self.conversation {
                    ui::print_history(conversation.visible_messages());
                }
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    async fn send_and_print(&mut self, text: &str) {
        if let Err(e) = Conversation::validate_input(text) {
            ui::print_warning(&e.to_string());
            return;
        }

        let conversation = Conversation::initialize(&mut self.conversation, self.config.max_history);

        let spinner = Spinner::new("Thinking...");
        let result = conversation.submit_user_message(&self.client, text).await;
        spinner.stop();

        match result {
            Ok(messages) => {
                if let Some(reply) = latest_reply(messages) {
                    ui::print_message(reply);
                }
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}

/// The assistant reply that closes `messages`, if the sequence ends with one.
fn latest_reply(messages: &[Message]) -> Option<&Message> {
    messages.last().filter(|m| m.role() == Role::Assistant)
}
