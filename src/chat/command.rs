use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/quit", "Exit the chat"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    Quit,
    Unknown(String),
}

/// Input types
///
/// Anything that is not a slash command is a message, including blank input,
/// which the conversation rejects with a validation warning. A leading `//`
/// sends the rest as a message starting with `/`.
#[derive(Debug)]
pub enum Input {
    Message(String),
    Command(SlashCommand),
}

pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if let Some(escaped) = trimmed.strip_prefix("//") {
        return Input::Message(format!("/{escaped}"));
    }

    trimmed.strip_prefix('/').map_or_else(
        || Input::Message(input.to_string()),
        parse_slash_command,
    )
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("history") => Input::Command(SlashCommand::History),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_input_is_a_message() {
        match parse_input("   ") {
            Input::Message(text) => assert_eq!(text, "   "),
            Input::Command(_) => panic!("Expected Input::Message"),
        }
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("Hello, world!") {
            Input::Message(text) => assert_eq!(text, "Hello, world!"),
            Input::Command(_) => panic!("Expected Input::Message"),
        }
    }

    #[test]
    fn test_parse_double_slash_sends_message() {
        match parse_input("//etc/hosts is what?") {
            Input::Message(text) => assert_eq!(text, "/etc/hosts is what?"),
            Input::Command(_) => panic!("Expected Input::Message"),
        }
    }

    #[test]
    fn test_parse_config_command() {
        assert!(matches!(
            parse_input("/config"),
            Input::Command(SlashCommand::Config)
        ));
    }

    #[test]
    fn test_parse_history_command_with_padding() {
        assert!(matches!(
            parse_input("  /history "),
            Input::Command(SlashCommand::History)
        ));
    }

    #[test]
    fn test_parse_quit_commands() {
        for input in ["/quit", "/exit", "/q"] {
            assert!(matches!(
                parse_input(input),
                Input::Command(SlashCommand::Quit)
            ));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/unknown arg") {
            Input::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "unknown arg"),
            _ => panic!("Expected Input::Command(SlashCommand::Unknown)"),
        }
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/h").unwrap();
        assert_eq!(suggestions.len(), 2);

        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/quit"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/history  Show the conversation so far".to_string();
        let completion = completer.get_completion("/hi", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/history".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
