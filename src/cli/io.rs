use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;

/// True when stdin and stdout are both attached to a terminal.
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt for text until `validate` accepts it.
pub fn prompt_validated<F>(
    theme: &ColorfulTheme,
    prompt: &str,
    validate: F,
) -> Result<String, CommandError>
where
    F: Fn(&str) -> Result<(), String> + 'static,
{
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(move |value: &String| validate(value))
        .interact_text()
        .map_err(CommandError::from)
}

/// Let the user pick one of `items`; `None` when the selection is cancelled.
pub fn select_index(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
