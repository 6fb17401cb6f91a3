use std::collections::HashMap;

use strsim::levenshtein;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Offers values for the next argument, given the arguments typed so far.
pub type ArgumentCompleter = fn(&[&str]) -> Vec<&'static str>;

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A shell command: help text, handler and argument completion.
#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
    completer: Option<ArgumentCompleter>,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
            completer: None,
        }
    }

    pub fn with_completer(mut self, completer: ArgumentCompleter) -> Self {
        self.completer = Some(completer);
        self
    }

    pub fn complete_argument(&self, typed: &[&str]) -> Vec<&'static str> {
        self.completer
            .map(|completer| completer(typed))
            .unwrap_or_default()
    }
}

/// Commands keyed by name, in registration order for `help`.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    /// Values for the word after `words`: sorted command names for the first
    /// word, otherwise whatever the named command offers.
    pub fn completions(&self, words: &[&str]) -> Vec<&'static str> {
        match words.split_first() {
            None => {
                let mut names: Vec<&'static str> = self.names().collect();
                names.sort_unstable();
                names
            }
            Some((command, typed)) => self
                .get(&command.to_ascii_lowercase())
                .map(|entry| entry.complete_argument(typed))
                .unwrap_or_default(),
        }
    }

    /// Closest registered name within a small edit distance of `input`.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &needle), name))
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}
