//! Core CLI loop, dispatch, and shell context helpers.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use dialoguer::theme::ColorfulTheme;
use shiftbook_config::{Config, ConfigError, ConfigManager};
use shiftbook_core::{
    calendar_markers, format_hours, format_income, format_totals, graph_series, Clock,
    CoreError, EntryLedger, EntryStore,
};
use shiftbook_domain::{TimeEntry, ViewMode};
use shiftbook_storage_json::JsonEntryStore;

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
use super::system_clock::SystemClock;
use super::ui::{
    terminal_width, CalendarMonth, CalendarRenderer, GraphRenderer, Table, TableColumn,
    TableRenderer, UiStyle,
};
pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::{AppError, CliError};

const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    /// Loads configuration from the default location and opens the
    /// file-backed ledger it points at.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let store = open_store(&config, config_manager.base_dir())?;
        let data_path = Some(store.path().to_path_buf());
        Ok(Self::with_parts(
            mode,
            config_manager,
            config,
            Box::new(store),
            data_path,
            Arc::new(SystemClock),
        ))
    }

    pub(crate) fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        store: Box<dyn EntryStore>,
        data_path: Option<PathBuf>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        output::set_preferences(OutputPreferences::detect(config.ui_color_enabled));

        let ledger = EntryLedger::open(store, Arc::clone(&clock));
        Self {
            mode,
            registry,
            ledger,
            clock,
            view: config.default_view,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            data_path,
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        format!("shiftbook [{}]> ", self.view)
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive && cli_io::is_interactive_terminal()
    }

    pub(crate) fn currency(&self) -> &str {
        &self.config.currency
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one line of input.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        self.last_command = Some(line.trim().to_string());
        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.closest(input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if !self.can_prompt() {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn apply_preferences(&self) {
        output::set_preferences(OutputPreferences::detect(self.config.ui_color_enabled));
    }

    /// Reopens the ledger from the currently configured data directory.
    /// Opens the data file `config` points at without touching the current ledger.
    pub(crate) fn open_store_for(&self, config: &Config) -> Result<JsonEntryStore, CommandError> {
        Ok(open_store(config, self.config_manager.base_dir())?)
    }

    pub(crate) fn switch_store(&mut self, store: JsonEntryStore) {
        self.data_path = Some(store.path().to_path_buf());
        self.ledger = EntryLedger::open(Box::new(store), Arc::clone(&self.clock));
    }

    pub(crate) fn style(&self) -> UiStyle {
        UiStyle::current()
    }

    /// Renders `view` for the whole ledger, using the current month for the calendar.
    pub(crate) fn view_lines(&self, view: ViewMode) -> Vec<String> {
        let style = self.style();
        match view {
            ViewMode::List => self.list_lines(&style),
            ViewMode::Graph => self.graph_lines(&style),
            ViewMode::Calendar => self.calendar_lines(self.default_calendar_month(), &style),
        }
    }

    /// Month of the most recent entry, or the current month for an empty ledger.
    pub(crate) fn default_calendar_month(&self) -> CalendarMonth {
        let date = self
            .ledger
            .list()
            .iter()
            .map(|entry| entry.date)
            .max()
            .unwrap_or_else(|| self.clock.today());
        CalendarMonth::containing(date)
    }

    pub(crate) fn list_lines(&self, style: &UiStyle) -> Vec<String> {
        let entries = self.ledger.list();
        if entries.is_empty() {
            return vec!["No entries recorded yet. Use `add` to record a shift.".to_string()];
        }
        let mut table = Table::new(
            Some(format!("Entries ({})", entries.len())),
            vec![
                TableColumn::right("#"),
                TableColumn::left("ID"),
                TableColumn::left("Date"),
                TableColumn::left("Company"),
                TableColumn::right("Hours"),
                TableColumn::right("Wage"),
                TableColumn::right(format!("Income ({})", self.currency())),
            ],
        );
        for (idx, entry) in entries.iter().enumerate() {
            table.add_row(entry_row(idx, entry));
        }
        let mut lines = TableRenderer::render_lines(&table, style);
        lines.push(String::new());
        lines.extend(self.totals_lines());
        lines
    }

    pub(crate) fn graph_lines(&self, style: &UiStyle) -> Vec<String> {
        let series = graph_series(self.ledger.list());
        GraphRenderer::new(terminal_width()).render_lines(&series, self.currency(), style)
    }

    pub(crate) fn calendar_lines(&self, month: CalendarMonth, style: &UiStyle) -> Vec<String> {
        let markers = calendar_markers(self.ledger.list());
        CalendarRenderer::render_lines(month, &markers, self.currency(), style)
    }

    pub(crate) fn totals_lines(&self) -> Vec<String> {
        let display = format_totals(&self.ledger.aggregate());
        vec![
            format!("Total hours : {}", display.hours),
            format!("Total income: {} {}", display.income, self.currency()),
        ]
    }
}

fn open_store(config: &Config, base: &Path) -> Result<JsonEntryStore, CoreError> {
    JsonEntryStore::new(config.resolve_data_dir(base), &config.storage_key)
}

fn entry_row(idx: usize, entry: &TimeEntry) -> Vec<String> {
    vec![
        format!("{}", idx + 1),
        short_id(entry.id.as_str()),
        entry.date.to_string(),
        entry.company_name.clone(),
        format_hours(entry.hours),
        format!("{}", entry.hourly_wage),
        format_income(entry.total_income),
    ]
}

pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] AppError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => CommandError::InvalidArguments(message),
            other => CommandError::Core(AppError::from(other)),
        }
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. } => {
                CommandError::InvalidArguments(err.to_string())
            }
            other => CommandError::Core(AppError::from(other)),
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}
