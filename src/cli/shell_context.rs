use std::{path::PathBuf, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use shiftbook_config::{Config, ConfigManager};
use shiftbook_core::{Clock, EntryLedger};
use shiftbook_domain::ViewMode;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can reach: the open ledger, the loaded
/// configuration and the shell's own state.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: EntryLedger,
    pub clock: Arc<dyn Clock>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub view: ViewMode,
    pub theme: ColorfulTheme,
    /// File backing the ledger, when it is file-backed.
    pub data_path: Option<PathBuf>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, view: {}, entries: {}, last_command: {:?} }}",
            self.running,
            self.view,
            self.ledger.len(),
            self.last_command
        )
    }
}
