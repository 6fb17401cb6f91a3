use shiftbook_config::SETTABLE_KEYS;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "usage: config [show|get <key>|set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|get <key>|set <key> <value>]",
        cmd_config,
    )
    .with_completer(complete_config)]
}

fn complete_config(typed: &[&str]) -> Vec<&'static str> {
    match typed {
        [] => vec!["show", "get", "set"],
        [action] if action.eq_ignore_ascii_case("get") || action.eq_ignore_ascii_case("set") => {
            SETTABLE_KEYS.to_vec()
        }
        _ => Vec::new(),
    }
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "get" => {
            let key = args
                .get(1)
                .ok_or_else(|| CommandError::InvalidArguments("usage: config get <key>".into()))?;
            output::info(context.config.get(key)?);
            Ok(())
        }
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    SETTABLE_KEYS.join("|")
                )));
            }
            set_config_value(context, args[1], args[2..].join(" ").trim())
        }
        _ => Err(CommandError::InvalidArguments(USAGE.into())),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for key in SETTABLE_KEYS {
        output::info(format!("  {:<18}: {}", key, context.config.get(key)?));
    }
    output::info(format!(
        "  {:<18}: {}",
        "config file",
        context.config_manager.config_path().display()
    ));
    if let Some(path) = &context.data_path {
        output::info(format!("  {:<18}: {}", "data file", path.display()));
    }
    Ok(())
}

/// Applies and saves one setting. A new data directory must open before
/// anything is saved; nothing changes if either step fails.
fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    let store = match key {
        "data_dir" => Some(context.open_store_for(&updated)?),
        _ => None,
    };
    context.config_manager.save(&updated)?;
    context.config = updated;

    if let Some(store) = store {
        context.switch_store(store);
    }
    if key == "ui_color_enabled" {
        context.apply_preferences();
    }
    output::success(format!("{} set to {}.", key, context.config.get(key)?));
    Ok(())
}
