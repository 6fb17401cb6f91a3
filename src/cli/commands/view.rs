use serde::Serialize;
use shiftbook_domain::{Totals, ViewMode};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::CalendarMonth;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "List recorded shifts", "list [--json]", cmd_list)
            .with_completer(complete_json_flag),
        CommandEntry::new(
            "graph",
            "Plot hours and income per shift",
            "graph",
            cmd_graph,
        ),
        CommandEntry::new(
            "calendar",
            "Show shifts on a month calendar",
            "calendar [YYYY-MM]",
            cmd_calendar,
        ),
        CommandEntry::new(
            "view",
            "Show or switch the active view",
            "view [list|graph|calendar]",
            cmd_view,
        )
        .with_completer(complete_view),
        CommandEntry::new(
            "totals",
            "Show total hours and income",
            "totals [--json]",
            cmd_totals,
        )
        .with_completer(complete_json_flag),
        CommandEntry::new(
            "reload",
            "Re-read shifts from storage",
            "reload",
            cmd_reload,
        ),
    ]
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalsReport<'a> {
    currency: &'a str,
    entries: usize,
    #[serde(flatten)]
    totals: Totals,
}

const JSON_FLAG: &str = "--json";

fn complete_json_flag(typed: &[&str]) -> Vec<&'static str> {
    match typed {
        [] => vec![JSON_FLAG],
        _ => Vec::new(),
    }
}

fn complete_view(typed: &[&str]) -> Vec<&'static str> {
    match typed {
        [] => ViewMode::ALL.iter().map(|mode| mode.as_str()).collect(),
        _ => Vec::new(),
    }
}

fn json_flag(args: &[&str], usage: &str) -> Result<bool, CommandError> {
    match args {
        [] => Ok(false),
        [flag] if *flag == JSON_FLAG => Ok(true),
        _ => Err(CommandError::InvalidArguments(format!("usage: {}", usage))),
    }
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if json_flag(args, "list [--json]")? {
        output::info(serde_json::to_string_pretty(context.ledger.list())?);
        return Ok(());
    }
    output::lines(&context.list_lines(&context.style()));
    Ok(())
}

fn cmd_graph(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::lines(&context.graph_lines(&context.style()));
    Ok(())
}

fn cmd_calendar(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let month = match args.first() {
        Some(raw) => CalendarMonth::parse(raw).ok_or_else(|| {
            CommandError::InvalidArguments(format!("invalid month `{}` (use YYYY-MM)", raw))
        })?,
        None => context.default_calendar_month(),
    };
    output::lines(&context.calendar_lines(month, &context.style()));
    Ok(())
}

fn cmd_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        context.view = raw
            .parse::<ViewMode>()
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    }
    output::section(format!("{} view", capitalize(context.view.as_str())));
    output::lines(&context.view_lines(context.view));
    Ok(())
}

fn cmd_totals(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if json_flag(args, "totals [--json]")? {
        let report = TotalsReport {
            currency: context.currency(),
            entries: context.ledger.len(),
            totals: context.ledger.aggregate(),
        };
        output::info(serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    output::lines(&context.totals_lines());
    Ok(())
}

fn cmd_reload(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let count = context.ledger.reload();
    match &context.data_path {
        Some(path) => output::success(format!(
            "Reloaded {} entries from {}.",
            count,
            path.display()
        )),
        None => output::success(format!("Reloaded {} entries.", count)),
    }
    Ok(())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
