use shiftbook_core::{format_hours, format_income, EntryDraft};
use shiftbook_domain::{Displayable, EntryId, TimeEntry};

use crate::cli::core::{short_id, CommandError, CommandResult, ShellContext};
use crate::cli::forms::EntryForm;
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ADD_USAGE: &str = "usage: add <company> <hours> <wage>";
const REMOVE_USAGE: &str = "usage: remove <id|id-prefix|#index>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record a shift dated today",
            "add [<company> <hours> <wage>]",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Delete a recorded shift",
            "remove [<id>|<id-prefix>|#<index>]",
            cmd_remove,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = match args {
        [] => {
            if !context.can_prompt() {
                return Err(CommandError::InvalidArguments(ADD_USAGE.into()));
            }
            let form = EntryForm::new(&context.theme, context.config.numeric_input);
            match form.run()? {
                Some(draft) => draft,
                None => {
                    output::info("Operation cancelled.");
                    return Ok(());
                }
            }
        }
        [company @ .., hours, wage] if !company.is_empty() => {
            EntryDraft::new(company.join(" "), *hours, *wage)
        }
        _ => return Err(CommandError::InvalidArguments(ADD_USAGE.into())),
    };

    let valid = draft.validate(context.config.numeric_input)?;
    let entry = context
        .ledger
        .append(valid.company_name, valid.hours, valid.hourly_wage)?;
    output::success(format!(
        "Recorded {} on {}: {}h x {} = {} {} (id {}).",
        entry.company_name,
        entry.date,
        format_hours(entry.hours),
        entry.hourly_wage,
        format_income(entry.total_income),
        context.currency(),
        short_id(entry.id.as_str())
    ));
    if entry.is_tainted() {
        output::warning("Entry contains values that are not numbers; totals will read NaN.");
    }
    output::lines(&context.totals_lines());
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = match args {
        [reference] => match resolve_entry(context.ledger.list(), reference)? {
            Some(id) => id,
            None => {
                output::warning(format!("No entry matches `{}`.", reference));
                return Ok(());
            }
        },
        [] => {
            if !context.can_prompt() {
                return Err(CommandError::InvalidArguments(REMOVE_USAGE.into()));
            }
            match select_entry(context)? {
                Some(id) => id,
                None => return Ok(()),
            }
        }
        _ => return Err(CommandError::InvalidArguments(REMOVE_USAGE.into())),
    };

    if context.can_prompt() {
        let prompt = format!("Remove entry {}?", short_id(id.as_str()));
        if !io::confirm_action(&context.theme, &prompt, false)? {
            output::info("Operation cancelled.");
            return Ok(());
        }
    }

    match context.ledger.remove(&id)? {
        Some(entry) => output::success(format!(
            "Removed {} on {} (id {}).",
            entry.company_name,
            entry.date,
            short_id(entry.id.as_str())
        )),
        None => output::warning(format!("No entry with id `{}`.", id)),
    }
    Ok(())
}

fn select_entry(context: &ShellContext) -> Result<Option<EntryId>, CommandError> {
    let entries = context.ledger.list();
    if entries.is_empty() {
        output::info("No entries to remove.");
        return Ok(None);
    }
    let items: Vec<String> = entries.iter().map(describe_entry).collect();
    let choice = io::select_index(&context.theme, "Select entry to remove", &items)?;
    match choice {
        Some(idx) => Ok(entries.get(idx).map(|entry| entry.id.clone())),
        None => {
            output::info("Operation cancelled.");
            Ok(None)
        }
    }
}

fn describe_entry(entry: &TimeEntry) -> String {
    format!("{}  {}", short_id(entry.id.as_str()), entry.display_label())
}

/// Maps a user reference to an entry id.
///
/// `#n` selects the n-th listed entry. An exact id or a unique id prefix selects
/// that entry. Anything that names no current entry yields `None`.
pub(crate) fn resolve_entry(
    entries: &[TimeEntry],
    reference: &str,
) -> Result<Option<EntryId>, CommandError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(CommandError::InvalidArguments(REMOVE_USAGE.into()));
    }
    if let Some(index) = reference.strip_prefix('#') {
        let index: usize = index.parse().map_err(|_| {
            CommandError::InvalidArguments(format!("invalid index `{}`", reference))
        })?;
        return Ok(index
            .checked_sub(1)
            .and_then(|idx| entries.get(idx))
            .map(|entry| entry.id.clone()));
    }
    if let Some(entry) = entries.iter().find(|entry| entry.id.as_str() == reference) {
        return Ok(Some(entry.id.clone()));
    }

    let matches: Vec<&TimeEntry> = entries
        .iter()
        .filter(|entry| entry.id.as_str().starts_with(reference))
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.id.clone())),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` matches {} entries; use a longer id",
            reference,
            matches.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entries() -> Vec<TimeEntry> {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        vec![
            TimeEntry::new(EntryId::from("abc123"), date, "A", 1.0, 100.0),
            TimeEntry::new(EntryId::from("abd456"), date, "B", 2.0, 100.0),
            TimeEntry::new(EntryId::from("1717000000000"), date, "C", 3.0, 100.0),
        ]
    }

    #[test]
    fn resolves_index_prefix_and_exact_ids() {
        let entries = entries();
        assert_eq!(
            resolve_entry(&entries, "#2").unwrap(),
            Some(EntryId::from("abd456"))
        );
        assert_eq!(resolve_entry(&entries, "#0").unwrap(), None);
        assert_eq!(resolve_entry(&entries, "#4").unwrap(), None);
        assert_eq!(
            resolve_entry(&entries, "abc").unwrap(),
            Some(EntryId::from("abc123"))
        );
        assert_eq!(
            resolve_entry(&entries, "1717000000000").unwrap(),
            Some(EntryId::from("1717000000000"))
        );
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        let err = resolve_entry(&entries(), "ab").unwrap_err();
        assert!(err.to_string().contains("matches 2 entries"));
        assert!(resolve_entry(&entries(), "#x").is_err());
        assert!(resolve_entry(&entries(), " ").is_err());
    }

    #[test]
    fn unknown_reference_resolves_to_nothing() {
        assert_eq!(resolve_entry(&entries(), "zzz").unwrap(), None);
        assert_eq!(resolve_entry(&entries(), "abc1234").unwrap(), None);
    }
}
