use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_amount, format_date};
use crate::domain::{RateField, Record};

const DEFAULT_LIMIT: usize = 10;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry {
        name: "history",
        summary: "Browse stored allocation records, newest first",
        usage: "history [limit|show <id>]",
        handler: cmd_history,
    }]
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        None => list_records(context, DEFAULT_LIMIT),
        Some(sub) if sub.eq_ignore_ascii_case("show") => {
            let raw_id = args
                .get(1)
                .ok_or_else(|| CommandError::InvalidArguments("usage: history show <id>".into()))?;
            let id: u64 = raw_id.parse().map_err(|_| {
                CommandError::InvalidArguments(format!("invalid record id `{}`", raw_id))
            })?;
            show_record(context, id)
        }
        Some(raw) => {
            let limit: usize = raw.parse().map_err(|_| {
                CommandError::InvalidArguments("usage: history [limit|show <id>]".into())
            })?;
            list_records(context, limit)
        }
    }
}

fn list_records(context: &ShellContext, limit: usize) -> CommandResult {
    let records = context.records.list();
    output::section("Allocation history");
    if records.is_empty() {
        output::info("No records yet. Use `record <amount>` to create one.");
        return Ok(());
    }

    let label = &context.config.currency_label;
    for record in records.iter().take(limit) {
        output::info(format!(
            "  #{:<4} {}  {:<16} {:>10}  {:>3} meals  excess {}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.payee,
            format_amount(record.result.budget, label),
            record.result.meal_count,
            format_amount(record.result.remainder, label)
        ));
    }
    if records.len() > limit {
        output::info(format!(
            "  ... and {} more. Use `history {}` to see all.",
            records.len() - limit,
            records.len()
        ));
    }
    Ok(())
}

fn show_record(context: &ShellContext, id: u64) -> CommandResult {
    let record = context
        .records
        .list()
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| CommandError::Message(format!("no record with id {}", id)))?;
    print_record(record, &context.config.currency_label);
    Ok(())
}

fn print_record(record: &Record, label: &str) {
    output::section(format!("Record #{}", record.id));
    output::info(format!("  Payee        : {}", record.payee));
    output::info(format!(
        "  Recorded at  : {}",
        record.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output::info(format!(
        "  Start date   : {}",
        format_date(record.result.start_date)
    ));
    output::info(format!(
        "  Budget       : {}",
        format_amount(record.result.budget, label)
    ));
    output::info(format!("  Meals funded : {}", record.result.meal_count));
    output::info(format!(
        "  Excess amount: {}",
        format_amount(record.result.remainder, label)
    ));

    output::info("  Rates at calculation time:");
    for field in RateField::ALL {
        output::info(format!(
            "    {:<16} {}",
            field.key(),
            format_amount(record.result.rates_used.rate(field), label)
        ));
    }

    output::info("  Meals:");
    for meal in &record.result.meals_funded {
        output::info(format!(
            "    {} ({}) {:<7} {}",
            format_date(meal.date),
            meal.day_label,
            meal.slot.label(),
            format_amount(meal.cost, label)
        ));
    }
}
