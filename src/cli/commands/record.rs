use crate::cli::core::{parse_date, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{self, format_amount, format_date};
use crate::domain::{allocate, Record};
use crate::errors::LedgerError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry {
        name: "record",
        summary: "Fund meals from a cash amount and store the result",
        usage: "record [amount] [start-date] [payee]",
        handler: cmd_record,
    }]
}

fn cmd_record(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (amount, start_date, payee) = if args.is_empty() && context.can_prompt() {
        let amount = context.prompt_amount("Amount handed over")?;
        let start_date = context.prompt_start_date("First meal date")?;
        let payee = context.prompt_payee("Payee (blank for Default)")?;
        (amount, start_date, payee)
    } else {
        // A missing or non-numeric amount is the same failure as a
        // non-positive one; the shell prints usage alongside it.
        let amount = args
            .first()
            .and_then(|raw| currency::parse_amount(raw))
            .ok_or(LedgerError::InvalidBudget)?;
        let start_date = match args.get(1) {
            Some(raw) => match parse_date(raw) {
                Ok(date) => date,
                Err(_) => {
                    output::warning(format!("Ignoring invalid date `{}`; starting today.", raw));
                    context.clock.today()
                }
            },
            None => context.clock.today(),
        };
        let payee = if args.len() > 2 {
            args[2..].join(" ")
        } else {
            String::new()
        };
        (amount, start_date, payee)
    };

    let rates = context.current_rates();
    let result = allocate(amount, start_date, &rates)?;
    let record = Record::new(
        context.records.next_id(),
        payee,
        context.clock.now(),
        result,
    );
    context.records.append(record.clone())?;

    let last_meal = record
        .result
        .last_meal_date()
        .map(format_date)
        .unwrap_or_else(|| "N/A".to_string());
    output::success(format!(
        "Recorded allocation #{} for {}.",
        record.id, record.payee
    ));
    output::info(format!("  Total meals   : {}", record.result.meal_count));
    output::info(format!(
        "  Excess amount : {}",
        format_amount(record.result.remainder, &context.config.currency_label)
    ));
    output::info(format!("  Last meal date: {}", last_meal));
    Ok(())
}
