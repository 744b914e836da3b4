use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{coerce_rate_text, format_amount};
use crate::domain::RateField;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry {
        name: "rates",
        summary: "View and adjust the per-meal rates",
        usage: "rates [show|set <field> <value>]",
        handler: cmd_rates,
    }]
}

fn cmd_rates(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_rates(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => match args.len() {
            1 => {
                if !context.can_prompt() {
                    return Err(CommandError::InvalidArguments(
                        "usage: rates set <field> <value>".into(),
                    ));
                }
                let field = context.prompt_rate_field("Which rate?")?;
                let raw = context.prompt_text("New rate")?;
                apply_rate(context, field, &raw)
            }
            2 => Err(CommandError::InvalidArguments(
                "usage: rates set <field> <value>".into(),
            )),
            _ => {
                let field = RateField::parse(args[1]).ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "unknown rate field `{}` (expected weekday-lunch, weekday-supper, \
                         friday-lunch or friday-supper)",
                        args[1]
                    ))
                })?;
                apply_rate(context, field, args[2])
            }
        },
        _ => Err(CommandError::InvalidArguments(
            "usage: rates [show|set <field> <value>]".into(),
        )),
    }
}

fn show_rates(context: &ShellContext) -> CommandResult {
    output::section("Meal rates");
    let label = &context.config.currency_label;
    for field in RateField::ALL {
        output::info(format!(
            "  {:<16} {}",
            field.key(),
            format_amount(context.config.rates.rate(field), label)
        ));
    }
    output::info("Saturday and Sunday use the weekday rates.");
    output::info("Use `rates set <field> <value>` to change a rate.");
    Ok(())
}

fn apply_rate(context: &mut ShellContext, field: RateField, raw: &str) -> CommandResult {
    // Free-form input coerces rather than errors: garbage and negatives
    // both land on zero.
    let value = coerce_rate_text(raw);
    context.set_rate(field, value)?;
    output::success(format!(
        "{} set to {}.",
        field.label(),
        format_amount(value, &context.config.currency_label)
    ));
    Ok(())
}
