//! Shell state, command dispatch, and the prompt helpers commands share.

use std::io;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    currency,
    domain::{Clock, RateField, RateTable},
    errors::LedgerError,
    storage::{JsonRecordStore, RecordStore},
};

pub use crate::errors::CliError;

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::shell;
use super::system_clock::SystemClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Script mode is opted into through the environment so stdin-driven
    /// tests and automation never hit an interactive prompt.
    pub fn detect() -> Self {
        if std::env::var_os("MEAL_LEDGER_CLI_SCRIPT").is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Runtime state threaded through every command handler: the open record
/// store, the loaded config (home of the live rate table), and the clock.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub records: Box<dyn RecordStore>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub clock: Box<dyn Clock>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let records = JsonRecordStore::new_default().map_err(CliError::from)?;
        let config_manager = ConfigManager::new().map_err(CliError::from)?;
        let config = config_manager.load().map_err(CliError::from)?;

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            records: Box::new(records),
            config_manager,
            config,
            clock: Box::new(SystemClock),
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        "meal-ledger> ".to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.lookup(name)
    }

    /// Tokenizes one input line and dispatches it. Blank lines and
    /// tokenizer errors (unbalanced quotes) are absorbed here.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(message) => {
                output::warning(message);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((first, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&first.to_lowercase(), first, &args)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.lookup(command).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };

        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        // Commands dispatch case-insensitively, so typos match that way too.
        let needle = input.to_lowercase();
        let near = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = near {
            if distance <= 3 {
                output::hint(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()
            .map_err(CommandError::from)?;
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(LedgerError::InvalidBudget) => {
                output::error(LedgerError::InvalidBudget);
                output::hint("Usage: record <amount> [start-date] [payee]");
            }
            other => output::error(other),
        }
        Ok(())
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    /// Fresh copy of the live rate table; one calculation, one snapshot.
    pub(crate) fn current_rates(&self) -> RateTable {
        self.config.rates.clone()
    }

    /// Updates one rate (clamped at zero) and persists the config at once.
    pub(crate) fn set_rate(&mut self, field: RateField, value: Decimal) -> Result<(), CommandError> {
        self.config.rates.set(field, value);
        self.persist_config()
    }

    pub(crate) fn prompt_amount(&self, prompt: &str) -> Result<Decimal, CommandError> {
        Input::<Decimal>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|value: &Decimal| -> Result<(), &str> {
                if *value <= Decimal::ZERO {
                    Err("Amount must be greater than 0")
                } else {
                    Ok(())
                }
            })
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn prompt_start_date(&self, prompt: &str) -> Result<NaiveDate, CommandError> {
        let raw: String = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(currency::format_date(self.clock.today()))
            .validate_with(|input: &String| -> Result<(), &str> {
                if NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").is_ok() {
                    Ok(())
                } else {
                    Err("Use YYYY-MM-DD")
                }
            })
            .interact_text()
            .map_err(CommandError::from)?;
        parse_date(raw.trim())
    }

    pub(crate) fn prompt_payee(&self, prompt: &str) -> Result<String, CommandError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(CommandError::from)
    }

    pub(crate) fn prompt_text(&self, prompt: &str) -> Result<String, CommandError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(CommandError::from)
    }

    pub(crate) fn prompt_rate_field(&self, prompt: &str) -> Result<RateField, CommandError> {
        let labels: Vec<&'static str> = RateField::ALL.iter().map(|field| field.label()).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(CommandError::from)?;
        Ok(RateField::ALL[selection])
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::new(CliMode::Script)?;
    for line in lines {
        match app.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_handles_quotes() {
        let tokens =
            shell::parse_command_line("record 500 2024-06-03 \"Mess Manager\"").unwrap();
        assert_eq!(tokens, vec!["record", "500", "2024-06-03", "Mess Manager"]);
    }

    #[test]
    fn parse_date_accepts_iso_input() {
        let date = parse_date("2024-06-03").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("03/06/2024").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn script_runner_records_an_allocation() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        std::env::set_var("MEAL_LEDGER_HOME", temp.path());
        let context = process_script(&["record 150 2024-06-03 Hall", "exit"]).unwrap();
        std::env::remove_var("MEAL_LEDGER_HOME");

        let records = context.records.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payee, "Hall");
        // 150 from Monday at 50-per-meal rates funds exactly three meals.
        assert_eq!(records[0].result.meal_count, 3);
        assert_eq!(records[0].result.remainder, Decimal::ZERO);
    }
}
