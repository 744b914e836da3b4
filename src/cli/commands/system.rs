use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::storage::RECORD_SCHEMA_VERSION;
use crate::utils::build_info::BuildMetadata;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry {
            name: "help",
            summary: "Show available commands",
            usage: "help [command]",
            handler: cmd_help,
        },
        CommandEntry {
            name: "version",
            summary: "Show build metadata",
            usage: "version",
            handler: cmd_version,
        },
        CommandEntry {
            name: "exit",
            summary: "Exit the shell",
            usage: "exit",
            handler: cmd_exit,
        },
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = BuildMetadata::capture();
    output::section(format!("Meal Ledger {}", meta.version));
    let rows = [
        ("CLI version", meta.version.to_string()),
        ("Record schema", format!("v{}", RECORD_SCHEMA_VERSION)),
        ("Build hash", format!("{} ({})", meta.git_hash, meta.git_status)),
        ("Built at", meta.timestamp.to_string()),
        ("Target", meta.target.to_string()),
        ("Profile", meta.profile.to_string()),
        ("Rustc", meta.rustc.to_string()),
    ];
    for (name, value) in rows {
        output::info(format!("  {:<13}: {}", name, value));
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        },
        None => help::print_overview(&context.registry),
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
