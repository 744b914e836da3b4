pub mod history;
pub mod rates;
pub mod record;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command. Registration order is the order `help`
/// lists them in.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let entries = record::definitions()
        .into_iter()
        .chain(rates::definitions())
        .chain(history::definitions())
        .chain(system::definitions());
    for entry in entries {
        registry.register(entry);
    }
}
