use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::records;
use crate::ui::messages;

/// Delete an observation by id, after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !messages::confirm(format!("Are you sure to delete observation {}", id)) {
            println!("Aborted. Nothing deleted.");
            return Ok(());
        }

        let storage = Storage::open(&cfg.storage)?;

        let before = records::load(&storage)?.len();
        records::delete(&storage, *id)?;
        let after = records::load(&storage)?.len();

        // an unknown id is a silent no-op in the store; the count shows it
        messages::success(format!("Removed {} record(s)", before - after));
    }

    Ok(())
}
