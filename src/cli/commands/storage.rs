use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::storage::stats::print_storage_info;

/// Handle the `storage` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Storage { info } = cmd
        && *info
    {
        let storage = Storage::open(&cfg.storage)?;
        print_storage_info(&storage, &cfg.storage)?;
    }

    Ok(())
}
