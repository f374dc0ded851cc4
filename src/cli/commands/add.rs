use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::species::Species;
use crate::storage::pool::Storage;
use crate::store::records;
use crate::ui::messages;

/// Record a manually entered observation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        species,
        count,
        location,
    } = cmd
    {
        //
        // 1. Parse species (mandatory)
        //
        let species = Species::from_code(species).ok_or_else(|| {
            AppError::InvalidSpecies(format!(
                "'{}'. Use one of: aphids, caterpillars, beetles, whiteflies, thrips",
                species
            ))
        })?;

        //
        // 2. Location (default from config)
        //
        let location = location
            .clone()
            .unwrap_or_else(|| cfg.default_location.clone());

        //
        // 3. Open storage and record
        //
        let storage = Storage::open(&cfg.storage)?;
        let obs = records::add(&storage, species, *count, &location)?;

        messages::success(format!(
            "Recorded {} {} in {} (id {})",
            obs.count, obs.species, obs.location, obs.id
        ));
    }

    Ok(())
}
