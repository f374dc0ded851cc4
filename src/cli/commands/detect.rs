use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::records;
use crate::ui::messages;

/// Run one simulated auto-detection pass and record what it "found".
pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::open(&cfg.storage)?;

    let obs = records::simulate_detection(&storage)?;

    messages::success(format!(
        "Auto-detected: {} {} in {}",
        obs.count, obs.species, obs.location
    ));

    Ok(())
}
