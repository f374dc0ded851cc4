use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::session;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::open(&cfg.storage)?;

    session::logout(&storage)?;
    messages::success("Logged out");

    Ok(())
}
