use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::session;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::open(&cfg.storage)?;

    match session::current(&storage)? {
        Some(user) => {
            println!("👤 {} ({})", user.name, user.username);
            if !user.email.is_empty() {
                println!("   email: {}", user.email);
            }
            if !user.farm_location.is_empty() {
                println!("   farm:  {}", user.farm_location);
            }
        }
        None => messages::info("Not logged in"),
    }

    Ok(())
}
