use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::session;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let storage = Storage::open(&cfg.storage)?;

        let user = session::login(&storage, username, password)?;

        messages::success(format!("Welcome back, {}!", user.name));
    }

    Ok(())
}
