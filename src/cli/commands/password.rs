use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage::pool::Storage;
use crate::store::{accounts, session};
use crate::ui::messages;

/// Handle `password --reset <username>` and
/// `password --old <pw> --new <pw> --confirm <pw>`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Password {
        reset,
        old,
        new,
        confirm,
    } = cmd
    {
        let storage = Storage::open(&cfg.storage)?;

        //
        // RESET MODE (no login required; this is the "forgot password" path)
        //
        if let Some(username) = reset {
            accounts::reset_password(&storage, username)?;
            messages::success(format!(
                "Password for '{}' reset to '{}'",
                username,
                accounts::RESET_PASSWORD
            ));
            messages::warning("Change it right after logging in");
            return Ok(());
        }

        //
        // CHANGE MODE
        //
        let (old, new, confirm) = match (old, new, confirm) {
            (Some(o), Some(n), Some(c)) => (o, n, c),
            _ => {
                messages::warning(
                    "Provide either --reset <username>, or --old, --new and --confirm",
                );
                return Ok(());
            }
        };

        if new != confirm {
            return Err(AppError::PasswordConfirmation);
        }

        let user = session::current(&storage)?.ok_or(AppError::NotLoggedIn)?;

        accounts::change_password(&storage, user.id, old, new)?;

        messages::success("Password changed");
    }

    Ok(())
}
