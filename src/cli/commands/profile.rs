use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::account::ProfileUpdate;
use crate::storage::pool::Storage;
use crate::store::{accounts, session};
use crate::ui::messages;

/// Show or update the logged-in user's profile.
///
/// The store overwrites all four editable fields at once, so unspecified
/// flags fall back to the current values before the update is applied.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        name,
        email,
        phone,
        farm_location,
    } = cmd
    {
        let storage = Storage::open(&cfg.storage)?;

        let user = session::current(&storage)?.ok_or(AppError::NotLoggedIn)?;

        let no_changes =
            name.is_none() && email.is_none() && phone.is_none() && farm_location.is_none();

        if no_changes {
            println!("👤 Profile of {}:\n", user.username);
            println!("• Name:  {}", user.name);
            println!("• Email: {}", user.email);
            println!("• Phone: {}", show_or_dash(&user.phone));
            println!("• Farm:  {}", show_or_dash(&user.farm_location));
            return Ok(());
        }

        let update = ProfileUpdate {
            name: name.clone().unwrap_or_else(|| user.name.clone()),
            email: email.clone().unwrap_or_else(|| user.email.clone()),
            phone: phone.clone().unwrap_or_else(|| user.phone.clone()),
            farm_location: farm_location
                .clone()
                .unwrap_or_else(|| user.farm_location.clone()),
        };

        accounts::update_profile(&storage, user.id, update)?;

        messages::success("Profile updated");
        if user.id == session::DEMO_ADMIN_ID {
            messages::warning("The demo admin has no stored account; nothing was changed");
        }
    }

    Ok(())
}

fn show_or_dash(value: &str) -> &str {
    if value.is_empty() { "--" } else { value }
}
