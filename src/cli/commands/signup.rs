use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::account::NewAccount;
use crate::storage::pool::Storage;
use crate::store::accounts;
use crate::ui::messages;

/// Register a new account. Validation (duplicate username, email shape,
/// password length) runs here, before the store appends anything.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Signup {
        name,
        username,
        email,
        password,
        farm_location,
        phone,
    } = cmd
    {
        let storage = Storage::open(&cfg.storage)?;

        let fields = NewAccount {
            name: name.clone(),
            username: username.clone(),
            email: email.clone(),
            password: password.clone(),
            farm_location: farm_location.clone(),
            phone: phone.clone(),
        };

        accounts::validate_signup(&storage, &fields)?;
        let account = accounts::create(&storage, fields)?;

        messages::success(format!(
            "Account '{}' created. You can now log in.",
            account.username
        ));
    }

    Ok(())
}
