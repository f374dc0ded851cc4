use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::log;
use crate::storage::pool::Storage;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite storage file and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.storage {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let storage_path = if let Some(custom) = &cli.storage {
        custom.clone()
    } else {
        cfg.storage.clone()
    };

    println!("⚙️  Initializing pestwatch…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Storage    : {}", &storage_path);

    // opening runs the pending migrations
    let storage = Storage::open(&storage_path)?;

    println!("✅ Storage initialized at {}", &storage_path);

    if let Err(e) = log::ttlog(
        &storage.conn,
        "init",
        "Storage initialized",
        &format!("Storage initialized at {}", &storage_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 pestwatch initialization completed!");
    Ok(())
}
