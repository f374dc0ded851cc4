use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;

/// Print rows from the internal `log` table when requested.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let storage = Storage::open(&cfg.storage)?;

        let mut stmt = storage.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        println!("📜 Internal log:");
        for r in rows {
            let (id, date, operation, target, message) = r?;
            if target.is_empty() {
                println!("{:>3}: {} | {} | {}", id, date, operation, message);
            } else {
                println!(
                    "{:>3}: {} | {} ({}) | {}",
                    id, date, operation, target, message
                );
            }
        }
    }

    Ok(())
}
