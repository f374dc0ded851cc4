use crate::aggregate::dashboard::HIGH_RISK_THRESHOLD;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::records;
use crate::utils::colors::{RESET, color_for_count};
use crate::utils::table::Table;

/// Print every recorded observation, newest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::open(&cfg.storage)?;
    let list = records::load(&storage)?;

    if list.is_empty() {
        println!("No observations recorded.");
        return Ok(());
    }

    println!("🐛 Recorded observations:\n");

    let mut table = Table::new(&["ID", "Date", "Species", "Count", "Location"]);
    for obs in &list {
        table.add_row(vec![
            obs.id.to_string(),
            obs.date_str(),
            obs.species.label(),
            obs.count.to_string(),
            obs.location.clone(),
        ]);
    }
    print!("{}", table.render());

    let alerts = list
        .iter()
        .filter(|o| o.count > HIGH_RISK_THRESHOLD)
        .count();
    if alerts > 0 {
        let color = color_for_count(true);
        println!(
            "\n{}{} record(s) over the alert threshold ({}){}",
            color, alerts, HIGH_RISK_THRESHOLD, RESET
        );
    }

    Ok(())
}
