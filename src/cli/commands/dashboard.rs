use crate::aggregate::dashboard;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::records;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use crate::utils::formatting::bold;

/// Print the dashboard tiles and the recent-activity feed.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::open(&cfg.storage)?;
    let list = records::load(&storage)?;

    let total = dashboard::total_count(&list);
    let alerts = dashboard::high_risk_count(&list);
    let density = dashboard::density(&list);

    println!("🌾 {}\n", bold("Farm dashboard"));
    println!("{}• Total pests:{}   {}{}{}", CYAN, RESET, GREEN, total, RESET);

    let alert_color = if alerts > 0 { RED } else { GREEN };
    println!(
        "{}• Active alerts:{} {}{}{}",
        CYAN, RESET, alert_color, alerts, RESET
    );
    println!("{}• Avg density:{}   {}", CYAN, RESET, density);

    let recent = dashboard::recent_activity(&list, cfg.recent_limit);
    if !recent.is_empty() {
        println!("\nRecent activity:");
        for obs in &recent {
            println!(
                "  🐛 {} {} detected in {} ({})",
                obs.count,
                obs.species,
                obs.location,
                obs.date_str()
            );
        }
    }

    Ok(())
}
