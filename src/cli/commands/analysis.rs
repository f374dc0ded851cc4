use crate::aggregate::{charts, species};
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::pool::Storage;
use crate::store::records;
use crate::utils::date;
use crate::utils::formatting::{bold, capitalize};
use crate::utils::table::Table;

/// Print the analysis stats plus the two chart series (the data the species
/// doughnut and the 7-day trend line are drawn from).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::open(&cfg.storage)?;
    let list = records::load(&storage)?;

    println!("📊 {}\n", bold("Pest analysis"));

    match species::top_species(&list) {
        Some((top, total)) => {
            println!("• Most common pest: {} ({} total)", capitalize(top.as_str()), total)
        }
        None => println!("• Most common pest: --"),
    }
    println!("• Total detections: {}", list.len());

    //
    // Species distribution (doughnut series)
    //
    let species_series = charts::species_series(&list);
    if !species_series.is_empty() {
        println!("\nSpecies distribution:");
        let mut table = Table::new(&["Species", "Total"]);
        for (label, value) in species_series
            .labels
            .iter()
            .zip(species_series.values.iter())
        {
            table.add_row(vec![capitalize(label), value.to_string()]);
        }
        print!("{}", table.render());
    }

    //
    // Last 7 days trend (line series)
    //
    let trend_series = charts::trend_series(&list, date::today());
    println!("\nLast 7 days:");
    if trend_series.is_empty() {
        println!("(no detections in the last 7 days)");
    } else {
        let mut table = Table::new(&["Date", "Pest count"]);
        for (label, value) in trend_series.labels.iter().zip(trend_series.values.iter()) {
            table.add_row(vec![label.clone(), value.to_string()]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
