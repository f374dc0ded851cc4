use crate::models::account::UserAccount;
use crate::models::observation::Observation;
use crate::storage::blobs::{self, Loaded};
use crate::storage::pool::Storage;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_storage_info(storage: &Storage, path: &str) -> crate::errors::AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) BLOB CONTENTS
    //
    let observations: Loaded<Vec<Observation>> = blobs::read(storage, blobs::OBSERVATIONS)?;
    match observations {
        Loaded::Present(list) => println!(
            "{}• Observations:{} {}{} record(s){}",
            CYAN,
            RESET,
            GREEN,
            list.len(),
            RESET
        ),
        Loaded::Absent => println!(
            "{}• Observations:{} {}not saved yet (seed data in use){}",
            CYAN, RESET, GREY, RESET
        ),
    }

    let accounts: Loaded<Vec<UserAccount>> = blobs::read(storage, blobs::ACCOUNTS)?;
    match accounts {
        Loaded::Present(list) => println!(
            "{}• Accounts:{} {}{} registered{}",
            CYAN,
            RESET,
            GREEN,
            list.len(),
            RESET
        ),
        Loaded::Absent => println!("{}• Accounts:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    let has_session = blobs::exists(storage, blobs::SESSION)?;
    println!(
        "{}• Session blob:{} {}",
        CYAN,
        RESET,
        if has_session { "present" } else { "absent" }
    );

    //
    // 3) LOG ROWS
    //
    let log_rows: i64 = storage
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
