use crate::db::pool::DbPool;
use crate::db::queries::{count_by_entry_type, count_entries};
use crate::errors::AppResult;
use crate::models::EntryType;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES
    //
    let count = count_entries(&pool.conn)?;
    println!(
        "{}• Total time entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) WEEK-END DATE SPAN
    //
    let span: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(dt_end_cli_work_week), MAX(dt_end_cli_work_week) FROM time_entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = span.unwrap_or((None, None));
    let dash = || format!("{GREY}--{RESET}");

    println!("{}• Work-week ends:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    //
    // 4) PER ENTRY TYPE
    //
    let by_type = count_by_entry_type(&pool.conn)?;
    if !by_type.is_empty() {
        println!("{}• By entry type:{}", CYAN, RESET);
        for (entry_type, n) in by_type {
            let flag = match EntryType::from_label(&entry_type) {
                Some(_) => "",
                None => " (unknown label)",
            };
            println!("    {:<20} {}{}{}{}", entry_type, n, RED, flag, RESET);
        }
    }

    println!();
    Ok(())
}
