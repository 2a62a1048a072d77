use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_operation};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }

    let pool = DbPool::new(&cfg.database)?;
    let entries = load_log(&pool.conn)?;

    if entries.is_empty() {
        warning("Internal log is empty.");
        return Ok(());
    }

    let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in entries {
        let op_target = if e.target.is_empty() {
            format!("{}{}{}", color_for_operation(&e.operation), e.operation, RESET)
        } else {
            format!(
                "{}{}{} ({})",
                color_for_operation(&e.operation),
                e.operation,
                RESET,
                e.target
            )
        };

        println!(
            "{:>id_w$}: {:<date_w$} | {} => {}",
            e.id,
            e.date,
            op_target,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
