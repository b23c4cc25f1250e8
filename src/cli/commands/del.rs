use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::queries::load_event;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = open_db(cfg)?;

        // fails with EventNotFound before asking anything
        let ev = load_event(&mut pool, *id)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete event {} '{}' ({})?",
                ev.id,
                ev.title,
                ev.time_range()
            ))
        {
            info("Nothing deleted.");
            return Ok(());
        }

        DeleteLogic::apply(&mut pool, *id)?;
    }

    Ok(())
}
