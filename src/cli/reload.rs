//! Reload command implementation

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::{Local, TimeZone};

use hive::config::Config;
use hive::session::RecordSource;
use hive::{ConfirmOverride, PersistedRecord, SessionError};

use super::{print_status, session_for};

/// Restore the saved game, asking before older remote progress replaces newer local progress
pub async fn reload_command(config: &Config, yes: bool) -> Result<()> {
    let confirm: Option<Box<dyn ConfirmOverride>> = if yes {
        None
    } else {
        Some(Box::new(prompt_override))
    };

    let session = session_for(config);
    let report = match session.reload(confirm).await {
        Ok(report) => report,
        Err(SessionError::NoSavedState) => {
            eprintln!("No saved game found. Run `hive new` to start today's puzzle.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(reason) = &report.remote_unavailable {
        eprintln!("Remote store unavailable, using local save: {}", reason);
    }
    match report.source {
        RecordSource::Remote => println!("Loaded remote save."),
        RecordSource::Local(reason) => {
            if let Some(notice) = reason.notice() {
                if report.remote_unavailable.is_none() {
                    println!("{}", notice);
                }
            }
        }
    }

    print_status(&report.status);
    Ok(())
}

fn prompt_override(local: &PersistedRecord, remote: &PersistedRecord, _now: i64) -> bool {
    println!(
        "Local game (score {}, saved {}) is newer than the remote game (score {}, saved {}).",
        local.score,
        format_saved_at(local.saved_at),
        remote.score,
        format_saved_at(remote.saved_at)
    );
    print!("Replace local progress with the remote game? [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn format_saved_at(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
