//! Guess command implementation

use anyhow::Result;

use hive::config::Config;

use super::session_for;

/// Submit guesses against this device's saved game
pub async fn guess_command(config: &Config, words: &[String]) -> Result<()> {
    let session = session_for(config);
    session.resume_local().await?;

    let mut last_status = None;
    for word in words {
        let report = session.guess(word.as_str()).await?;
        for message in report.result.messages() {
            println!("{:<12} {}", word.to_uppercase(), message);
        }
        last_status = Some(report.status);
    }

    if let Some(status) = last_status {
        println!("\nScore {} / {} - {}", status.score, status.max_score, status.rank);
    }

    Ok(())
}
