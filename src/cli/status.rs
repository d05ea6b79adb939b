//! Status and ranks command implementations

use anyhow::Result;

use hive::config::Config;

use super::{print_status, session_for};

/// Show the current game
pub async fn status_command(config: &Config, yesterday: bool) -> Result<()> {
    let session = session_for(config);
    let status = session.resume_local().await?;
    print_status(&status);

    if yesterday {
        match &status.yesterday {
            Some(answers) => {
                println!("\nYesterday's answers (* found):");
                for answer in answers {
                    let mark = if answer.found { "*" } else { " " };
                    println!("  {} {}", mark, answer.word);
                }
            }
            None => println!("\nYesterday's answers are not available."),
        }
    }

    Ok(())
}

/// Show the rank table for the saved puzzle
pub fn ranks_command(config: &Config) -> Result<()> {
    let Some(record) = config.gateway().load_local()? else {
        println!("No saved game found. Run `hive new` to start today's puzzle.");
        return Ok(());
    };

    let (catalog, progress) = record.restore()?;
    print!("{}", catalog.rank_listing());
    println!("\nCurrent: {} ({} points)", progress.rank(), progress.score());
    Ok(())
}
