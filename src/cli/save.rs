//! Save command implementation

use anyhow::Result;

use hive::config::Config;
use hive::RemoteSave;

use super::session_for;

/// Save locally, then merge this player's record into the remote bin
pub async fn save_command(config: &Config) -> Result<()> {
    let session = session_for(config);
    session.resume_local().await?;

    let report = session.save().await?;
    println!("Saved locally (score {}).", report.record.score);

    match report.remote {
        RemoteSave::Saved => println!("Saved remotely as {}.", config.player.name),
        RemoteSave::Disabled => {}
        RemoteSave::Refused => eprintln!("Remote store refused the save."),
        RemoteSave::Unavailable(reason) => {
            eprintln!("Remote store unavailable, saved locally only: {}", reason)
        }
    }

    Ok(())
}
