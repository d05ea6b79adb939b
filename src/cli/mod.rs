pub mod guess;
pub mod init;
pub mod new;
pub mod reload;
pub mod save;
pub mod status;

use hive::config::Config;
use hive::{GameStatus, SessionHandle};

/// Session task wired to the configured stores
pub fn session_for(config: &Config) -> SessionHandle {
    SessionHandle::spawn(config.gateway(), config.player.name.clone())
}

/// Print the board: header, letters, score and rank, found words
pub fn print_status(status: &GameStatus) {
    println!("{}", status.header);
    let outer: String = status.outer_letters.iter().collect();
    println!("  Letters: [{}] {}", status.center_letter, outer);
    println!("  Score:   {} / {}", status.score, status.max_score);
    println!("  Rank:    {}", status.rank);
    println!(
        "  Found {} of {} words:",
        status.found.len(),
        status.total_answers
    );
    for (i, word) in status.found.iter().enumerate() {
        println!("    {}. {}", i + 1, word);
    }
    if status.completed {
        println!("\nYou found them all!");
    }
}
