use super::Output;
use crate::cli::SeasonCommands;
use anyhow::Result;
use chrono::Local;
use watchlog_core::{ListFilter, SeasonalDraft, Tracker};

pub fn run(tracker: &mut Tracker, output: &Output, command: SeasonCommands) -> Result<()> {
    match command {
        SeasonCommands::List => list(tracker, output),
        SeasonCommands::Add {
            name,
            note,
            category,
            genre,
            season,
            episodes,
            watched,
            date,
        } => {
            let updated = date.unwrap_or_else(|| Local::now().date_naive());
            let outcome = tracker.add_to_season(SeasonalDraft {
                note,
                category,
                genre,
                season,
                total_episodes: episodes,
                watched_episodes: watched,
                ..SeasonalDraft::new(name, updated)
            })?;
            if outcome.catalog_created {
                println!("✓ Added to the catalog as #{}", outcome.list_id);
            }
            println!("✓ Added to the season");
            Ok(())
        }
        SeasonCommands::Progress { name, watched } => {
            if tracker.set_watched(&name, watched)? {
                println!("✓ Progress updated");
            } else {
                println!("No seasonal entry named '{name}'.");
            }
            Ok(())
        }
        SeasonCommands::Remove { name } => {
            let removed = tracker.remove_from_season(&name)?;
            if removed == 0 {
                println!("No seasonal entry named '{name}'.");
            } else {
                println!("✓ Removed {removed} seasonal row(s)");
            }
            Ok(())
        }
    }
}

fn list(tracker: &Tracker, output: &Output) -> Result<()> {
    let rows = tracker.seasonal().list(&ListFilter::default());
    if output.json_rows(&rows)? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("The seasonal list is empty.");
        println!("Add one with: watchlog season add --name \"anime\"");
        return Ok(());
    }

    println!("Season watch-list ({} total)", rows.len());
    println!("{:-<70}", "");
    for entry in rows {
        println!(
            "#{} {} [{}/{}] {}",
            entry.list_id, entry.name, entry.watched_episodes, entry.total_episodes, entry.season
        );
        println!(
            "  {} | {} | {} | updated {}",
            entry.category, entry.genre, entry.note, entry.updated
        );
    }
    Ok(())
}
