use super::Output;
use crate::cli::{ReadingArgs, ReadingCommands};
use anyhow::Result;
use watchlog_core::{ListFilter, ReadingDraft, ReadingItem, RecordId, Tracker};

pub fn run(tracker: &mut Tracker, output: &Output, command: ReadingCommands) -> Result<()> {
    match command {
        ReadingCommands::List => list(tracker, output),
        ReadingCommands::Add(args) => {
            let id = tracker.add_reading_item(ReadingDraft {
                name: args.name,
                kind: args.kind,
                genre: args.genre,
                description: args.description,
                progress: args.progress,
            })?;
            println!("✓ Reading item #{id} added");
            Ok(())
        }
        ReadingCommands::Edit { id, fields } => {
            if tracker.edit_reading_item(id, into_item(id, fields))? {
                println!("✓ Reading item #{id} updated");
            } else {
                println!("No reading item with ID {id}.");
            }
            Ok(())
        }
        ReadingCommands::Remove { name } => {
            let removed = tracker.remove_reading_item(&name)?;
            if removed == 0 {
                println!("No reading item named '{name}'.");
            } else {
                println!("✓ Removed {removed} reading item(s)");
            }
            Ok(())
        }
    }
}

fn into_item(id: RecordId, args: ReadingArgs) -> ReadingItem {
    ReadingItem {
        id,
        name: args.name,
        kind: args.kind,
        genre: args.genre,
        description: args.description,
        progress: args.progress,
    }
}

fn list(tracker: &Tracker, output: &Output) -> Result<()> {
    let rows = tracker.reading().list(&ListFilter::default());
    if output.json_rows(&rows)? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("Nothing in the reading list.");
        return Ok(());
    }

    println!("Reading ({} total)", rows.len());
    println!("{:-<70}", "");
    for item in rows {
        println!("#{} {} [{}] {}", item.id, item.name, item.kind, item.progress);
        println!("  {} | {}", item.genre, item.description);
    }
    Ok(())
}
