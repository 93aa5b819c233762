use super::Output;
use crate::cli::{CatalogArgs, CatalogEditArgs};
use anyhow::Result;
use watchlog_core::{genre_counts, CatalogDraft, ListFilter, Tracker};

pub fn list(
    tracker: &Tracker,
    output: &Output,
    names: Vec<String>,
    genres: Vec<String>,
) -> Result<()> {
    let filter = ListFilter {
        names: names.into_iter().collect(),
        genres: genres.into_iter().collect(),
    };
    let catalog = tracker.catalog();
    let rows = catalog.list(&filter);
    if output.json_rows(&rows)? {
        return Ok(());
    }

    println!("Catalog");
    println!("{:-<70}", "");
    for entry in &rows {
        println!(
            "#{} {} [{}] {} | {}",
            entry.list_id, entry.name, entry.category, entry.genre, entry.note
        );
        let preview = entry.description_preview();
        if !preview.is_empty() {
            println!("  {preview}");
        }
    }
    println!();
    println!(
        "Showing {} of {} entries",
        rows.len(),
        catalog.table().len()
    );

    let counts = genre_counts(rows.iter().copied());
    if counts.is_empty() {
        println!("No data for the genre summary.");
        return Ok(());
    }
    println!();
    println!("Entries per genre");
    for count in counts {
        println!("  {:<24} {}", count.genre, count.count);
    }
    Ok(())
}

pub fn add(tracker: &mut Tracker, args: CatalogArgs) -> Result<()> {
    let id = tracker.add_catalog_entry(CatalogDraft {
        list_id: args.id,
        name: args.name,
        note: args.note,
        category: args.category,
        genre: args.genre,
        description: args.description,
    })?;
    println!("✓ Saved catalog entry #{id}");
    Ok(())
}

pub fn edit(tracker: &mut Tracker, current_name: &str, fields: CatalogEditArgs) -> Result<()> {
    let Some(mut entry) = tracker
        .catalog()
        .table()
        .rows()
        .iter()
        .find(|entry| entry.name == current_name)
        .cloned()
    else {
        println!("No catalog entry named '{current_name}'.");
        println!("Use 'watchlog list' to see names.");
        return Ok(());
    };

    if let Some(id) = fields.id {
        entry.list_id = id;
    }
    if let Some(name) = fields.name {
        entry.name = name;
    }
    if let Some(note) = fields.note {
        entry.note = note;
    }
    if let Some(category) = fields.category {
        entry.category = category;
    }
    if let Some(genre) = fields.genre {
        entry.genre = genre;
    }
    if let Some(description) = fields.description {
        entry.description = description;
    }

    tracker.edit_catalog_entry(current_name, entry)?;
    println!("✓ Updated '{current_name}'");
    Ok(())
}

pub fn remove(tracker: &mut Tracker, name: &str) -> Result<()> {
    let removed = tracker.remove_catalog_entry(name)?;
    if removed == 0 {
        println!("No catalog entry named '{name}'.");
    } else {
        println!("✓ Removed {removed} catalog entr{}", plural_y(removed));
    }
    Ok(())
}

fn plural_y(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
