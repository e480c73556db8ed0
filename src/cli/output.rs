//! Output formatting utilities

use crate::domain::JournalEntry;

/// Format the full journal for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }
    render_entries(entries)
}

/// Format query results for display
pub fn format_results(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found matching your query".to_string();
    }
    render_entries(entries)
}

fn render_entries(entries: &[JournalEntry]) -> String {
    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{}  {}\n", i + 1, entry.date));
        output.push_str(&format!("{}\n", entry.title));
        output.push_str(&format!("{}\n", entry.content));
        if entry.tags.is_empty() {
            output.push_str("Tags: None\n");
        } else {
            output.push_str(&format!("Tags: {}\n", entry.tags.join(", ")));
        }
        output.push_str(&format!("Id: {}\n", entry.id));
        output.push_str(&format!("{}\n", "-".repeat(30)));
    }
    output
}

/// Format the entry count for display
pub fn format_count(count: usize) -> String {
    format!("Total entries: {}", count)
}
