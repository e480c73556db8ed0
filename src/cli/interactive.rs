//! Interactive menu mode

use crate::application::{
    add_entry, count_entries, filter_by_tag, list_entries, search_entries,
};
use crate::cli::output::{format_count, format_entry_list, format_results};
use crate::domain::parse_tags;
use crate::error::Result;
use crate::infrastructure::EntryRepository;
use std::io::{self, BufRead, Write};

const MENU: &str = "Welcome to your journal!\n\
Choose an option:\n\
1. Add a new entry\n\
2. List all entries\n\
3. Count total entries\n\
4. Exit\n\
5. Help\n\
6. Search entries\n\
7. Filter entries by tag";

const HELP: &str =
    "Help: choose a number from the menu, or run jotter with a subcommand (see jotter --help)";

/// Print a prompt and read one line from stdin.
/// Returns None when the input stream is exhausted.
pub fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read a required value, failing when the input stream ends early.
pub fn require_input(label: &str) -> Result<String> {
    prompt(label)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into()
    })
}

/// Run the numbered menu loop until the user exits or input runs out.
/// Invalid choices are reported and re-prompted without touching the journal.
pub fn run_menu(repository: &impl EntryRepository) -> Result<()> {
    println!("{}", MENU);

    loop {
        let Some(choice) = prompt("Enter your choice (1-7)")? else {
            break;
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                let Some(title) = prompt("Title")? else { break };
                let Some(content) = prompt("Content")? else { break };
                let tags = prompt("Tags (comma-separated, optional)")?.unwrap_or_default();

                let entry = add_entry(repository, title, content, parse_tags(&tags))?;
                println!("Added entry: '{}' successfully", entry.title);
            }
            Ok(2) => {
                let entries = list_entries(repository)?;
                println!("{}", format_entry_list(&entries));
            }
            Ok(3) => {
                let count = count_entries(repository)?;
                println!("{}", format_count(count));
            }
            Ok(4) => {
                println!("Goodbye!");
                break;
            }
            Ok(5) => println!("{}", HELP),
            Ok(6) => {
                let Some(query) = prompt("Enter search query")? else { break };
                let results = search_entries(repository, &query)?;
                println!("{}", format_results(&results));
            }
            Ok(7) => {
                let Some(tag) = prompt("Enter tag to filter by")? else { break };
                let results = filter_by_tag(repository, &tag)?;
                println!("{}", format_results(&results));
            }
            _ => println!("Invalid choice. Please enter a number from 1 to 7."),
        }
    }

    Ok(())
}
