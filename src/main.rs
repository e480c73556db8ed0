use clap::Parser;
use jotter::application::{
    add_entry, count_entries, filter_by_tag, list_entries, search_entries, ConfigService,
};
use jotter::cli::{format_count, format_entry_list, format_results};
use jotter::cli::{interactive, Cli, Commands};
use jotter::domain::parse_tags;
use jotter::error::JotterError;
use jotter::infrastructure::{Config, FileRepository};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Resolve the journal path (flag, then JOTTER_JOURNAL, then jotter.toml,
/// then the default journal.json) and open a repository over it.
fn open_repository(file: Option<&Path>) -> Result<FileRepository, JotterError> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    Ok(FileRepository::new(config.resolve_journal_path(file)))
}

fn run(cli: Cli) -> Result<(), JotterError> {
    match cli.command {
        Some(Commands::Add {
            title,
            content,
            tags,
        }) => {
            let repo = open_repository(cli.file.as_deref())?;

            let title = match title {
                Some(t) => t,
                None => interactive::require_input("Title")?,
            };
            let content = match content {
                Some(c) => c,
                None => interactive::require_input("Content")?,
            };
            let tags = match tags {
                Some(t) => t,
                None => {
                    interactive::prompt("Tags (comma-separated, optional)")?.unwrap_or_default()
                }
            };

            let entry = add_entry(&repo, title, content, parse_tags(&tags))?;
            println!("Added entry: '{}' successfully", entry.title);
            Ok(())
        }
        Some(Commands::List) => {
            let repo = open_repository(cli.file.as_deref())?;
            let entries = list_entries(&repo)?;
            println!("{}", format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Count) => {
            let repo = open_repository(cli.file.as_deref())?;
            let count = count_entries(&repo)?;
            println!("{}", format_count(count));
            Ok(())
        }
        Some(Commands::Search { query }) => {
            let repo = open_repository(cli.file.as_deref())?;
            let query = match query {
                Some(q) => q,
                None => interactive::require_input("Enter search query")?,
            };
            let results = search_entries(&repo, &query)?;
            println!("{}", format_results(&results));
            Ok(())
        }
        Some(Commands::Tag { tag }) => {
            let repo = open_repository(cli.file.as_deref())?;
            let tag = match tag {
                Some(t) => t,
                None => interactive::require_input("Enter tag to filter by")?,
            };
            let results = filter_by_tag(&repo, &tag)?;
            println!("{}", format_results(&results));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(std::env::current_dir()?);

            if list {
                let config = service.list()?;
                println!("journal = {}", config.journal.display());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: jotter config [--list | <key> [<value>]]");
                println!("Valid keys: journal");
            }
            Ok(())
        }
        None => {
            let repo = open_repository(cli.file.as_deref())?;
            interactive::run_menu(&repo)
        }
    }
}
