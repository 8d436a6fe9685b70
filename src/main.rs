//! mangashelf CLI
//!
//! Fuzzy search and relevance ranking over a manga library stored as a JSON
//! file. Two modes:
//! - `search` - run one query and print ranked results
//! - `interactive` - read queries from stdin, debounced, until EOF

mod cli;
mod debounce;
mod error;
mod library;
mod search;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use cli::{Cli, Commands, InteractiveArgs, SearchArgs};
use debounce::Debouncer;
use error::{validate_query, AppError};
use library::MangaEntry;
use search::{SearchEngine, SearchOptions, SearchResults};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Commands::Search(args) => execute_search(args),
        Commands::Interactive(args) => execute_interactive(args).await,
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// JSON shape for `search --json`
#[derive(Serialize)]
struct JsonResults<'a> {
    query: &'a str,
    result_count: usize,
    items: &'a [MangaEntry],
}

/// Execute the search command
fn execute_search(args: SearchArgs) -> Result<String, AppError> {
    validate_query(&args.query)?;

    let entries = library::load_library(&args.library)?;
    let engine = SearchEngine::new();
    let options = SearchOptions {
        case_sensitive: args.case_sensitive,
        fuzzy_match: !args.strict,
        min_chars: args.min_chars,
    };

    debug!(query = %args.query, strict = args.strict, "running search");
    let mut results = engine.search(&entries, &args.query, &options);

    if let Some(limit) = args.limit {
        results.items.truncate(limit);
    }

    if args.json {
        let output = JsonResults {
            query: &results.query,
            result_count: results.result_count,
            items: &results.items,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(format_results(&results, entries.len()))
    }
}

/// Execute the interactive command: one debounced search per stdin line
async fn execute_interactive(args: InteractiveArgs) -> Result<String, AppError> {
    let entries = Arc::new(library::load_library(&args.library)?);
    let engine = Arc::new(SearchEngine::new());
    let options = SearchOptions {
        fuzzy_match: !args.strict,
        min_chars: args.min_chars,
        ..Default::default()
    };

    info!(
        entries = entries.len(),
        wait_ms = args.wait_ms,
        "interactive mode, type a query and press enter (Ctrl-D to exit)"
    );

    let mut debouncer = Debouncer::new(Duration::from_millis(args.wait_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.map_err(AppError::from)? {
        if validate_query(&line).is_err() {
            eprintln!("Query too long, ignored");
            continue;
        }

        let entries = Arc::clone(&entries);
        let engine = Arc::clone(&engine);
        let options = options.clone();

        debouncer.call(move || {
            let results = engine.search(entries.as_slice(), &line, &options);
            println!("{}", format_results(&results, entries.len()));
        });
    }

    Ok(String::new())
}

/// Render ranked results as a text listing
fn format_results(results: &SearchResults<MangaEntry>, total: usize) -> String {
    if results.result_count == 0 {
        return format!("No matches for \"{}\" (searched {} entries)", results.query, total);
    }

    let mut output = format!(
        "{} of {} entries match \"{}\"\n",
        results.result_count, total, results.query
    );

    for (rank, entry) in results.items.iter().enumerate() {
        output.push_str(&format!("{:3}. {}", rank + 1, entry.title));
        if !entry.author.is_empty() {
            output.push_str(&format!(" by {}", entry.author));
        }
        if entry.chapter_count > 0 {
            output.push_str(&format!(" ({} chapters)", entry.chapter_count));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Map AppError to exit code
fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) => 1,
        AppError::LibraryLoad(_) => 3,
        AppError::Parse(_) | AppError::Internal(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, author: &str, chapters: u32) -> MangaEntry {
        MangaEntry {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            description: None,
            cover_url: None,
            categories: vec![],
            chapter_count: chapters,
        }
    }

    #[test]
    fn test_format_results_listing() {
        let results = SearchResults {
            items: vec![entry("1", "Naruto", "Kishimoto", 700)],
            query: "naruto".to_string(),
            result_count: 1,
        };

        let text = format_results(&results, 3);
        assert!(text.starts_with("1 of 3 entries match \"naruto\""));
        assert!(text.contains("Naruto by Kishimoto (700 chapters)"));
    }

    #[test]
    fn test_format_results_empty() {
        let results: SearchResults<MangaEntry> = SearchResults {
            items: vec![],
            query: "xyz123".to_string(),
            result_count: 0,
        };

        let text = format_results(&results, 3);
        assert!(text.contains("No matches for \"xyz123\""));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&AppError::InvalidInput(String::new())), 1);
        assert_eq!(exit_code(&AppError::LibraryLoad(String::new())), 3);
        assert_eq!(exit_code(&AppError::Parse(String::new())), 5);
        assert_eq!(exit_code(&AppError::Internal(String::new())), 5);
    }

    #[test]
    fn test_execute_search_end_to_end() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "1", "title": "Naruto", "author": "Kishimoto"}},
                {{"id": "2", "title": "One Piece", "author": "Oda"}},
                {{"id": "3", "title": "Naruto Shippuden", "author": "Kishimoto"}}
            ]"#
        )
        .unwrap();

        let args = SearchArgs {
            query: "naruto".to_string(),
            library: file.path().to_path_buf(),
            strict: false,
            case_sensitive: false,
            min_chars: 1,
            limit: None,
            json: false,
        };

        let output = execute_search(args).unwrap();
        assert!(output.contains("2 of 3 entries match"));
        assert!(output.contains("Naruto"));
        assert!(!output.contains("One Piece"));
    }

    #[test]
    fn test_execute_search_json_output() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "title": "Naruto", "author": "Kishimoto"}}]"#).unwrap();

        let args = SearchArgs {
            query: "naruto".to_string(),
            library: file.path().to_path_buf(),
            strict: false,
            case_sensitive: false,
            min_chars: 1,
            limit: None,
            json: true,
        };

        let output = execute_search(args).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["query"], "naruto");
        assert_eq!(parsed["result_count"], 1);
        assert_eq!(parsed["items"][0]["title"], "Naruto");
    }

    #[test]
    fn test_execute_search_missing_library() {
        let args = SearchArgs {
            query: "naruto".to_string(),
            library: "/nonexistent/shelf.json".into(),
            strict: false,
            case_sensitive: false,
            min_chars: 1,
            limit: None,
            json: false,
        };

        let err = execute_search(args).unwrap_err();
        assert_eq!(err.error_code(), "library_load_failed");
    }
}
