use clap::Parser;
use std::path::Path;
use std::process;

use glimpse::catalog::{load_catalog, CatalogItem};
use glimpse::{partition_results, rank_suggestions, Suggestion, SuggestionKind};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Suggest {
            catalog,
            query,
            json,
        } => run_suggest(&catalog, &query, json),
        Commands::Results {
            catalog,
            query,
            json,
        } => run_results(&catalog, &query, json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run_suggest(catalog_path: &str, query: &str, json: bool) -> Result<(), String> {
    let items = load_catalog(Path::new(catalog_path))?;
    let suggestions = rank_suggestions(query, &items);

    if json {
        let out = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| format!("Failed to serialize suggestions: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("no suggestions for {:?}", query);
        return Ok(());
    }

    print_group("Did you mean", &suggestions, SuggestionKind::Correction, &items);
    print_group("Completions", &suggestions, SuggestionKind::Completion, &items);
    print_group("Related", &suggestions, SuggestionKind::Related, &items);
    Ok(())
}

fn run_results(catalog_path: &str, query: &str, json: bool) -> Result<(), String> {
    let items = load_catalog(Path::new(catalog_path))?;
    let partition = partition_results(query, &items, CatalogItem::item_text);

    if json {
        let out = serde_json::to_string_pretty(&partition)
            .map_err(|e| format!("Failed to serialize partition: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    if partition.is_empty() {
        println!("no results for {:?}", query);
        return Ok(());
    }

    if !partition.exact.is_empty() {
        println!("{}", heading("Results"));
        for &idx in &partition.exact {
            println!("  {}", items[idx].title);
        }
    }
    if !partition.approximate.is_empty() {
        println!("{}", heading("Close matches"));
        for near in &partition.approximate {
            println!("  {} (distance {})", items[near.item].title, near.distance);
        }
    }
    Ok(())
}

fn print_group(
    label: &str,
    suggestions: &[Suggestion],
    kind: SuggestionKind,
    items: &[CatalogItem],
) {
    let group: Vec<&Suggestion> = suggestions.iter().filter(|s| s.kind == kind).collect();
    if group.is_empty() {
        return;
    }

    println!("{}", heading(label));
    for suggestion in group {
        match suggestion.item {
            Some(idx) => println!("  {} [{}]", suggestion.text, items[idx].id),
            None => println!("  {}", suggestion.text),
        }
    }
}

/// Bold the heading when stdout is a terminal, plain text when piped.
fn heading(label: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("\x1b[1m{}:\x1b[0m", label)
    } else {
        format!("{}:", label)
    }
}
