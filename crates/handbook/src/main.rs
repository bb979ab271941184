//! `cmdbook` - CLI for commandbook
//!
//! This binary provides the command-line interface for searching the command
//! catalog, inspecting entries, browsing example groups, and copying example
//! invocations to the clipboard.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;
use clipboard_rs::{Clipboard, ClipboardContext};

use commandbook::cli::{
    Cli, Command, ConfigCommand, CopyCommand, ExamplesCommand, InteractiveCommand, ListCommand,
    OutputFormat, SearchCommand, ShowCommand, StatsCommand,
};
use commandbook::{
    init_logging, Catalog, CommandEntry, Config, Error, ExampleLibrary, SearchIndex,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Search(cmd) => handle_search(&config, &cmd)?,
        Command::Show(cmd) => handle_show(&config, &cmd)?,
        Command::Copy(cmd) => handle_copy(&config, &cmd)?,
        Command::List(cmd) => handle_list(&config, &cmd)?,
        Command::Examples(cmd) => handle_examples(&config, &cmd)?,
        Command::Interactive(cmd) => handle_interactive(&config, &cmd)?,
        Command::Stats(cmd) => handle_stats(&config, &cmd)?,
        Command::Config(cmd) => handle_config(&config, cmd)?,
    }
    Ok(())
}

/// Load the command catalog, honoring a configured override file.
fn load_catalog(config: &Config) -> commandbook::Result<Catalog> {
    match &config.catalog.commands_path {
        Some(path) => Catalog::from_file(path),
        None => Catalog::builtin(),
    }
}

/// Load the example library, honoring a configured override file.
fn load_examples(config: &Config) -> commandbook::Result<ExampleLibrary> {
    match &config.catalog.examples_path {
        Some(path) => ExampleLibrary::from_file(path),
        None => ExampleLibrary::builtin(),
    }
}

fn handle_search(config: &Config, cmd: &SearchCommand) -> commandbook::Result<()> {
    let catalog = load_catalog(config)?;
    let index = SearchIndex::build(catalog.into_entries());

    let limit = cmd.limit.unwrap_or(config.search.result_limit);
    let results = index.search(&cmd.query, limit);

    if results.is_empty() {
        println!("No commands found");
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Table => {
            print_entry_table(&results);
        }
        OutputFormat::Plain => {
            for entry in results {
                println!("{}  {}", entry.name, entry.description);
                println!("    {}", entry.example);
            }
        }
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> commandbook::Result<()> {
    let catalog = load_catalog(config)?;
    let index = SearchIndex::build(catalog.into_entries());

    let Some(entry) = index.lookup(&cmd.name) else {
        println!("No command named '{}'", cmd.name);
        return Ok(());
    };

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        OutputFormat::Plain | OutputFormat::Table => {
            println!("{}", entry.name);
            println!("{}", "-".repeat(entry.name.len()));
            println!("Category:    {}", entry.category);
            println!("Difficulty:  {}", entry.difficulty);
            println!("Description: {}", entry.description);
            println!("Syntax:      {}", entry.syntax);
            println!("Example:     {}", entry.example);
            if !entry.tags.is_empty() {
                println!("Tags:        {}", entry.tags.join(", "));
            }
        }
    }
    Ok(())
}

fn handle_copy(config: &Config, cmd: &CopyCommand) -> commandbook::Result<()> {
    let catalog = load_catalog(config)?;
    let index = SearchIndex::build(catalog.into_entries());

    // Not-found is a quiet no-op, not an error.
    let Some(entry) = index.lookup(&cmd.name) else {
        println!("No command named '{}'; nothing copied", cmd.name);
        return Ok(());
    };

    let ctx = ClipboardContext::new().map_err(|e| Error::clipboard(e.to_string()))?;
    ctx.set_text(entry.example.clone())
        .map_err(|e| Error::clipboard(e.to_string()))?;

    println!("Copied to clipboard: {}", entry.example);
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> commandbook::Result<()> {
    let catalog = load_catalog(config)?;
    let difficulty = cmd.difficulty.map(commandbook::Difficulty::from);

    let entries: Vec<&CommandEntry> = catalog
        .entries()
        .iter()
        .filter(|e| cmd.category.as_deref().map_or(true, |c| e.category == c))
        .filter(|e| difficulty.map_or(true, |d| e.difficulty == d))
        .collect();

    if entries.is_empty() {
        println!("No commands found");
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Table => {
            print_entry_table(&entries);
        }
        OutputFormat::Plain => {
            for entry in entries {
                println!("{}  {}", entry.name, entry.description);
            }
        }
    }
    Ok(())
}

fn handle_examples(config: &Config, cmd: &ExamplesCommand) -> commandbook::Result<()> {
    let library = load_examples(config)?;
    let difficulty = cmd.difficulty.map(commandbook::Difficulty::from);

    let groups = library.filter(cmd.category.as_deref(), difficulty);

    if groups.is_empty() {
        println!("No example groups found");
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        OutputFormat::Plain | OutputFormat::Table => {
            for group in groups {
                println!("{} [{} / {}]", group.title, group.category, group.difficulty);
                println!("  {}", group.use_case);
                for example in &group.commands {
                    println!();
                    println!("  {} - {}", example.name, example.description);
                    println!("    $ {}", example.command);
                    println!("    {}", example.explanation);
                }
                println!();
            }
        }
    }
    Ok(())
}

fn handle_interactive(config: &Config, cmd: &InteractiveCommand) -> commandbook::Result<()> {
    let catalog = load_catalog(config)?;
    let index = SearchIndex::build(catalog.into_entries());
    let limit = cmd.limit.unwrap_or(config.search.suggestion_limit);

    println!("Type a query; an empty line or EOF quits.");
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let results = index.search(query, limit);
        if results.is_empty() {
            println!("  no matches");
            continue;
        }
        for entry in results {
            println!("  {:<12} {}", entry.name, entry.description);
        }
    }
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> commandbook::Result<()> {
    let catalog = load_catalog(config)?;
    let library = load_examples(config)?;
    let counts = catalog.category_counts();

    if cmd.json {
        let stats = serde_json::json!({
            "total_commands": catalog.len(),
            "example_groups": library.len(),
            "categories": counts
                .iter()
                .map(|(name, count)| serde_json::json!({ "name": name, "count": count }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("cmdbook catalog");
        println!("---------------");
        println!("Commands:       {}", catalog.len());
        println!("Example groups: {}", library.len());
        println!();
        println!("Commands by category:");
        for (name, count) in counts {
            println!("  {name:<14} {count}");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> commandbook::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Search]");
                println!("  Result limit:     {}", config.search.result_limit);
                println!("  Suggestion limit: {}", config.search.suggestion_limit);
                println!("  Debounce (ms):    {}", config.search.debounce_ms);
                println!();
                println!("[Catalog]");
                println!(
                    "  Commands path:    {}",
                    config
                        .catalog
                        .commands_path
                        .as_ref()
                        .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
                );
                println!(
                    "  Examples path:    {}",
                    config
                        .catalog
                        .examples_path
                        .as_ref()
                        .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

/// Print entries as an aligned table.
fn print_entry_table(entries: &[&CommandEntry]) {
    let name_width = entries
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let category_width = entries
        .iter()
        .map(|e| e.category.len())
        .max()
        .unwrap_or(0)
        .max("CATEGORY".len());

    println!(
        "{:<name_width$}  {:<category_width$}  {:<12}  DESCRIPTION",
        "NAME", "CATEGORY", "DIFFICULTY"
    );
    for entry in entries {
        println!(
            "{:<name_width$}  {:<category_width$}  {:<12}  {}",
            entry.name,
            entry.category,
            entry.difficulty.to_string(),
            entry.description
        );
    }
}
