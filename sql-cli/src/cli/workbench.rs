// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for QueryLite

use colored::Colorize;
use rustyline::history::DefaultHistory;
use rustyline::{error::ReadlineError, CompletionType, Config, EditMode, Editor};
use std::path::PathBuf;

use querylite::artifacts::ArtifactStore;
use querylite::editor::EditorState;
use querylite::view::ResultsView;
use querylite::{
    export, provider, Error, QueryResult, RunSource, StoreAdapter, StoreTarget,
    WorkbenchCoordinator,
};

use super::commands::OutputFormat;
use super::completer::WorkbenchHelper;
use super::output::ResultFormatter;

/// Handle the init command
///
/// Creates the database file and establishes the baseline objects using
/// an adapter that lives only for this command. Seeding is idempotent,
/// so running init against an existing file never duplicates seed rows.
pub fn handle_init(path: PathBuf, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        println!(
            "{}",
            format!("Database already exists at {:?}", path).yellow()
        );
        println!("Use --force to re-run the seed, or choose a different path.");
        return Err("Database already exists".into());
    }

    println!("{}", "Initializing QueryLite...".bold().green());
    println!("  → Creating database file...");

    let adapter = StoreAdapter::open(&path)
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    println!("  → Seeding baseline objects...");
    let schema = adapter.list_tables();
    for (table, columns) in schema.iter() {
        println!("    {} ({})", table, columns.join(", "));
    }

    println!(
        "{}",
        format!("\nQueryLite initialized at {:?}", path).green()
    );
    println!("{}", "\nStart the workbench with:".yellow());
    println!("{}", format!("  querylite sql --path {:?}", path).cyan());
    println!("{}", "\nOr execute queries directly:".yellow());
    println!(
        "{}",
        format!("  querylite query --path {:?} \"SELECT * FROM users\"", path).cyan()
    );

    // Adapter drops here, closing the connection
    Ok(())
}

/// Handle the sql (workbench REPL) command
pub fn handle_sql(
    path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = match path {
        Some(p) => StoreTarget::OnDisk(p),
        None => StoreTarget::InMemory,
    };

    // Initialize-once handle; a failure here is a "not ready" state and
    // the next launch retries.
    let adapter = provider::initialize(&target)
        .map_err(|e| format!("Database not ready: {}", e))?;

    let data_dir = data_dir.unwrap_or_else(default_data_dir);
    let artifacts = ArtifactStore::open(&data_dir)?;
    let mut coordinator = WorkbenchCoordinator::with_adapter(adapter, artifacts);
    let mut editor = EditorState::new();
    let mut view = ResultsView::new();

    println!("{}", "QueryLite".bold().green());
    println!("Type 'help' for commands, 'exit' or 'quit' to exit");
    println!("Multi-line queries supported - use ';' to terminate\n");
    if target == StoreTarget::InMemory {
        println!("{}", "Transient in-memory database (data is not persisted)".yellow());
    }

    // Create REPL editor
    let config = Config::builder()
        .edit_mode(EditMode::Emacs)
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();

    let mut rl = Editor::<WorkbenchHelper, DefaultHistory>::with_config(config)?;
    rl.set_helper(Some(WorkbenchHelper::new(coordinator.schema().clone())));

    let history_path = data_dir.join(".sql_history.txt");
    let _ = rl.load_history(&history_path);

    let mut query_buffer = String::new();
    // Text of the last executed query, offered to `save`
    let mut last_query: Option<String> = None;

    loop {
        let prompt = if query_buffer.is_empty() {
            "sql> ".to_string()
        } else {
            "...> ".to_string()
        };

        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if !query_buffer.is_empty() {
                    query_buffer.clear();
                    println!("{}", "\nQuery buffer cleared".yellow());
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let trimmed = line.trim();

        // Handle workbench commands (only when no query is in progress)
        if query_buffer.is_empty() {
            match parse_command(trimmed) {
                Command::Exit => {
                    println!("{}", "Goodbye!".green());
                    break;
                }
                Command::Help => {
                    print_help();
                    continue;
                }
                Command::Clear => {
                    print!("\x1B[2J\x1B[1;1H");
                    std::io::Write::flush(&mut std::io::stdout()).unwrap();
                    continue;
                }
                Command::Empty => continue,
                Command::Tables => {
                    print!("{}", ResultFormatter::format_schema(coordinator.schema()));
                    continue;
                }
                Command::Log => {
                    show_log(&coordinator);
                    continue;
                }
                Command::History => {
                    show_history(&coordinator);
                    continue;
                }
                Command::Saved => {
                    show_saved(&coordinator);
                    continue;
                }
                Command::Save(name) => {
                    match last_query.clone() {
                        Some(text) => match coordinator.artifacts().save_query(&name, &text) {
                            Ok(saved) => {
                                println!("{}", format!("Saved '{}'", saved.name).green())
                            }
                            Err(Error::Validation(msg)) => println!("{}", msg.yellow()),
                            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                        },
                        None => println!("{}", "Nothing to save - run a query first".yellow()),
                    }
                    continue;
                }
                Command::Load(index) => {
                    let saved = coordinator.artifacts().saved_queries();
                    match index.checked_sub(1).and_then(|i| saved.get(i)) {
                        Some(q) => {
                            // Load into the editor buffer; the user runs it
                            // by terminating with ';'
                            query_buffer = q.query.trim_end_matches(';').trim_end().to_string();
                            query_buffer.push('\n');
                            println!("{}", format!("Loaded '{}':", q.name).green());
                            println!("{}", q.query.cyan());
                            println!("{}", "Type ';' to run it, Ctrl-C to discard".yellow());
                        }
                        None => println!("{}", "No such saved query - see 'saved'".yellow()),
                    }
                    continue;
                }
                Command::Delete(index) => {
                    let saved = coordinator.artifacts().saved_queries();
                    match index.checked_sub(1).and_then(|i| saved.get(i)) {
                        Some(q) => match coordinator.artifacts().delete_query(&q.id) {
                            Ok(()) => println!("{}", format!("Deleted '{}'", q.name).green()),
                            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                        },
                        None => println!("{}", "No such saved query - see 'saved'".yellow()),
                    }
                    continue;
                }
                Command::Search(term) => {
                    view.set_search(&term);
                    show_current_page(&coordinator, &view);
                    continue;
                }
                Command::Page(page) => {
                    view.set_page(page);
                    show_current_page(&coordinator, &view);
                    continue;
                }
                Command::Export(file) => {
                    export_results(&coordinator, file);
                    continue;
                }
                Command::Sql => {}
            }
        }

        // Append line to buffer
        query_buffer.push_str(&line);
        query_buffer.push('\n');

        // Check if query is complete (ends with semicolon)
        if trimmed.ends_with(';') {
            let query = query_buffer.trim().to_string();
            query_buffer.clear();
            rl.add_history_entry(&query)?;

            // Synchronize the editor buffer and gate the execute trigger
            editor.set_buffer(query.clone());
            let Some(text) = editor.run_request(coordinator.is_ready()) else {
                println!("{}", "Database not ready".yellow());
                continue;
            };
            let text = text.to_string();

            editor.set_read_only(true);
            let outcome = coordinator.run_query(&text, RunSource::Editor);
            editor.set_read_only(false);

            match outcome {
                Ok(result) => {
                    last_query = Some(query);
                    show_result(&coordinator, &view, &result);
                }
                Err(Error::Validation(msg)) => println!("{}", msg.yellow()),
                Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
            }

            // Completions follow the refreshed snapshot
            if let Some(helper) = rl.helper_mut() {
                helper.set_schema(coordinator.schema().clone());
            }
        }
    }

    // Save REPL line history
    let _ = rl.save_history(&history_path);

    Ok(())
}

/// Handle the query command (one-off query execution)
pub fn handle_query(
    path: Option<PathBuf>,
    query: String,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = match path {
        Some(p) => StoreTarget::OnDisk(p),
        None => StoreTarget::InMemory,
    };

    let adapter = provider::initialize(&target)
        .map_err(|e| format!("Database not ready: {}", e))?;
    let artifacts = ArtifactStore::open(default_data_dir())?;
    let mut coordinator = WorkbenchCoordinator::with_adapter(adapter, artifacts);

    // One-off runs are not editor submissions; they stay out of history
    match coordinator.run_query(&query, RunSource::Adhoc) {
        Ok(result) => {
            print!("{}", ResultFormatter::format(&result, format));
            if result.is_error() {
                Err(Error::Execution(result.message).into())
            } else {
                Ok(())
            }
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            Err(e.into())
        }
    }
}

/// Workbench commands typed at an empty prompt
enum Command {
    Empty,
    Exit,
    Help,
    Clear,
    Tables,
    Log,
    History,
    Saved,
    Save(String),
    Load(usize),
    Delete(usize),
    Search(String),
    Page(usize),
    Export(Option<PathBuf>),
    /// Not a command: treat the line as SQL
    Sql,
}

fn parse_command(trimmed: &str) -> Command {
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default().to_lowercase();
    let rest = parts.next().unwrap_or("").trim();

    match head.as_str() {
        "" => Command::Empty,
        "exit" | "quit" => Command::Exit,
        "help" => Command::Help,
        "clear" => Command::Clear,
        "tables" => Command::Tables,
        "log" => Command::Log,
        "history" => Command::History,
        "saved" => Command::Saved,
        "save" => Command::Save(rest.to_string()),
        "load" => match rest.parse() {
            Ok(n) => Command::Load(n),
            Err(_) => Command::Sql,
        },
        "delete" => match rest.parse() {
            Ok(n) => Command::Delete(n),
            Err(_) => Command::Sql,
        },
        "search" => Command::Search(rest.to_string()),
        "page" => match rest.parse() {
            Ok(n) => Command::Page(n),
            Err(_) => Command::Sql,
        },
        "export" => Command::Export(if rest.is_empty() {
            None
        } else {
            Some(PathBuf::from(rest))
        }),
        _ => Command::Sql,
    }
}

/// Render the outcome of a run: the message line plus the current page
/// of the (possibly filtered) cached result
fn show_result(coordinator: &WorkbenchCoordinator, view: &ResultsView, result: &QueryResult) {
    if result.is_error() {
        eprintln!("{}", format!("Error: {}", result.message).red());
        return;
    }

    println!(
        "{} {}",
        result.message.green(),
        format!("({} ms)", result.duration_ms).dimmed()
    );
    show_current_page(coordinator, view);
}

fn show_current_page(coordinator: &WorkbenchCoordinator, view: &ResultsView) {
    match coordinator.result() {
        Some(cached) => {
            let page = view.paginate(&cached.rows);
            print!(
                "{}",
                ResultFormatter::format_page(coordinator.columns(), &page, view.search())
            );
        }
        None => println!("{}", "No results".yellow()),
    }
}

fn show_log(coordinator: &WorkbenchCoordinator) {
    if coordinator.log_len() == 0 {
        println!("{}", "No executions yet".yellow());
        return;
    }
    for entry in coordinator.log_entries() {
        let status = match entry.status {
            querylite::QueryStatus::Success => "ok ".green(),
            querylite::QueryStatus::Error => "err".red(),
        };
        let when = chrono::DateTime::from_timestamp_millis(entry.timestamp_ms)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default();
        let duration = entry
            .duration_ms
            .map(|d| format!(" [{} ms]", d))
            .unwrap_or_default();
        println!("  {} {} {}{}", when.dimmed(), status, entry.message, duration);
    }
}

fn show_history(coordinator: &WorkbenchCoordinator) {
    let history = coordinator.artifacts().history();
    if history.is_empty() {
        println!("{}", "History is empty".yellow());
        return;
    }
    for (i, item) in history.iter().enumerate() {
        let when = chrono::DateTime::from_timestamp_millis(item.timestamp_ms)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        println!("  {:>3}. {} {}", i + 1, when.dimmed(), item.query);
    }
}

fn show_saved(coordinator: &WorkbenchCoordinator) {
    let saved = coordinator.artifacts().saved_queries();
    if saved.is_empty() {
        println!("{}", "No saved queries".yellow());
        return;
    }
    for (i, q) in saved.iter().enumerate() {
        println!("  {:>3}. {} - {}", i + 1, q.name.green(), q.query);
    }
}

fn export_results(coordinator: &WorkbenchCoordinator, file: Option<PathBuf>) {
    let Some(cached) = coordinator.result() else {
        println!("{}", "No results to export".yellow());
        return;
    };

    let path = file.unwrap_or_else(|| PathBuf::from(export::export_filename(chrono::Utc::now())));
    let csv = export::export_csv(cached);
    match std::fs::write(&path, csv) {
        Ok(()) => println!(
            "{}",
            format!("Exported {} row(s) to {:?}", cached.rows.len(), path).green()
        ),
        Err(e) => eprintln!("{}", format!("Export failed: {}", e).red()),
    }
}

fn default_data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".querylite")
}

/// Print help message
fn print_help() {
    println!("{}", "Available commands:".bold().green());
    println!("  {}          - Show this help message", "help".cyan());
    println!("  {}     - Exit the workbench", "exit/quit".cyan());
    println!("  {}         - Clear the screen", "clear".cyan());
    println!("  {}        - List tables and columns", "tables".cyan());
    println!("  {}           - Show the execution log (last 50)", "log".cyan());
    println!("  {}       - Show run history", "history".cyan());
    println!("  {}         - List saved queries", "saved".cyan());
    println!("  {}   - Save the last query under a name", "save <name>".cyan());
    println!("  {}      - Load a saved query into the editor", "load <n>".cyan());
    println!("  {}    - Delete a saved query", "delete <n>".cyan());
    println!("  {} - Filter result rows (empty to clear)", "search [term]".cyan());
    println!("  {}      - Jump to a result page", "page <n>".cyan());
    println!("  {} - Write results as CSV", "export [file]".cyan());
    println!("\n{}", "Query syntax:".bold().green());
    println!("  Multi-line queries are supported");
    println!("  Terminate queries with semicolon (;)");
    println!("\n{}", "Examples:".bold().green());
    println!("  {}", "SELECT * FROM users;".yellow());
    println!("  {}", "CREATE TABLE notes (id INTEGER, body TEXT);".yellow());
    println!("  {}", "search alice".yellow());
}
