//! CLI probe for `todolist_core`.
//!
//! # Responsibility
//! - Verify core crate linkage (`ping`).
//! - Drive the category list flows against a database file without a UI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use todolist_core::db::open_db;
use todolist_core::reminder::memory::{InMemoryCalendarStore, InMemoryNotificationCenter};
use todolist_core::{
    default_log_level, init_logging, Category, CategoryService, HexColor, Item, ItemRepository,
    SqliteCategoryRepository, SqliteItemRepository,
};

#[derive(Parser, Debug)]
#[command(
    name = "todolist",
    version,
    about = "Category list flows over a local to-do database"
)]
struct Cli {
    /// Database file, created when missing.
    #[arg(long, global = true, default_value = "todolist.sqlite3")]
    db: PathBuf,

    /// Directory for rolling log files; logging stays off when unset.
    #[arg(long, global = true, env = "TODOLIST_LOG_DIR")]
    log_dir: Option<String>,

    #[arg(long, global = true, env = "TODOLIST_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// List categories in display order.
    List,
    /// Add a category with a random color.
    Add { name: String },
    /// Add an item to the category at ROW.
    AddItem { row: usize, title: String },
    /// Delete the category at ROW with its items and reminders.
    Delete { row: usize },
    /// Change the color of the category at ROW.
    Color { row: usize, hex: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Command::Ping = cli.command {
        println!("todolist_core ping={}", todolist_core::ping());
        println!("todolist_core version={}", todolist_core::core_version());
        return Ok(());
    }

    let conn = open_db(&cli.db).map_err(|err| err.to_string())?;
    // No device here: reminders are cleaned up against in-process stand-ins.
    let notifications = InMemoryNotificationCenter::default();
    let calendar = InMemoryCalendarStore::default();
    let service = CategoryService::new(
        SqliteCategoryRepository::new(&conn),
        &notifications,
        &calendar,
    );
    let row_category = |row: usize| -> Result<Category, String> {
        service
            .category_at(row)
            .map_err(|err| err.to_string())?
            .ok_or_else(|| format!("no category at row {row}"))
    };

    match &cli.command {
        Command::Ping | Command::List => {}
        Command::Add { name } => {
            service.add_category(name).map_err(|err| err.to_string())?;
        }
        Command::AddItem { row, title } => {
            let category = row_category(*row)?;
            SqliteItemRepository::new(&conn)
                .create_item(&Item::new(category.uuid, title.as_str()))
                .map_err(|err| err.to_string())?;
        }
        Command::Delete { row } => {
            let category = row_category(*row)?;
            let report = service
                .delete_category(category.uuid)
                .map_err(|err| err.to_string())?;
            println!(
                "deleted 1 category, {} item(s), {} cleanup failure(s)",
                report.removed_items,
                report.cleanup_failures()
            );
        }
        Command::Color { row, hex } => {
            let category = row_category(*row)?;
            let color = HexColor::parse(hex).map_err(|err| err.to_string())?;
            let request = service
                .begin_color_edit(category.uuid)
                .map_err(|err| err.to_string())?;
            service
                .confirm_color_edit(&request, color)
                .map_err(|err| err.to_string())?;
        }
    }

    let categories = service.list_categories().map_err(|err| err.to_string())?;
    for (row, category) in categories.iter().enumerate() {
        println!(
            "{row}\t{}\t{}\t{} item(s)",
            category.color,
            category.name,
            category.items.len()
        );
    }
    Ok(())
}
