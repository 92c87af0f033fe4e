use clap::Parser;
use colored::*;
use donezo::chart;
use donezo::config;
use donezo::error::Result;
use donezo::model::Task;
use donezo::store::fs::FileBackend;
use donezo::store::TaskStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let db_path = config::resolve_db_path(cli.db);
    let mut store = TaskStore::open(FileBackend::new(db_path))?;

    match cli.command {
        Some(Commands::Add { title }) => handle_add(&mut store, &title),
        Some(Commands::List) | None => handle_list(&store),
        Some(Commands::Done { id }) => handle_done(&mut store, id),
        Some(Commands::Delete { id }) => handle_delete(&mut store, id),
        Some(Commands::Stats) => handle_stats(&store),
    }
}

fn handle_add(store: &mut TaskStore<FileBackend>, title: &str) -> Result<()> {
    let id = store.add(title)?;
    println!("{}", format!("Task added (ID: {})", id).green());
    Ok(())
}

fn handle_list(store: &TaskStore<FileBackend>) -> Result<()> {
    let tasks = store.list();
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    for task in &tasks {
        print_task(task);
    }
    Ok(())
}

fn handle_done(store: &mut TaskStore<FileBackend>, id: u64) -> Result<()> {
    store.complete(id)?;
    println!("{}", format!("Task {} marked as complete.", id).green());
    Ok(())
}

fn handle_delete(store: &mut TaskStore<FileBackend>, id: u64) -> Result<()> {
    store.delete(id)?;
    println!("{}", format!("Task {} deleted.", id).green());
    Ok(())
}

fn handle_stats(store: &TaskStore<FileBackend>) -> Result<()> {
    let stats = store.stats();
    println!("Total:     {}", stats.total);
    println!("Completed: {}", stats.completed);
    println!("Pending:   {}", stats.pending);
    println!("Rate:      {:.1}%", stats.completion_rate);
    if let Some(bar) = chart::render(&stats) {
        println!();
        println!("{}", bar);
    }
    Ok(())
}

fn print_task(task: &Task) {
    if task.completed {
        println!("{:>3}. [x] {}", task.id, task.title.dimmed());
    } else {
        println!("{:>3}. [ ] {}", task.id, task.title);
    }
}
