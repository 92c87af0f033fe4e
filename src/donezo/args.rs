use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "donezo")]
#[command(about = "A small personal task list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the task database file (also settable via DONEZO_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Title of the task
        title: String,
    },

    /// List all tasks
    #[command(alias = "ls")]
    List,

    /// Mark a task as completed
    #[command(alias = "d")]
    Done {
        /// ID of the task to complete
        id: u64,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// ID of the task to delete
        id: u64,
    },

    /// Show completion progress
    Stats,
}
