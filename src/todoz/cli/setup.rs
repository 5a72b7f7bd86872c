use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version)]
#[command(about = "A small, write-through todo list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the todo list and config
    /// (defaults to $TODOZ_DATA or the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos
    #[command(alias = "ls")]
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a todo (no title adds an empty one to fill in later)
    #[command(alias = "a")]
    Add {
        /// Title words, joined with spaces
        #[arg(num_args = 0..)]
        title: Vec<String>,
    },

    /// Rename a todo
    #[command(alias = "e")]
    Edit {
        /// Id of the todo
        id: u64,

        /// New title words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete one or more todos (unknown ids are ignored)
    #[command(alias = "rm")]
    Delete {
        /// Ids of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Sort todos by title, dropping the empty one
    Sort {
        /// Sort Z to A
        #[arg(short, long)]
        desc: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, seed-placeholder)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
