//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. It talks to the list exclusively through
//! [`todoz::service::TodoService`].
//!
//! ## Naked Execution (`todoz`)
//!
//! Running `todoz` with no arguments defaults to `todoz list`.
//!
//! ## After Every Change
//!
//! Each mutating command prints a one-line status and then the whole list,
//! read back from the service. On error the message goes to stderr, the list
//! is left as it was, and the process exits with status 1.
//!
//! ## Data Directory
//!
//! Resolved in order: `--data-dir`, `$TODOZ_DATA`, the platform data dir.

mod commands;
mod print;
mod setup;

pub use commands::run;
