use super::print::{print_message, print_todos, print_todos_json, MessageLevel};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use todoz::config::{TodozConfig, CONFIG_KEYS};
use todoz::error::{Result, TodozError};
use todoz::logging;
use todoz::service::TodoService;
use todoz::store::fs::FileBackend;
use tracing::debug;

/// Environment variable overriding the data directory.
const DATA_DIR_ENV: &str = "TODOZ_DATA";

struct AppContext {
    service: TodoService<FileBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(&cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    // Config does not open the list, so it never creates one as a side effect
    match cli.command {
        Some(Commands::Config { key, value }) => {
            handle_config(&data_dir, key.as_deref(), value.as_deref())
        }
        Some(Commands::List { json }) => handle_list(&init_context(data_dir)?, json),
        Some(Commands::Add { title }) => {
            run_mutation(data_dir, |ctx| handle_add(ctx, title.join(" ")))
        }
        Some(Commands::Edit { id, title }) => {
            run_mutation(data_dir, |ctx| handle_edit(ctx, id, title.join(" ")))
        }
        Some(Commands::Delete { ids }) => run_mutation(data_dir, |ctx| handle_delete(ctx, &ids)),
        Some(Commands::Sort { desc }) => run_mutation(data_dir, |ctx| handle_sort(ctx, !desc)),
        None => handle_list(&init_context(data_dir)?, false),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodozError::Config("Could not determine a data directory".to_string()))
}

fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    let config = TodozConfig::load(&data_dir)?;
    let backend = FileBackend::new(data_dir);
    let service = TodoService::open(backend, config.storage_key.as_str(), config.seed())?;
    Ok(AppContext { service })
}

/// Runs a command that changes the list. A rejected change still shows the
/// list, which is untouched, before the error is reported.
fn run_mutation<F>(data_dir: PathBuf, handler: F) -> Result<()>
where
    F: FnOnce(&mut AppContext) -> Result<()>,
{
    let mut ctx = init_context(data_dir)?;
    let result = handler(&mut ctx);
    if result.is_err() {
        print_todos(&ctx.service.get_all());
    }
    result
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let todos = ctx.service.get_all();
    if json {
        return print_todos_json(&todos);
    }
    print_todos(&todos);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: String) -> Result<()> {
    let todo = ctx.service.add(&title)?;
    if todo.is_placeholder() {
        print_message(
            MessageLevel::Success,
            &format!(
                "Empty todo added ({}), give it a title with `todoz edit {} <title>`",
                todo.id, todo.id
            ),
        );
    } else {
        print_message(
            MessageLevel::Success,
            &format!("Todo added ({}): {}", todo.id, todo.title),
        );
    }
    handle_list(ctx, false)
}

fn handle_edit(ctx: &mut AppContext, id: u64, title: String) -> Result<()> {
    let todo = ctx.service.edit(id, &title)?;
    print_message(
        MessageLevel::Success,
        &format!("Todo updated ({}): {}", todo.id, todo.title),
    );
    handle_list(ctx, false)
}

fn handle_delete(ctx: &mut AppContext, ids: &[u64]) -> Result<()> {
    for id in ids {
        match ctx.service.delete(*id)? {
            Some(todo) => print_message(
                MessageLevel::Success,
                &format!("Todo deleted ({}): {}", todo.id, todo.title),
            ),
            None => print_message(MessageLevel::Warning, &format!("No todo with id {}", id)),
        }
    }
    handle_list(ctx, false)
}

fn handle_sort(ctx: &mut AppContext, ascending: bool) -> Result<()> {
    ctx.service.sort(ascending)?;
    let direction = if ascending { "A to Z" } else { "Z to A" };
    print_message(MessageLevel::Info, &format!("Sorted {}", direction));
    handle_list(ctx, false)
}

fn handle_config(data_dir: &Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = TodozConfig::load(data_dir)?;

    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(data_dir)?;
            print_message(
                MessageLevel::Success,
                &format!("{} set to {}", key, config.get(key)?),
            );
        }
    }
    Ok(())
}
