//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::parse_value;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::KeyPath;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the parsed command. Returns the process exit code.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<i32> {
    match &cli.command {
        Some(Commands::Get { file, key, default }) => {
            cmd_get(container, file, key.as_deref(), default.as_deref())
        }
        Some(Commands::Has { file, keys }) => cmd_has(container, file, keys),
        Some(Commands::Set {
            file,
            key,
            value,
            string,
        }) => cmd_set(container, file, key, value, *string),
        Some(Commands::Add {
            file,
            key,
            value,
            string,
        }) => cmd_add(container, file, key, value, *string),
        Some(Commands::Forget { file, keys }) => cmd_forget(container, file, keys),
        Some(Commands::Pull { file, key, default }) => {
            cmd_pull(container, file, key, default.as_deref())
        }
        Some(Commands::Keys { file, key }) => cmd_keys(container, file, key.as_deref()),
        Some(Commands::Query { file, key }) => cmd_query(container, file, key.as_deref()),
        Some(Commands::Tree { file }) => cmd_tree(container, file),
        Some(Commands::Config { command }) => cmd_config(container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(exitcode::OK)
        }
        None => Err(CliError::Usage(
            "no command given, see `dotpath --help`".to_string(),
        )),
    }
}

#[instrument(skip(container))]
fn cmd_get(
    container: &ServiceContainer,
    file: &Path,
    key: Option<&str>,
    default: Option<&str>,
) -> CliResult<i32> {
    let key = KeyPath::from(key);
    let default = default.map(|raw| parse_value(raw, false));
    let value = container.documents.get(file, &key, default)?;
    output::info(&output::render_value(&value));
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_has(container: &ServiceContainer, file: &Path, keys: &[String]) -> CliResult<i32> {
    let found = container.documents.has(file, keys)?;
    output::info(&found);
    Ok(if found { exitcode::OK } else { exitcode::MISSING })
}

#[instrument(skip(container))]
fn cmd_set(
    container: &ServiceContainer,
    file: &Path,
    key: &str,
    raw: &str,
    string: bool,
) -> CliResult<i32> {
    let value = parse_value(raw, string);
    debug!("parsed value: {}", value);
    container.documents.set(file, &KeyPath::from(key), value)?;
    output::success(&format!("set {} in {}", key, file.display()));
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_add(
    container: &ServiceContainer,
    file: &Path,
    key: &str,
    raw: &str,
    string: bool,
) -> CliResult<i32> {
    let value = parse_value(raw, string);
    if container.documents.add(file, &KeyPath::from(key), value)? {
        output::success(&format!("added {} to {}", key, file.display()));
    } else {
        output::warning(&format!("{} already set in {}, unchanged", key, file.display()));
    }
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_forget(container: &ServiceContainer, file: &Path, keys: &[String]) -> CliResult<i32> {
    if container.documents.forget(file, keys)? {
        output::success(&format!("removed {} from {}", keys.join(", "), file.display()));
    } else {
        output::warning(&format!("nothing to remove in {}", file.display()));
    }
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_pull(
    container: &ServiceContainer,
    file: &Path,
    key: &str,
    default: Option<&str>,
) -> CliResult<i32> {
    let default = default.map(|raw| parse_value(raw, false));
    let value = container.documents.pull(file, key, default)?;
    output::info(&output::render_value(&value));
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_keys(container: &ServiceContainer, file: &Path, key: Option<&str>) -> CliResult<i32> {
    let keys = container.documents.keys(file, &KeyPath::from(key))?;
    for key in keys {
        output::info(&key);
    }
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_query(container: &ServiceContainer, file: &Path, key: Option<&str>) -> CliResult<i32> {
    let query = container.documents.query(file, &KeyPath::from(key))?;
    output::info(&query);
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, file: &Path) -> CliResult<i32> {
    let doc = container.documents.load(file)?;
    let label = file.display().to_string();
    output::info(&output::value_tree(label, &doc.tree));
    Ok(exitcode::OK)
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let text = container.settings.to_toml()?;
            output::info(&text);
        }
        ConfigCommands::Path => {
            output::header("Config files (lowest to highest precedence)");
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::detail(&"global: <unavailable>"),
            }
            output::detail(&format!(
                "local:  {}",
                local_config_path(Path::new(".")).display()
            ));
            output::detail(&"env:    DOTPATH_*");
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or(InfraError::NoConfigDir)?
            } else {
                local_config_path(Path::new("."))
            };
            if container.fs.exists(&path) {
                return Err(InfraError::ConfigExists(path).into());
            }
            container
                .fs
                .ensure_parent(&path)
                .and_then(|_| container.fs.write(&path, &Settings::template()))
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
        }
    }
    Ok(exitcode::OK)
}
