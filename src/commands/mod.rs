use clap::Args;

use scaffold_kit::defaults::{self, ScaffoldConfig};
use scaffold_kit::naming::{self, ProjectName, RepoName};

pub type CmdResult<T> = scaffold_kit::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub config: Option<String>,
}

/// Initial value of the package-name field.
pub const DEFAULT_PACKAGE_NAME: &str = "example_package";

/// Shared positional argument for the free-text package name.
///
/// When omitted, the name is prompted for on a terminal or read from the
/// first line of piped stdin.
#[derive(Args, Default, Debug)]
pub struct NameInput {
    /// Package name, as typed (spaces and hyphens become underscores)
    #[arg(value_name = "NAME")]
    pub raw: Option<String>,
}

impl NameInput {
    /// Resolve the raw text, then normalize it and derive the repository name.
    pub fn derive(self) -> scaffold_kit::Result<(ProjectName, RepoName)> {
        let raw = resolve_raw(self.raw)?;
        Ok(naming::derive(&raw))
    }
}

fn resolve_raw(raw: Option<String>) -> scaffold_kit::Result<String> {
    if let Some(raw) = raw {
        return Ok(raw);
    }

    if crate::tty::is_stdin_tty() {
        let entered = crate::tty::prompt(&format!(
            "Enter your package name (lowercase letters and underscores only!) [{}]: ",
            DEFAULT_PACKAGE_NAME
        ))?;
        return Ok(match entered {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_PACKAGE_NAME.to_string(),
        });
    }

    Ok(crate::tty::read_line()?.unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string()))
}

pub(crate) fn load_config(global: &GlobalArgs) -> scaffold_kit::Result<ScaffoldConfig> {
    let (config, _source) = defaults::load_config(global.config.as_deref())?;
    Ok(config)
}

/// Fail on a bad `--config` path even in commands that read no defaults.
pub(crate) fn check_explicit_config(global: &GlobalArgs) -> scaffold_kit::Result<()> {
    if global.config.is_some() {
        load_config(global)?;
    }
    Ok(())
}

pub mod config;
pub mod env;
pub mod guide;
pub mod layout;
pub mod mkdocs;
pub mod name;
pub mod pyproject;

pub(crate) fn run_markdown(
    command: crate::Commands,
    global: &GlobalArgs,
) -> scaffold_kit::Result<(String, i32)> {
    match command {
        crate::Commands::Guide(args) => guide::run_markdown(args, global),
        _ => Err(scaffold_kit::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support markdown output",
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (scaffold_kit::Result<serde_json::Value>, i32) {
    crate::tty::status("scaffold-kit is working...");

    match command {
        crate::Commands::Name(args) => dispatch!(args, global, name),
        crate::Commands::Layout(args) => dispatch!(args, global, layout),
        crate::Commands::Mkdocs(args) => dispatch!(args, global, mkdocs),
        crate::Commands::Env(args) => dispatch!(args, global, env),
        crate::Commands::Pyproject(args) => dispatch!(args, global, pyproject),
        crate::Commands::Config(args) => dispatch!(args, global, config),

        // Guide uses raw output mode
        crate::Commands::Guide(_) => {
            let err = scaffold_kit::Error::validation_invalid_argument(
                "output_mode",
                "Guide command uses raw output mode",
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}
