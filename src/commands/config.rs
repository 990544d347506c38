use clap::{Args, Subcommand};
use serde::Serialize;

use scaffold_kit::defaults::{self, Defaults, ScaffoldConfig};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore scaffold-kit.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Show the path to scaffold-kit.json
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<ScaffoldConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin, global),
        ConfigCommand::Path => path(global),
    }
}

fn show(builtin: bool, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    if builtin {
        return Ok((
            ConfigOutput {
                command: "config.show",
                config: None,
                defaults: Some(defaults::builtin_defaults()),
                path: None,
                exists: None,
            },
            0,
        ));
    }

    let (config, source) = defaults::load_config(global.config.as_deref())?;
    Ok((
        ConfigOutput {
            command: "config.show",
            config: Some(config),
            defaults: None,
            path: Some(source.path.display().to_string()),
            exists: Some(source.exists),
        },
        0,
    ))
}

fn path(global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let path = defaults::resolve_path(global.config.as_deref())?;
    Ok((
        ConfigOutput {
            command: "config.path",
            config: None,
            defaults: None,
            exists: Some(path.exists()),
            path: Some(path.display().to_string()),
        },
        0,
    ))
}
