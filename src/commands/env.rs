use clap::Args;
use serde::Serialize;

use scaffold_kit::naming::{ProjectName, RepoName};
use scaffold_kit::scaffold;

use super::{CmdResult, GlobalArgs, NameInput};

#[derive(Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub input: NameInput,

    /// Python version pinned in the environment (overrides config)
    #[arg(long, value_name = "VERSION")]
    pub python: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvOutput {
    pub command: &'static str,
    pub project_name: ProjectName,
    pub repo_name: RepoName,
    pub environment_name: String,
    pub environment_yml: String,
}

pub fn run(args: EnvArgs, global: &GlobalArgs) -> CmdResult<EnvOutput> {
    let config = super::load_config(global)?;
    let mut environment = config.defaults.environment;
    if let Some(python) = args.python {
        environment.python_version = python;
    }

    let (project_name, repo_name) = args.input.derive()?;
    let environment_yml = scaffold::environment_yml(&repo_name, &environment);

    Ok((
        EnvOutput {
            command: "env",
            environment_name: format!("{}-dev", repo_name),
            project_name,
            repo_name,
            environment_yml,
        },
        0,
    ))
}
