use clap::Args;
use serde::Serialize;

use scaffold_kit::naming::{self, ProjectName, RepoName};

use super::{CmdResult, GlobalArgs, NameInput};

#[derive(Args)]
pub struct NameArgs {
    #[command(flatten)]
    pub input: NameInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameOutput {
    pub command: &'static str,
    pub project_name: ProjectName,
    pub repo_name: RepoName,
    pub warnings: Vec<String>,
}

pub fn run(args: NameArgs, global: &GlobalArgs) -> CmdResult<NameOutput> {
    super::check_explicit_config(global)?;
    let (project_name, repo_name) = args.input.derive()?;
    let warnings = naming::advisories(&project_name);

    Ok((
        NameOutput {
            command: "name",
            project_name,
            repo_name,
            warnings,
        },
        0,
    ))
}
