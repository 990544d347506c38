use clap::Args;
use serde::Serialize;

use scaffold_kit::log_status;
use scaffold_kit::naming::{self, ProjectName, RepoName};
use scaffold_kit::scaffold::{self, ScaffoldTemplates};

use super::{CmdResult, GlobalArgs, NameInput};

#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub input: NameInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutput {
    pub command: &'static str,
    pub project_name: ProjectName,
    pub repo_name: RepoName,
    #[serde(flatten)]
    pub templates: ScaffoldTemplates,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn run(args: LayoutArgs, global: &GlobalArgs) -> CmdResult<LayoutOutput> {
    super::check_explicit_config(global)?;
    let (project_name, repo_name) = args.input.derive()?;
    log_status!("layout", "Building templates for {}", project_name);

    let templates = scaffold::build(&project_name, &repo_name);
    let warnings = naming::advisories(&project_name);

    Ok((
        LayoutOutput {
            command: "layout",
            project_name,
            repo_name,
            templates,
            warnings,
        },
        0,
    ))
}
