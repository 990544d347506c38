use clap::Args;
use serde::Serialize;

use scaffold_kit::naming::ProjectName;
use scaffold_kit::scaffold::{self, DocsSnippets};

use super::{CmdResult, GlobalArgs, NameInput};

#[derive(Args)]
pub struct MkdocsArgs {
    #[command(flatten)]
    pub input: NameInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MkdocsOutput {
    pub command: &'static str,
    pub project_name: ProjectName,
    pub mkdocs_yml: String,
    pub docs: DocsSnippets,
}

pub fn run(args: MkdocsArgs, global: &GlobalArgs) -> CmdResult<MkdocsOutput> {
    super::check_explicit_config(global)?;
    let (project_name, _) = args.input.derive()?;

    Ok((
        MkdocsOutput {
            command: "mkdocs",
            mkdocs_yml: scaffold::mkdocs_yml(&project_name),
            docs: scaffold::docs_snippets(&project_name),
            project_name,
        },
        0,
    ))
}
