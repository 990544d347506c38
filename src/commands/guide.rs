use clap::Args;

use scaffold_kit::scaffold;

use super::pyproject::MetadataArgs;
use super::{GlobalArgs, NameInput};

#[derive(Args)]
pub struct GuideArgs {
    #[command(flatten)]
    pub input: NameInput,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

pub fn run_markdown(args: GuideArgs, global: &GlobalArgs) -> scaffold_kit::Result<(String, i32)> {
    let config = super::load_config(global)?;
    let (project_name, repo_name) = args.input.derive()?;
    let metadata = args
        .metadata
        .resolve(&project_name, &config.defaults.metadata);

    let content = scaffold::guide(&project_name, &repo_name, &metadata, &config.defaults);
    Ok((content, 0))
}
