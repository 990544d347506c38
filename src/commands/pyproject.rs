use clap::Args;
use serde::Serialize;

use scaffold_kit::naming::{self, ProjectName, RepoName};
use scaffold_kit::scaffold::{self, PackageMetadata};

use super::{CmdResult, GlobalArgs, NameInput};

#[derive(Args)]
pub struct PyprojectArgs {
    #[command(flatten)]
    pub input: NameInput,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

/// Package metadata flags; unset flags fall back to config defaults.
#[derive(Args, Default, Debug)]
pub struct MetadataArgs {
    /// Corrected project name (normalized like the package name)
    #[arg(long, value_name = "NAME")]
    pub confirm_name: Option<String>,

    /// Author's full name
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Author's email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Package version
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Very brief project description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,
}

impl MetadataArgs {
    /// Build package metadata, with the confirmed name normalized on its own.
    pub fn resolve(
        self,
        project_name: &ProjectName,
        defaults: &scaffold_kit::defaults::MetadataDefaults,
    ) -> PackageMetadata {
        let confirmed = naming::confirm(project_name, self.confirm_name.as_deref());
        let mut metadata = PackageMetadata::from_defaults(confirmed, defaults);

        if let Some(author) = self.author {
            metadata.author_name = author;
        }
        if let Some(email) = self.email {
            metadata.author_email = email;
        }
        if let Some(version) = self.package_version {
            metadata.version = version;
        }
        if let Some(description) = self.description {
            metadata.description = description;
        }

        metadata
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PyprojectOutput {
    pub command: &'static str,
    pub project_name: ProjectName,
    pub repo_name: RepoName,
    pub metadata: PackageMetadata,
    pub pyproject_toml: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn run(args: PyprojectArgs, global: &GlobalArgs) -> CmdResult<PyprojectOutput> {
    let config = super::load_config(global)?;
    let (project_name, repo_name) = args.input.derive()?;

    let metadata = args
        .metadata
        .resolve(&project_name, &config.defaults.metadata);
    let pyproject_toml = scaffold::pyproject_toml(&metadata, &config.defaults.pyproject);
    let warnings = naming::advisories(&metadata.project_name);

    Ok((
        PyprojectOutput {
            command: "pyproject",
            project_name,
            repo_name,
            metadata,
            pyproject_toml,
            warnings,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_kit::defaults::builtin_defaults;

    #[test]
    fn resolve_uses_defaults_when_flags_absent() {
        let project = naming::normalize("example_package");
        let metadata = MetadataArgs::default().resolve(&project, &builtin_defaults().metadata);

        assert_eq!(metadata.project_name, "example_package");
        assert_eq!(metadata.author_name, "Author Full Name");
        assert_eq!(metadata.version, "0.1.0");
    }

    #[test]
    fn resolve_normalizes_confirmed_name() {
        let project = naming::normalize("example_package");
        let args = MetadataArgs {
            confirm_name: Some("Better Name-here".to_string()),
            package_version: Some("1.0.0".to_string()),
            ..Default::default()
        };
        let metadata = args.resolve(&project, &builtin_defaults().metadata);

        assert_eq!(metadata.project_name, "Better_Name_here");
        assert_eq!(metadata.version, "1.0.0");
    }
}
