//! Scaffold templates for a Python package repository.
//!
//! Every template is fixed text with `{{placeholder}}` slots filled through
//! [`crate::utils::template::render`]. Names go into the folder tree and shell
//! script verbatim: the script is display text and is never escaped or
//! executed. Values placed in YAML and TOML files are quoted by `serde_yml`
//! and `toml` so the files parse whatever the name holds.

use serde::Serialize;

use crate::defaults::{Defaults, EnvironmentDefaults, MetadataDefaults, PyprojectDefaults};
use crate::naming::{self, ProjectName, RepoName};
use crate::utils::template::{render, TemplateVars};

const FOLDER_TREE: &str = r#"{{repo_name}}/
├── src/{{project_name}}/
│   ├── __init__.py          Makes the folder a package.
│   └── source.py            An example module containing source code.
├── tests/
│   ├── __init__.py          Sets up the test suite.
│   └── test_source.py       A file containing tests for the code in source.py.
├── README.md                README with information about the project.
├── pyproject.toml           Metadata about the project and its dependencies.
├── environment.yml          Your development environment (or requirements.txt)
└── CITATION.cff             Citation file that makes it easy for people to cite you!
"#;

const SHELL_SCRIPT: &str = r#"mkdir tests
touch tests/__init__.py
echo -e 'import sys\nsys.path.append("src")' > tests/__init__.py
mkdir src/
mkdir src/{{project_name}}/
touch pyproject.toml
touch environment.yml
touch README.md
touch CITATION.cff
touch src/{{project_name}}/__init__.py
touch src/{{project_name}}/source.py
touch tests/test_source.py
"#;

const ENVIRONMENT_YML: &str = r#"name: {{environment_name}}

dependencies:
# These dependencies are very useful for packaging and testing your code
  - python={{python_version}}
{{tooling}}
# Remove these/replace these ones:
{{dependencies}}
"#;

const PYPROJECT_TOML: &str = r#"[build-system]
requires = ["setuptools>=61.0", "setuptools-scm"]
build-backend = "setuptools.build_meta"

[project]
name = {{project_name}}
description = {{description}}
version = {{version}}
readme = "README.md"
authors = [
    { name = {{author_name}}, email = {{author_email}} },
]
requires-python = {{requires_python}}
classifiers = [
    "Programming Language :: Python :: 3",
    "License :: OSI Approved :: MIT License",
    "Operating System :: OS Independent",
]
dependencies = [
{{dependencies}}
]
"#;

const MKDOCS_YML: &str = r#"site_name: {{site_name}}

theme:
  name: "material"

plugins:
- mkdocstrings:
    handlers:
      python:
        paths: [src]  # search packages in the src folder

nav:
  - Index: index.md
"#;

const GUIDE: &str = r#"# Scaffolding `{{project_name}}`
{{warnings}}
## 1. Choose your package and repository names

- Package name: `{{project_name}}`
- Repository name: `{{repo_name}}`

Create a git repository called `{{repo_name}}`. Either create it on GitHub and
clone it, or create it locally with `mkdir {{repo_name}}`, `cd {{repo_name}}`
and `git init`.

## 2. Create a tidy folder structure

If `{{repo_name}}` is the root directory of your project, aim for a layout like this:

```text
{{folder_tree}}
```

To recreate it, `cd` into `{{repo_name}}` and run:

```bash
{{shell_script}}
```

## 3. Set up a development environment

Put the following in `{{repo_name}}/environment.yml`, replacing the project
dependencies with the ones you need:

```yml
{{environment_yml}}
```

Then create the environment:

```bash
conda env create --file environment.yml
```

## 4. Describe the package in `pyproject.toml`

```toml
{{pyproject_toml}}
```

## 5. Build a docs site with mkdocs

Run `mkdocs new .` from the project folder, then put this in `mkdocs.yml`:

```yaml
{{mkdocs_yml}}
```

Add these snippets to `docs/index.md` to pull in the package docstrings and
the API reference for `source.py`:

```text
{{docs_package}}
{{docs_module}}
```

Preview with `TZ=UTC mkdocs serve`.
"#;

/// Directory tree diagram and the shell commands that recreate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldTemplates {
    pub folder_tree: String,
    pub shell_script: String,
}

/// Snippets for `docs/index.md` that pull in mkdocstrings output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsSnippets {
    pub package: String,
    pub module: String,
}

/// Fields of the `[project]` table in pyproject.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageMetadata {
    pub project_name: ProjectName,
    pub author_name: String,
    pub author_email: String,
    pub version: String,
    pub description: String,
}

impl PackageMetadata {
    pub fn from_defaults(project_name: ProjectName, defaults: &MetadataDefaults) -> Self {
        Self {
            project_name,
            author_name: defaults.author_name.clone(),
            author_email: defaults.author_email.clone(),
            version: defaults.version.clone(),
            description: defaults.description.clone(),
        }
    }
}

/// Interpolate the package and repository names into the folder tree and
/// shell script templates.
pub fn build(project_name: &ProjectName, repo_name: &RepoName) -> ScaffoldTemplates {
    let vars = [
        (TemplateVars::PROJECT_NAME, project_name.as_str()),
        (TemplateVars::REPO_NAME, repo_name.as_str()),
    ];

    ScaffoldTemplates {
        folder_tree: render(FOLDER_TREE, &vars),
        shell_script: render(SHELL_SCRIPT, &vars),
    }
}

fn yaml_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a YAML scalar, quoted only when a plain scalar would misparse.
fn yaml_scalar(value: &str) -> String {
    match serde_yml::to_string(value) {
        Ok(rendered) => rendered.trim_start_matches("---").trim().to_string(),
        // JSON strings are valid YAML double-quoted scalars.
        Err(_) => serde_json::Value::from(value).to_string(),
    }
}

/// Conda environment file named `<repo_name>-dev`.
pub fn environment_yml(repo_name: &RepoName, env: &EnvironmentDefaults) -> String {
    let environment_name = yaml_scalar(&format!("{}-dev", repo_name));
    let tooling = yaml_list(&env.tooling);
    let dependencies = yaml_list(&env.dependencies);

    render(
        ENVIRONMENT_YML,
        &[
            (TemplateVars::ENVIRONMENT_NAME, environment_name.as_str()),
            (TemplateVars::PYTHON_VERSION, env.python_version.as_str()),
            (TemplateVars::TOOLING, tooling.as_str()),
            (TemplateVars::DEPENDENCIES, dependencies.as_str()),
        ],
    )
}

/// Quote a value as a TOML string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_owned()).to_string()
}

/// pyproject.toml for a setuptools build.
///
/// Metadata values are quoted by the TOML serializer so the file always parses.
pub fn pyproject_toml(metadata: &PackageMetadata, pyproject: &PyprojectDefaults) -> String {
    let dependencies = pyproject
        .dependencies
        .iter()
        .map(|dep| format!("    {},", toml_string(dep)))
        .collect::<Vec<_>>()
        .join("\n");

    let project_name = toml_string(metadata.project_name.as_str());
    let description = toml_string(&metadata.description);
    let version = toml_string(&metadata.version);
    let author_name = toml_string(&metadata.author_name);
    let author_email = toml_string(&metadata.author_email);
    let requires_python = toml_string(&pyproject.requires_python);

    render(
        PYPROJECT_TOML,
        &[
            (TemplateVars::PROJECT_NAME, project_name.as_str()),
            (TemplateVars::DESCRIPTION, description.as_str()),
            (TemplateVars::VERSION, version.as_str()),
            (TemplateVars::AUTHOR_NAME, author_name.as_str()),
            (TemplateVars::AUTHOR_EMAIL, author_email.as_str()),
            (TemplateVars::REQUIRES_PYTHON, requires_python.as_str()),
            (TemplateVars::DEPENDENCIES, dependencies.as_str()),
        ],
    )
}

/// mkdocs.yml using the material theme and mkdocstrings on `src/`.
pub fn mkdocs_yml(project_name: &ProjectName) -> String {
    let site_name = yaml_scalar(&format!("{} Documentation", project_name));
    render(MKDOCS_YML, &[(TemplateVars::SITE_NAME, site_name.as_str())])
}

pub fn docs_snippets(project_name: &ProjectName) -> DocsSnippets {
    DocsSnippets {
        package: format!("::: {}", project_name),
        module: format!("::: {}.source", project_name),
    }
}

/// Full Markdown walkthrough for one package.
///
/// `metadata.project_name` may differ from `project_name` when the user
/// confirmed a different name; the pyproject section uses the confirmed one.
pub fn guide(
    project_name: &ProjectName,
    repo_name: &RepoName,
    metadata: &PackageMetadata,
    defaults: &Defaults,
) -> String {
    let templates = build(project_name, repo_name);
    let environment = environment_yml(repo_name, &defaults.environment);
    let pyproject = pyproject_toml(metadata, &defaults.pyproject);
    let mkdocs = mkdocs_yml(project_name);
    let snippets = docs_snippets(project_name);

    let warnings = naming::advisories(project_name);
    let warnings_block = if warnings.is_empty() {
        String::new()
    } else {
        let lines: Vec<String> = warnings.iter().map(|w| format!("> **Note:** {}", w)).collect();
        format!("\n{}\n", lines.join("\n>\n"))
    };

    render(
        GUIDE,
        &[
            (TemplateVars::PROJECT_NAME, project_name.as_str()),
            (TemplateVars::REPO_NAME, repo_name.as_str()),
            (TemplateVars::WARNINGS, warnings_block.as_str()),
            (TemplateVars::FOLDER_TREE, templates.folder_tree.trim_end()),
            (TemplateVars::SHELL_SCRIPT, templates.shell_script.trim_end()),
            (TemplateVars::ENVIRONMENT_YML, environment.trim_end()),
            (TemplateVars::PYPROJECT_TOML, pyproject.trim_end()),
            (TemplateVars::MKDOCS_YML, mkdocs.trim_end()),
            (TemplateVars::DOCS_PACKAGE, snippets.package.as_str()),
            (TemplateVars::DOCS_MODULE, snippets.module.as_str()),
        ],
    )
}
