use scaffold_kit::defaults::{builtin_defaults, parse_config};
use scaffold_kit::naming::{confirm, derive, normalize};
use scaffold_kit::scaffold::{environment_yml, mkdocs_yml, pyproject_toml, PackageMetadata};

#[test]
fn pyproject_parses_as_toml() {
    let defaults = builtin_defaults();
    let (project, _) = derive("example_package");
    let metadata = PackageMetadata::from_defaults(project, &defaults.metadata);

    let rendered = pyproject_toml(&metadata, &defaults.pyproject);
    let doc: toml::Table = toml::from_str(&rendered).unwrap();

    let project_table = &doc["project"];
    assert_eq!(project_table["name"].as_str(), Some("example_package"));
    assert_eq!(project_table["version"].as_str(), Some("0.1.0"));
    assert_eq!(project_table["requires-python"].as_str(), Some(">=3.10"));
    assert_eq!(
        project_table["authors"][0]["email"].as_str(),
        Some("authors_email@goes_here.ie")
    );
    assert_eq!(
        doc["build-system"]["build-backend"].as_str(),
        Some("setuptools.build_meta")
    );
}

#[test]
fn pyproject_stays_valid_with_awkward_metadata() {
    let defaults = builtin_defaults();
    let (project, _) = derive("example_package");
    let confirmed = confirm(&project, Some("quoted \"name\""));

    let mut metadata = PackageMetadata::from_defaults(confirmed, &defaults.metadata);
    metadata.author_name = "O'Brien \\ \"Quote\"".to_string();
    metadata.description = "line one\nline two".to_string();

    let rendered = pyproject_toml(&metadata, &defaults.pyproject);
    let doc: toml::Table = toml::from_str(&rendered).unwrap();

    assert_eq!(doc["project"]["name"].as_str(), Some("quoted_\"name\""));
    assert_eq!(doc["project"]["description"].as_str(), Some("line one\nline two"));
    assert_eq!(
        doc["project"]["authors"][0]["name"].as_str(),
        Some("O'Brien \\ \"Quote\"")
    );
}

#[test]
fn pyproject_with_no_dependencies_parses() {
    let config = parse_config(r#"{"defaults": {"pyproject": {"dependencies": []}}}"#, "inline")
        .unwrap();
    let (project, _) = derive("pkg");
    let metadata = PackageMetadata::from_defaults(project, &config.defaults.metadata);

    let rendered = pyproject_toml(&metadata, &config.defaults.pyproject);
    let doc: toml::Table = toml::from_str(&rendered).unwrap();
    assert_eq!(doc["project"]["dependencies"].as_array().map(|a| a.len()), Some(0));
}

#[test]
fn environment_parses_as_yaml() {
    let defaults = builtin_defaults();
    let (_, repo) = derive("example_package");

    let rendered = environment_yml(&repo, &defaults.environment);
    let doc: serde_yml::Value = serde_yml::from_str(&rendered).unwrap();

    assert_eq!(doc["name"].as_str(), Some("example-package-dev"));
    let deps = doc["dependencies"].as_sequence().unwrap();
    assert_eq!(deps[0].as_str(), Some("python=3.12"));
    assert_eq!(deps.len(), 1 + 4 + 3);
}

#[test]
fn mkdocs_parses_as_yaml() {
    let rendered = mkdocs_yml(&normalize("example package"));
    let doc: serde_yml::Value = serde_yml::from_str(&rendered).unwrap();

    assert_eq!(
        doc["site_name"].as_str(),
        Some("example_package Documentation")
    );
    assert_eq!(doc["theme"]["name"].as_str(), Some("material"));
}

#[test]
fn yaml_templates_parse_for_names_with_indicator_characters() {
    let defaults = builtin_defaults();

    for raw in ["#pkg", "&pkg", "*pkg", "[pkg]", "{pkg}", "pkg: x", "!pkg", "'pkg"] {
        let (project, repo) = derive(raw);

        let env: serde_yml::Value = serde_yml::from_str(&environment_yml(&repo, &defaults.environment))
            .unwrap_or_else(|e| panic!("environment.yml for {:?}: {}", raw, e));
        assert_eq!(
            env["name"].as_str(),
            Some(format!("{}-dev", repo).as_str()),
            "input {:?}",
            raw
        );

        let mkdocs: serde_yml::Value = serde_yml::from_str(&mkdocs_yml(&project))
            .unwrap_or_else(|e| panic!("mkdocs.yml for {:?}: {}", raw, e));
        assert_eq!(
            mkdocs["site_name"].as_str(),
            Some(format!("{} Documentation", project).as_str()),
            "input {:?}",
            raw
        );
    }
}

#[test]
fn pyproject_parses_for_names_with_quote_characters() {
    let defaults = builtin_defaults();

    for raw in ["it's", "a\"b", "back\\slash", "'\"'"] {
        let (project, _) = derive(raw);
        let metadata = PackageMetadata::from_defaults(project.clone(), &defaults.metadata);

        let doc: toml::Table = toml::from_str(&pyproject_toml(&metadata, &defaults.pyproject))
            .unwrap_or_else(|e| panic!("pyproject.toml for {:?}: {}", raw, e));
        assert_eq!(doc["project"]["name"].as_str(), Some(project.as_str()));
    }
}
