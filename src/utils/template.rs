//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const PROJECT_NAME: &'static str = "project_name";
    pub const REPO_NAME: &'static str = "repo_name";
    pub const ENVIRONMENT_NAME: &'static str = "environment_name";
    pub const SITE_NAME: &'static str = "site_name";
    pub const AUTHOR_NAME: &'static str = "author_name";
    pub const AUTHOR_EMAIL: &'static str = "author_email";
    pub const VERSION: &'static str = "version";
    pub const DESCRIPTION: &'static str = "description";
    pub const PYTHON_VERSION: &'static str = "python_version";
    pub const REQUIRES_PYTHON: &'static str = "requires_python";
    pub const TOOLING: &'static str = "tooling";
    pub const DEPENDENCIES: &'static str = "dependencies";
    pub const FOLDER_TREE: &'static str = "folder_tree";
    pub const SHELL_SCRIPT: &'static str = "shell_script";
    pub const ENVIRONMENT_YML: &'static str = "environment_yml";
    pub const PYPROJECT_TOML: &'static str = "pyproject_toml";
    pub const MKDOCS_YML: &'static str = "mkdocs_yml";
    pub const DOCS_PACKAGE: &'static str = "docs_package";
    pub const DOCS_MODULE: &'static str = "docs_module";
    pub const WARNINGS: &'static str = "warnings";
}

/// Replace `{{key}}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so a value that itself looks like
/// a placeholder is inserted as-is. Unknown placeholders are left in place.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match variables.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render(
            "{{project_name}}/{{project_name}}.py",
            &[(TemplateVars::PROJECT_NAME, "pkg")],
        );
        assert_eq!(out, "pkg/pkg.py");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("{{other}}", &[(TemplateVars::PROJECT_NAME, "pkg")]);
        assert_eq!(out, "{{other}}");
    }

    #[test]
    fn render_inserts_values_verbatim() {
        let out = render(
            "mkdir {{project_name}}",
            &[(TemplateVars::PROJECT_NAME, "$(rm -rf x)")],
        );
        assert_eq!(out, "mkdir $(rm -rf x)");
    }

    #[test]
    fn render_does_not_rescan_values() {
        let out = render(
            "{{project_name}} {{repo_name}}",
            &[
                (TemplateVars::PROJECT_NAME, "{{repo_name}}"),
                (TemplateVars::REPO_NAME, "repo"),
            ],
        );
        assert_eq!(out, "{{repo_name}} repo");
    }

    #[test]
    fn render_keeps_unterminated_braces() {
        let out = render("a {{project_name", &[(TemplateVars::PROJECT_NAME, "x")]);
        assert_eq!(out, "a {{project_name");
    }
}
