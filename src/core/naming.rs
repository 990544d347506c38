//! Package and repository name derivation.
//!
//! A package name is typed free-form. It is normalized by collapsing every
//! whitespace run into a single `_` and turning every `-` into `_`. The
//! repository name is the same string with `_` swapped for `-`.
//!
//! Nothing else is changed: case and punctuation pass through untouched.
//! [`advisories`] reports names that are unlikely to import cleanly, but
//! never rewrites them.

use std::fmt;
use std::sync::OnceLock;

use heck::ToSnakeCase;
use regex::Regex;
use serde::Serialize;

/// Normalized package identifier (`_` is the only separator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

/// Hyphenated form of a [`ProjectName`], used for the git repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RepoName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RepoName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProjectName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProjectName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for RepoName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RepoName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalize free-text input into a package name.
///
/// Each maximal run of whitespace becomes one `_`, each `-` becomes `_`.
/// Total over all strings; `""` maps to `""`.
pub fn normalize(raw: &str) -> ProjectName {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;

    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
            continue;
        }

        in_whitespace = false;
        out.push(if ch == '-' { '_' } else { ch });
    }

    ProjectName(out)
}

/// Derive the repository name by replacing every `_` with `-`.
pub fn derive_repo_name(project_name: &ProjectName) -> RepoName {
    RepoName(project_name.0.replace('_', "-"))
}

/// Normalize a raw name and derive its repository name in one step.
pub fn derive(raw: &str) -> (ProjectName, RepoName) {
    let project_name = normalize(raw);
    let repo_name = derive_repo_name(&project_name);
    (project_name, repo_name)
}

/// Resolve a "confirm project name" entry.
///
/// The confirmation is normalized on its own; without one, the first
/// name stands.
pub fn confirm(entered: &ProjectName, confirmation: Option<&str>) -> ProjectName {
    match confirmation {
        Some(raw) => normalize(raw),
        None => entered.clone(),
    }
}

fn disallowed_chars() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

    PATTERN
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").ok())
        .as_ref()
}

/// Advisory warnings for names that are not importable lowercase snake_case.
///
/// Characters outside `[A-Za-z0-9_]` and uppercase letters are reported
/// separately.
///
/// Never fails and never alters the name.
pub fn advisories(project_name: &ProjectName) -> Vec<String> {
    let name = project_name.as_str();
    let mut warnings = Vec::new();

    if name.is_empty() {
        warnings.push("Package name is empty".to_string());
        return warnings;
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        warnings.push(format!(
            "Package name '{}' starts with a digit and cannot be imported",
            name
        ));
    }

    if let Some(re) = disallowed_chars() {
        let mut found: Vec<&str> = re.find_iter(name).map(|m| m.as_str()).collect();
        found.sort_unstable();
        found.dedup();
        if !found.is_empty() {
            warnings.push(format!(
                "Package name contains characters outside [A-Za-z0-9_]: {}",
                found.join(" ")
            ));
        }
    }

    let snake = name.to_snake_case();
    if snake != name && !snake.is_empty() {
        warnings.push(format!(
            "Package name is not lowercase snake_case (did you mean '{}'?)",
            snake
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a   b"), "a_b");
        assert_eq!(normalize("a\tb\nc"), "a_b_c");
        assert_eq!(normalize(" \t lead"), "_lead");
        assert_eq!(normalize("trail \n"), "trail_");
    }

    #[test]
    fn replaces_hyphens() {
        assert_eq!(normalize("my-package"), "my_package");
        assert_eq!(normalize("a--b"), "a__b");
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(normalize("My  Cool-Package"), "My_Cool_Package");
        assert_eq!(normalize("pkg.v2!"), "pkg.v2!");
    }

    #[test]
    fn whitespace_next_to_hyphen_stays_separate() {
        assert_eq!(normalize("a - b"), "a___b");
    }

    #[test]
    fn unicode_whitespace_is_collapsed() {
        assert_eq!(normalize("a\u{00A0}\u{2003}b"), "a_b");
    }

    #[test]
    fn empty_input_maps_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(derive_repo_name(&normalize("")), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [
            "",
            "   ",
            "example_package",
            "My  Cool-Package",
            "a\t\n-b - c",
            "--",
            "ünïcode name",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once, "input {:?}", raw);
        }
    }

    #[test]
    fn repo_name_swaps_underscores() {
        assert_eq!(derive_repo_name(&normalize("example_package")), "example-package");
        assert_eq!(derive_repo_name(&normalize("__x__")), "--x--");
    }

    #[test]
    fn repo_name_round_trips_through_normalize() {
        for raw in ["example_package", "a_b_c", "My_Cool_Package", "_", "plain"] {
            let project = normalize(raw);
            let repo = derive_repo_name(&project);
            assert_eq!(normalize(repo.as_str()), project);
        }
    }

    #[test]
    fn derive_returns_both_names() {
        let (project, repo) = derive("planet evolution");
        assert_eq!(project, "planet_evolution");
        assert_eq!(repo, "planet-evolution");
    }

    #[test]
    fn confirmation_is_normalized_independently() {
        let first = normalize("first name");
        assert_eq!(confirm(&first, Some("second-name here")), "second_name_here");
        assert_eq!(confirm(&first, None), "first_name");
    }

    #[test]
    fn advisories_empty_for_clean_name() {
        assert!(advisories(&normalize("example_package")).is_empty());
        assert!(advisories(&normalize("pkg2")).is_empty());
    }

    #[test]
    fn advisories_flag_empty_name() {
        assert_eq!(advisories(&normalize("")), vec!["Package name is empty"]);
    }

    #[test]
    fn advisories_suggest_snake_case() {
        let warnings = advisories(&normalize("My Cool-Package"));
        assert!(warnings.iter().any(|w| w.contains("'my_cool_package'")));
    }

    #[test]
    fn advisories_list_disallowed_chars() {
        let warnings = advisories(&normalize("pkg.v2!"));
        assert!(warnings
            .iter()
            .any(|w| w.contains("outside [A-Za-z0-9_]: ! .")));
    }

    #[test]
    fn uppercase_only_triggers_snake_case_advisory() {
        let warnings = advisories(&normalize("MyPkg"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'my_pkg'"));
    }

    #[test]
    fn advisories_flag_leading_digit() {
        let warnings = advisories(&normalize("2fast"));
        assert!(warnings.iter().any(|w| w.contains("starts with a digit")));
    }

    #[test]
    fn advisories_do_not_alter_name() {
        let name = normalize("Bad Name");
        let _ = advisories(&name);
        assert_eq!(name, "Bad_Name");
    }

    #[test]
    fn serializes_as_plain_string() {
        let value = serde_json::to_value(normalize("a b")).unwrap();
        assert_eq!(value, serde_json::json!("a_b"));
    }
}
