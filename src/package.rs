//! Synthesis of the generated project's `package.json` and `.gitignore`.
//!
//! The package manifest is built programmatically rather than from a
//! template: its script lines are computed from the package name and its
//! string values need JSON escaping, which plain token substitution can't do.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    constants::{IGNORED_PATHS, INITIAL_VERSION, LICENSE},
    data::TemplateData,
};

/// Pinned development dependencies of every generated project.
pub const DEV_DEPENDENCIES: [(&str, &str); 7] = [
    ("@babel/core", "^7.10.0"),
    ("@babel/preset-env", "^7.10.0"),
    ("dts2md", "^0.4.0"),
    ("rollup", "^2.26.0"),
    ("@rollup/plugin-babel", "^5.2.0"),
    ("terser", "^5.2.0"),
    ("typescript", "^4.0.0"),
];

/// Paths published with the package.
pub const PUBLISHED_FILES: [&str; 3] = ["dist", "types", "index.d.ts"];

const DOCS_COMMAND: &str = r#"dts2md "**" "!index.d.ts" -i ./types -o ./docs -l -I Home.md"#;

/// Caller-supplied manifest fields that are not template placeholders.
///
/// The skip-install flag never affects the document; it is carried on
/// [`ProjectInput::install`](crate::data::ProjectInput::install).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestOptions {
    pub repository: Option<String>,
    pub keywords: Vec<String>,
}

/// Build lifecycle scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub prebuild: String,
    pub build: String,
    pub postbuild: String,
    pub docs: String,
}

impl Scripts {
    fn for_package(name: &str) -> Self {
        let postbuild = [
            "terser",
            &format!("dist/{name}.js"),
            "--config-file terser.json",
            "--module",
            &format!("-o dist/{name}.min.js"),
            "&&",
            "terser",
            &format!("dist/{name}.umd.js"),
            "--config-file terser.json",
            &format!("-o dist/{name}.umd.min.js"),
            "&&",
            "node stat",
        ]
        .join(" ");

        Self {
            prebuild: "tsc".to_string(),
            build: "rollup -c".to_string(),
            postbuild,
            docs: DOCS_COMMAND.to_string(),
        }
    }
}

/// The generated `package.json` document, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub module: String,
    pub main: String,
    pub types: String,
    pub author: String,
    pub license: String,
    pub scripts: Scripts,
    pub repository: String,
    pub keywords: Vec<String>,
    pub files: Vec<String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Serializes the manifest as pretty JSON with two-space indentation and
    /// a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Builds the package manifest for a project.
pub fn synthesize_manifest(data: &TemplateData, options: &ManifestOptions) -> PackageManifest {
    let name = &data.name;
    PackageManifest {
        name: name.clone(),
        version: INITIAL_VERSION.to_string(),
        description: data.description.clone(),
        module: format!("./dist/{name}.min.js"),
        main: format!("./dist/{name}.umd.min.js"),
        types: "./index.d.ts".to_string(),
        author: data.author.clone(),
        license: LICENSE.to_string(),
        scripts: Scripts::for_package(name),
        repository: options
            .repository
            .clone()
            .unwrap_or_else(|| format!("{}/{name}", data.author)),
        keywords: options.keywords.clone(),
        files: PUBLISHED_FILES.iter().map(|f| f.to_string()).collect(),
        dev_dependencies: DEV_DEPENDENCIES
            .iter()
            .map(|(pkg, version)| (pkg.to_string(), version.to_string()))
            .collect(),
    }
}

/// Contents of the generated `.gitignore`.
pub fn ignore_file_contents() -> String {
    IGNORED_PATHS.iter().map(|path| format!("{path}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> TemplateData {
        TemplateData {
            name: "widget".to_string(),
            description: "This is widget.".to_string(),
            author: "Jane".to_string(),
            namespace: "W".to_string(),
            year: "2026".to_string(),
        }
    }

    #[test]
    fn test_default_repository() {
        let manifest = synthesize_manifest(&data(), &ManifestOptions::default());
        assert_eq!(manifest.repository, "Jane/widget");
        assert!(manifest.keywords.is_empty());
    }

    #[test]
    fn test_explicit_repository_and_keywords() {
        let options = ManifestOptions {
            repository: Some("github:jane/widget".to_string()),
            keywords: vec!["ui".to_string(), "widget".to_string()],
        };
        let manifest = synthesize_manifest(&data(), &options);
        assert_eq!(manifest.repository, "github:jane/widget");
        assert_eq!(manifest.keywords, ["ui", "widget"]);
    }

    #[test]
    fn test_entry_points_and_scripts() {
        let manifest = synthesize_manifest(&data(), &ManifestOptions::default());
        assert_eq!(manifest.module, "./dist/widget.min.js");
        assert_eq!(manifest.main, "./dist/widget.umd.min.js");
        assert_eq!(
            manifest.scripts.postbuild,
            "terser dist/widget.js --config-file terser.json --module -o dist/widget.min.js \
             && terser dist/widget.umd.js --config-file terser.json -o dist/widget.umd.min.js \
             && node stat"
        );
    }

    #[test]
    fn test_serialized_layout() {
        let json = synthesize_manifest(&data(), &ManifestOptions::default()).to_json().unwrap();

        assert!(json.starts_with("{\n  \"name\": \"widget\",\n  \"version\": \"0.1.0\",\n"));
        assert!(json.contains("  \"devDependencies\": {\n    \"@babel/core\": \"^7.10.0\","));
        assert!(json.contains(r#""docs": "dts2md \"**\" \"!index.d.ts\" -i ./types -o ./docs -l -I Home.md""#));
        assert!(json.contains("\"keywords\": [],"));
        assert!(json.ends_with("}\n"));

        let keys: Vec<String> = serde_json::from_str::<IndexMap<String, serde_json::Value>>(&json)
            .unwrap()
            .into_keys()
            .collect();
        assert_eq!(
            keys,
            [
                "name", "version", "description", "module", "main", "types", "author",
                "license", "scripts", "repository", "keywords", "files", "devDependencies",
            ]
        );
    }

    #[test]
    fn test_deterministic_output() {
        let first = synthesize_manifest(&data(), &ManifestOptions::default()).to_json().unwrap();
        let second = synthesize_manifest(&data(), &ManifestOptions::default()).to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_description_is_escaped() {
        let mut data = data();
        data.description = "Say \"hi\"".to_string();
        let json = synthesize_manifest(&data, &ManifestOptions::default()).to_json().unwrap();
        assert!(json.contains(r#""description": "Say \"hi\"","#));
    }

    #[test]
    fn test_ignore_file_contents() {
        assert_eq!(ignore_file_contents(), "node_modules\ntypes\njs\ndist\n");
    }
}
