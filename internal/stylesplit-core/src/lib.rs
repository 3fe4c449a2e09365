mod name;
mod scan;
mod segment;

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;

pub use name::NameAllocator;
pub use scan::HeaderMatch;
pub use segment::Segment;

fn default_skip_titles() -> Vec<String> {
    vec!["UTILITY".to_owned(), "LAYOUT UTILITIES".to_owned()]
}

fn default_skip_names() -> Vec<String> {
    vec!["form".to_owned(), "form-s".to_owned()]
}

fn default_duplicate_renames() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "image-gallery".to_owned(),
            "image-gallery-advanced".to_owned(),
        ),
        ("date-picker".to_owned(), "date-picker-advanced".to_owned()),
    ])
}

fn default_banner_project() -> String {
    "AHA Starter Design System".to_owned()
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The monolithic stylesheet to split.
    pub source: Option<PathBuf>,
    /// Where the per-component files are written.
    pub output_dir: Option<PathBuf>,
    /// Leftover files removed (when present) after a successful split.
    #[serde(default)]
    pub cleanup: Vec<PathBuf>,
    /// Raw titles containing any of these markers produce no output file.
    #[serde(default = "default_skip_titles")]
    pub skip_titles: Vec<String>,
    /// Normalized names dropped outright (generic or malformed headers).
    #[serde(default = "default_skip_names")]
    pub skip_names: Vec<String>,
    /// Renames applied to the second and later occurrences of a normalized
    /// name, so same-titled sections end up in distinct files.
    #[serde(default = "default_duplicate_renames")]
    pub duplicate_renames: BTreeMap<String, String>,
    /// Project name written into each generated banner.
    #[serde(default = "default_banner_project")]
    pub banner_project: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            output_dir: None,
            cleanup: Vec::new(),
            skip_titles: default_skip_titles(),
            skip_names: default_skip_names(),
            duplicate_renames: default_duplicate_renames(),
            banner_project: default_banner_project(),
        }
    }
}

pub fn load_config(config_file: &Path) -> anyhow::Result<Config> {
    let contents = fs::read_to_string(config_file)
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    let config: Config = toml::from_str(&contents)?;
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> anyhow::Result<()> {
    if config.skip_titles.iter().any(|t| t.is_empty()) {
        bail!("stylesplit config skip_titles can't contain empty strings");
    }

    if config.skip_names.iter().any(|n| n.is_empty()) {
        bail!("stylesplit config skip_names can't contain empty strings");
    }

    if config
        .duplicate_renames
        .iter()
        .any(|(name, renamed)| name.is_empty() || renamed.is_empty())
    {
        bail!("stylesplit config duplicate_renames can't contain empty names");
    }

    if config.banner_project.is_empty() {
        bail!("stylesplit config banner_project can't be empty");
    }

    Ok(())
}

/// One retained section, ready to be written out.
#[derive(Debug, PartialEq)]
pub struct Component {
    /// Normalized filename, without the `.css` extension.
    pub filename: String,
    /// The title as captured from the header's middle line.
    pub raw_name: String,
    /// The segment's lines verbatim, trailing blank lines removed.
    pub contents: String,
}

impl Component {
    /// The full output file: generated banner, one blank line, then the
    /// segment verbatim.
    pub fn render(&self, project: &str) -> String {
        format!(
            "/* \n * {title}\n * Part of the {project}\n * This file contains styles for the {name}\n */\n\n{contents}",
            title = name::title_case(&self.raw_name),
            name = self.raw_name.to_lowercase(),
            contents = self.contents,
        )
    }
}

/// Scan a stylesheet's text for header triplets and slice it into one
/// [`Component`] per retained section.
///
/// Sections are filtered and renamed according to `config`; a source with no
/// recognizable headers yields an empty list.
pub fn split_stylesheet(contents: &str, config: &Config) -> Vec<Component> {
    let lines: Vec<&str> = contents.split_inclusive('\n').collect();
    let headers = scan::scan_headers(&lines);
    let segments = segment::split_segments(&lines, &headers);

    let mut allocator = NameAllocator::new(config);
    let mut components = Vec::new();
    for segment in &segments {
        let Some(filename) = allocator.allocate(segment.raw_name) else {
            continue;
        };

        let mut body = segment.lines;
        while body.last().is_some_and(|line| line.trim().is_empty()) {
            body = &body[..body.len() - 1];
        }

        components.push(Component {
            filename,
            raw_name: segment.raw_name.to_owned(),
            contents: body.concat(),
        });
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize() {
        let config: Config = toml::from_str(
            r#"
source = "src/styles/components.css"
output_dir = "src/styles/components"
cleanup = ["extract_components.py"]
"#,
        )
        .expect("should deserialize");

        assert_eq!(
            config.source.as_deref(),
            Some(Path::new("src/styles/components.css"))
        );
        assert_eq!(config.cleanup, vec![PathBuf::from("extract_components.py")]);
        assert_eq!(config.skip_titles, default_skip_titles());
        assert_eq!(config.skip_names, vec!["form", "form-s"]);
        assert_eq!(
            config.duplicate_renames.get("image-gallery").map(String::as_str),
            Some("image-gallery-advanced")
        );
        assert_eq!(config.banner_project, "AHA Starter Design System");
    }

    #[test]
    fn test_validate_config_rejects_empty_entries() {
        assert!(validate_config(&Config::default()).is_ok());

        let mut config = Config::default();
        config.skip_titles.push(String::new());
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.skip_names.push(String::new());
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config
            .duplicate_renames
            .insert("badge".to_owned(), String::new());
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.banner_project.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result: Result<Config, _> = toml::from_str("banana = true");
        assert!(result.is_err());
    }

    #[test]
    fn test_split_stylesheet() {
        let source = "\
/* ========
   BUTTON COMPONENT
   ======== */
.btn { color: red; }

/* ========
   UTILITY CLASSES
   ======== */
.u-hidden { display: none; }
";

        let components = split_stylesheet(source, &Config::default());
        assert_eq!(components.len(), 1);

        let button = &components[0];
        assert_eq!(button.filename, "button");
        assert_eq!(button.raw_name, "BUTTON");
        assert!(button.contents.ends_with(".btn { color: red; }\n"));
    }

    #[test]
    fn test_split_trims_trailing_blank_lines() {
        let source = "\
/* ====
   CARD COMPONENT
   ==== */
.card { padding: 1em; }



";
        let components = split_stylesheet(source, &Config::default());
        assert_eq!(components.len(), 1);
        assert!(components[0].contents.ends_with(".card { padding: 1em; }\n"));
    }

    #[test]
    fn test_split_without_headers_is_a_no_op() {
        let components = split_stylesheet(".btn { color: red; }\n", &Config::default());
        assert!(components.is_empty());
    }

    #[test]
    fn test_split_disambiguates_duplicate_sections() {
        let source = "\
/* ====
   IMAGE GALLERY COMPONENT
   ==== */
.gallery { display: grid; }

/* ====
   IMAGE GALLERY COMPONENT
   ==== */
.gallery-advanced { display: grid; }
";
        let components = split_stylesheet(source, &Config::default());

        let filenames: Vec<&str> = components.iter().map(|c| c.filename.as_str()).collect();
        assert_eq!(filenames, vec!["image-gallery", "image-gallery-advanced"]);
    }

    #[test]
    fn test_render() {
        let component = Component {
            filename: "button".to_owned(),
            raw_name: "BUTTON".to_owned(),
            contents: ".btn { color: red; }\n".to_owned(),
        };

        let expected = concat!(
            "/* \n",
            " * Button\n",
            " * Part of the AHA Starter Design System\n",
            " * This file contains styles for the button\n",
            " */\n",
            "\n",
            ".btn { color: red; }\n",
        );
        assert_eq!(component.render("AHA Starter Design System"), expected);
    }
}
