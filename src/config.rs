use std::{collections::BTreeSet, fmt, path::PathBuf};

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://localhost/";
pub const BASE_URL_ENV: &str = "SITE_BASE_URL";

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug)]
pub struct Args {
    pub source: PathBuf,
    pub output: PathBuf,
    pub base_url: BaseUrl,
    pub exclusions: Option<PathBuf>,
    pub url_style: UrlStyle,
    pub robots: bool,
    pub verbose: bool,
}

/// Site base URL, always ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = if raw.is_empty() { DEFAULT_BASE_URL } else { raw };
        if raw.ends_with('/') {
            BaseUrl(raw.to_string())
        } else {
            BaseUrl(format!("{}/", raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        BaseUrl(DEFAULT_BASE_URL.to_string())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How ordinary (non-index) pages appear in the sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlStyle {
    /// `about.html` -> `about`
    #[default]
    Clean,
    /// `about.html` -> `about.html`
    KeepExtension,
}

/// Directory and file names that never reach the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    pub dirs: BTreeSet<String>,
    pub files: BTreeSet<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        ExclusionRules {
            dirs: [".git", ".github", "assets", "posts"]
                .into_iter()
                .map(String::from)
                .collect(),
            files: ["404.html", "utils.html"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// On-disk shape of an exclusions file. Missing keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionOverrides {
    pub dirs: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
}

impl ExclusionRules {
    pub fn with_overrides(overrides: ExclusionOverrides) -> Self {
        let mut rules = ExclusionRules::default();
        if let Some(dirs) = overrides.dirs {
            rules.dirs = dirs.into_iter().collect();
        }
        if let Some(files) = overrides.files {
            rules.files = files.into_iter().collect();
        }
        rules
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub location: String,
    pub last_modified: String,
    pub change_frequency: ChangeFreq,
    pub priority: &'static str,
}

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";
