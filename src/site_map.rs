use std::{
    io,
    path::{Component, Path},
};

use walkdir::{DirEntry, WalkDir};

use crate::config::ExclusionRules;
use crate::io::print_info;

/// Marker left in file names by other tooling for temporary or failed output.
const ARTIFACT_MARKER: &str = "@@";

/// Why a file was left out of the sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NotHtml,
    ExcludedName,
    ArtifactMarker,
}

impl ExclusionRules {
    /// Whether the traversal may descend into a directory with this basename.
    pub fn allows_dir(&self, name: &str) -> bool {
        !self.dirs.contains(name)
    }

    /// Checks a file's site-relative path. `None` means it belongs in the sitemap.
    pub fn check_file(&self, rel_path: &str) -> Option<Skip> {
        let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);

        if !rel_path.ends_with(".html") {
            Some(Skip::NotHtml)
        } else if self.files.contains(file_name) {
            Some(Skip::ExcludedName)
        } else if rel_path.contains(ARTIFACT_MARKER) {
            Some(Skip::ArtifactMarker)
        } else {
            None
        }
    }
}

/// Collects every page under `source_dir` that passes `rules`, as sorted
/// forward-slash paths relative to `source_dir`.
pub fn build_site_map(source_dir: &Path, rules: &ExclusionRules, verbose: bool) -> io::Result<Vec<String>> {
    let mut pages = Vec::new();

    for entry in site_walker(source_dir, rules, verbose) {
        let entry = entry?;
        if !is_page_file(&entry) {
            continue;
        }

        let rel_path = match entry.path().strip_prefix(source_dir) {
            Ok(rel) => to_site_path(rel),
            Err(_) => continue,
        };

        match rules.check_file(&rel_path) {
            None => pages.push(rel_path),
            Some(Skip::NotHtml) => {}
            Some(reason) => {
                if verbose {
                    print_info(&format!("Skipped ({:?}): {}", reason, rel_path));
                }
            }
        }
    }

    pages.sort();
    Ok(pages)
}

/// Every entry the scan visits. Excluded directories are never yielded or read.
fn site_walker<'a>(
    source_dir: &Path,
    rules: &'a ExclusionRules,
    verbose: bool,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
    WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| keep_entry(entry, rules, verbose))
}

// Symlinked files count as pages; symlinked directories are not descended into.
fn is_page_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

// Prunes excluded directories so their subtrees are never read.
fn keep_entry(entry: &DirEntry, rules: &ExclusionRules, verbose: bool) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    let keep = rules.allows_dir(&name);
    if !keep && verbose {
        print_info(&format!("Skipped directory: {}", entry.path().display()));
    }
    keep
}

fn to_site_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(os_str) => Some(os_str.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
