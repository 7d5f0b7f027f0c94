use crate::config::{BaseUrl, ChangeFreq, UrlStyle};

/// Maps a site-relative `.html` path (forward slashes, no leading `./`) to its canonical URL.
///
/// `index.html` collapses to its directory; other pages lose the `.html` suffix
/// unless `style` is `KeepExtension`.
pub fn generate_canonical_url(rel_path: &str, base_url: &BaseUrl, style: UrlStyle) -> String {
    let base = base_url.as_str();

    if rel_path == "index.html" {
        return base.to_string();
    }

    if let Some(dir) = rel_path.strip_suffix("/index.html") {
        return format!("{}{}/", base, dir);
    }

    match style {
        UrlStyle::Clean => {
            let page = rel_path.strip_suffix(".html").unwrap_or(rel_path);
            format!("{}{}", base, page)
        }
        UrlStyle::KeepExtension => format!("{}{}", base, rel_path),
    }
}

/// What a priority rule matches, relative to the base URL.
enum Target {
    /// The site root itself.
    Root,
    /// Top-level pages by name, e.g. `about` for `<base>/about`.
    Pages(&'static [&'static str]),
}

struct PriorityRule {
    target: Target,
    priority: &'static str,
    change_freq: ChangeFreq,
}

// Checked top to bottom; the first match wins.
const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        target: Target::Pages(&["services"]),
        priority: "1.0",
        change_freq: ChangeFreq::Weekly,
    },
    PriorityRule {
        target: Target::Root,
        priority: "0.9",
        change_freq: ChangeFreq::Weekly,
    },
    PriorityRule {
        target: Target::Pages(&["about", "contact"]),
        priority: "0.8",
        change_freq: ChangeFreq::Monthly,
    },
];

const DEFAULT_PRIORITY: (&str, ChangeFreq) = ("0.7", ChangeFreq::Weekly);

impl Target {
    // `loc` and `base` arrive with one trailing slash already stripped.
    fn matches(&self, loc: &str, base: &str) -> bool {
        match self {
            Target::Root => loc == base,
            Target::Pages(pages) => loc
                .strip_prefix(base)
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|rest| pages.iter().any(|page| *page == rest)),
        }
    }
}

/// Assigns `(priority, changefreq)` to a location.
///
/// Comparison strips a single trailing slash from both sides and nothing else;
/// case and percent-encoding are taken as-is.
pub fn classify(location: &str, base_url: &BaseUrl) -> (&'static str, ChangeFreq) {
    let loc = strip_one_slash(location);
    let base = strip_one_slash(base_url.as_str());

    PRIORITY_RULES
        .iter()
        .find(|rule| rule.target.matches(loc, base))
        .map(|rule| (rule.priority, rule.change_freq))
        .unwrap_or(DEFAULT_PRIORITY)
}

fn strip_one_slash(s: &str) -> &str {
    s.strip_suffix('/').unwrap_or(s)
}
