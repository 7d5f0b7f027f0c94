use chrono::{DateTime, SecondsFormat, Utc};

use crate::canonical::{classify, generate_canonical_url};
use crate::config::{BaseUrl, UrlEntry, UrlStyle, SITEMAP_NAMESPACE};
use crate::io::print_progress;

/// `<lastmod>` value shared by every entry of one run.
pub fn generation_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub fn build_entries(pages: &[String], base_url: &BaseUrl, style: UrlStyle, last_modified: &str) -> Vec<UrlEntry> {
    pages
        .iter()
        .map(|rel_path| {
            let location = generate_canonical_url(rel_path, base_url, style);
            let (priority, change_frequency) = classify(&location, base_url);
            print_progress(&format!("Found and mapped: {} -> {}", rel_path, location));

            UrlEntry {
                location,
                last_modified: last_modified.to_string(),
                change_frequency,
                priority,
            }
        })
        .collect()
}

pub fn generate_sitemap_xml(entries: &[UrlEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            escape_xml(&entry.location),
            entry.last_modified,
            entry.change_frequency,
            entry.priority
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn generate_robots_txt(base_url: &BaseUrl) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {}sitemap.xml\n", base_url)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChangeFreq;
    use chrono::TimeZone;

    fn pages(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn timestamp_has_utc_offset() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(generation_timestamp(now), "2024-01-02T03:04:05+00:00");
    }

    #[test]
    fn entries_carry_location_and_priority() {
        let base = BaseUrl::new("https://x.test");
        let entries = build_entries(
            &pages(&["contact.html", "index.html", "services.html", "blog/index.html"]),
            &base,
            UrlStyle::Clean,
            "T",
        );

        let summary: Vec<_> = entries
            .iter()
            .map(|e| (e.location.as_str(), e.priority, e.change_frequency))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("https://x.test/contact", "0.8", ChangeFreq::Monthly),
                ("https://x.test/", "0.9", ChangeFreq::Weekly),
                ("https://x.test/services", "1.0", ChangeFreq::Weekly),
                ("https://x.test/blog/", "0.7", ChangeFreq::Weekly),
            ]
        );
        assert!(entries.iter().all(|e| e.last_modified == "T"));
    }

    #[test]
    fn sitemap_document_layout() {
        let base = BaseUrl::new("https://x.test/");
        let entries = build_entries(&pages(&["index.html"]), &base, UrlStyle::Clean, "2024-01-01T00:00:00+00:00");

        assert_eq!(
            generate_sitemap_xml(&entries),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
             <url>\n    \
             <loc>https://x.test/</loc>\n    \
             <lastmod>2024-01-01T00:00:00+00:00</lastmod>\n    \
             <changefreq>weekly</changefreq>\n    \
             <priority>0.9</priority>\n  \
             </url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn one_url_element_per_entry_with_shared_lastmod() {
        let base = BaseUrl::new("https://x.test/");
        let entries = build_entries(&pages(&["a.html", "b.html", "c/index.html"]), &base, UrlStyle::Clean, "STAMP");
        let xml = generate_sitemap_xml(&entries);

        assert_eq!(xml.matches("<url>").count(), 3);
        assert_eq!(xml.matches("</url>").count(), 3);
        assert_eq!(xml.matches("<lastmod>STAMP</lastmod>").count(), 3);
    }

    #[test]
    fn empty_sitemap_is_still_a_document() {
        let xml = generate_sitemap_xml(&[]);
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n</urlset>"));
    }

    #[test]
    fn loc_is_escaped() {
        let base = BaseUrl::new("https://x.test/");
        let entries = build_entries(&pages(&["q&a.html"]), &base, UrlStyle::Clean, "T");
        assert!(generate_sitemap_xml(&entries).contains("<loc>https://x.test/q&amp;a</loc>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let base = BaseUrl::new("https://x.test/repo");
        assert_eq!(
            generate_robots_txt(&base),
            "User-agent: *\nAllow: /\n\nSitemap: https://x.test/repo/sitemap.xml\n"
        );
    }
}
