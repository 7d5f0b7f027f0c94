mod args;
mod canonical;
mod config;
mod io;
mod site_map;
mod sitemap;

use std::{io as stdio, path::PathBuf};

use chrono::{DateTime, Utc};

use crate::args::parse_args;
use crate::config::Args;
use crate::io::{print_error, print_info, print_progress, print_warning, read_exclusions, write_output};
use crate::site_map::build_site_map;
use crate::sitemap::{build_entries, generate_robots_txt, generate_sitemap_xml, generation_timestamp};

fn main() -> stdio::Result<()> {
    let args = parse_args();

    if let Err(e) = run(&args, Utc::now()) {
        print_error(&format!("Sitemap generation failed: {}", e));
        return Err(e);
    }

    println!("Done generating sitemap.");
    Ok(())
}

/// Scans `args.source` and writes the sitemap (and robots.txt if asked). Returns the written paths.
fn run(args: &Args, now: DateTime<Utc>) -> stdio::Result<Vec<PathBuf>> {
    if !args.source.is_dir() {
        return Err(stdio::Error::new(
            stdio::ErrorKind::NotFound,
            format!("Source directory not found: {}", args.source.display()),
        ));
    }

    print_progress(&format!("Scanning directory: {}", args.source.display()));
    print_progress(&format!("Using base URL: {}", args.base_url));

    let rules = read_exclusions(args)?;
    let pages = build_site_map(&args.source, &rules, args.verbose)?;
    if pages.is_empty() {
        print_warning("No HTML pages found for sitemap.xml.");
    }

    let timestamp = generation_timestamp(now);
    let entries = build_entries(&pages, &args.base_url, args.url_style, &timestamp);

    let mut written = Vec::new();

    let sitemap_path = write_output(&args.output, "sitemap.xml", &generate_sitemap_xml(&entries))?;
    print_progress(&format!("sitemap.xml successfully generated ({} URLs).", entries.len()));
    if args.verbose {
        print_info(&format!("Wrote: {}", sitemap_path.display()));
    }
    written.push(sitemap_path);

    if args.robots {
        let robots_path = write_output(&args.output, "robots.txt", &generate_robots_txt(&args.base_url))?;
        print_progress("robots.txt successfully generated.");
        written.push(robots_path);
    }

    Ok(written)
}
