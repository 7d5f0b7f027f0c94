use std::path::PathBuf;
use clap::{Arg, ArgMatches, Command};
use crate::config::{Args, BaseUrl, UrlStyle, BASE_URL_ENV};
use crate::io::print_error;

fn build_command() -> Command {
    Command::new("sitemapgen")
        .version("0.1.0")
        .about("Generate sitemap.xml (and optionally robots.txt) for a built static site.")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_parser(clap::value_parser!(String))
                .value_name("SOURCE_DIR")
                .help("Directory to scan for HTML pages (defaults to current directory)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(String))
                .value_name("OUTPUT_DIR")
                .help("Directory where sitemap.xml is written (defaults to current directory)"),
        )
        .arg(
            Arg::new("base-url")
                .short('b')
                .long("base-url")
                .value_parser(clap::value_parser!(String))
                .value_name("URL")
                .help("Site base URL (overrides SITE_BASE_URL, default https://localhost/)"),
        )
        .arg(
            Arg::new("exclusions")
                .short('e')
                .long("exclusions")
                .value_parser(clap::value_parser!(String))
                .value_name("FILE")
                .help("JSON file with \"dirs\" and/or \"files\" lists replacing the default exclusions"),
        )
        .arg(
            Arg::new("keep-extension")
                .long("keep-extension")
                .action(clap::ArgAction::SetTrue)
                .help("Keep the .html suffix on ordinary page URLs"),
        )
        .arg(
            Arg::new("robots")
                .long("robots")
                .action(clap::ArgAction::SetTrue)
                .help("Also write robots.txt pointing at the sitemap"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
}

/// parse command line arguments
pub fn parse_args() -> Args {
    let matches = build_command().get_matches();
    let env_base_url = std::env::var(BASE_URL_ENV).ok();

    let current_dir = std::env::current_dir().unwrap_or_else(|_| {
        print_error("Unable to determine the current directory.");
        std::process::exit(1);
    });

    args_from_matches(&matches, env_base_url, current_dir)
}

fn args_from_matches(matches: &ArgMatches, env_base_url: Option<String>, current_dir: PathBuf) -> Args {
    let dir_or_current = |name: &str| {
        matches
            .get_one::<String>(name)
            .map(PathBuf::from)
            .unwrap_or_else(|| current_dir.clone())
    };

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or(env_base_url)
        .map(|raw| BaseUrl::new(&raw))
        .unwrap_or_default();

    let url_style = if matches.get_flag("keep-extension") {
        UrlStyle::KeepExtension
    } else {
        UrlStyle::Clean
    };

    Args {
        source: dir_or_current("source"),
        output: dir_or_current("output"),
        base_url,
        exclusions: matches.get_one::<String>("exclusions").map(PathBuf::from),
        url_style,
        robots: matches.get_flag("robots"),
        verbose: matches.get_flag("verbose"),
    }
}
