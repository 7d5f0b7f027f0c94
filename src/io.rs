use crate::config::{Args, ExclusionOverrides, ExclusionRules, COLOR_CYAN, COLOR_RED, COLOR_RESET, COLOR_YELLOW};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

pub fn print_error(message: &str) {
    eprintln!("{}ERROR{}: {}", COLOR_RED, COLOR_RESET, message);
}

pub fn print_warning(message: &str) {
    eprintln!("{}WARNING{}: {}", COLOR_YELLOW, COLOR_RESET, message);
}

pub fn print_info(message: &str) {
    eprintln!("{}INFO{}: {}", COLOR_CYAN, COLOR_RESET, message);
}

/// Progress lines go to stdout, next to the final summary; diagnostics stay on stderr.
pub fn print_progress(message: &str) {
    // A closed stdout must not abort the run.
    let _ = write_progress(&mut io::stdout().lock(), message);
}

fn write_progress<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Loads exclusion rules, falling back to the built-in sets when no file was given.
pub fn read_exclusions(args: &Args) -> io::Result<ExclusionRules> {
    let Some(path) = &args.exclusions else {
        return Ok(ExclusionRules::default());
    };

    if args.verbose {
        print_info(&format!("Reading exclusions from: {}", path.display()));
    }

    let raw = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Unable to read exclusions file {}: {}", path.display(), e),
        )
    })?;
    let overrides: ExclusionOverrides = serde_json::from_str(&raw)?;

    Ok(ExclusionRules::with_overrides(overrides))
}

/// Writes `content` to `file_name` inside `output_dir`, creating the directory if needed.
pub fn write_output(output_dir: &Path, file_name: &str, content: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
