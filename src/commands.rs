use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use rayon::prelude::*;

use crate::EXIT_SUCCESS;
use crate::aggregate::{FileReport, RunTotals};
use crate::classify::{FileScanner, ScanCounters, classify_reader};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::language::ProfileRegistry;
use crate::output::{JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use crate::walk::{DirectoryWalker, GlobFilter};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Run one scan: discover files, classify them, report totals.
///
/// # Errors
/// Returns an error for configuration problems (bad patterns, bad globs,
/// unreadable config) and for failures writing the report. Unreadable
/// source files are warned about and skipped; the scan continues.
pub fn run(cli: &Cli) -> Result<i32> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let registry = ProfileRegistry::with_config(&config)?;

    let filter = GlobFilter::new(cli.ext.clone().unwrap_or_default(), &cli.exclude)?;
    let walker = DirectoryWalker::new(filter);
    let files = walker.collect_files(&cli.paths)?;

    // Per-file scans share no state, so files fan out across threads; the
    // debug trace stays sequential to keep stderr readable.
    let reports: Vec<FileReport> = if cli.debug {
        files
            .iter()
            .filter_map(|path| scan_file_traced(path, &registry))
            .collect()
    } else {
        files
            .par_iter()
            .filter_map(|path| scan_file(path, &registry))
            .collect()
    };

    let totals = RunTotals::from_reports(&reports);

    let formatter: Box<dyn ReportFormatter> = match cli.format {
        OutputFormat::Text => Box::new(TextFormatter::new(!cli.quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let output = formatter.format(&reports, &totals)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(EXIT_SUCCESS)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn scan_file(path: &Path, registry: &ProfileRegistry) -> Option<FileReport> {
    let profile = registry.get_by_extension(extension(path)?)?;

    let counters = match count_lines(path, profile) {
        Ok(counters) => counters,
        Err(e) => {
            eprintln!("Warning: skipping {}: {e}", path.display());
            return None;
        }
    };

    Some(FileReport {
        path: path.to_path_buf(),
        language: profile.name().to_string(),
        counters,
    })
}

fn count_lines(
    path: &Path,
    profile: &crate::language::PatternProfile,
) -> std::io::Result<ScanCounters> {
    let metadata = fs::metadata(path)?;
    if metadata.len() >= LARGE_FILE_THRESHOLD {
        classify_reader(BufReader::new(File::open(path)?), profile)
    } else {
        let content = fs::read_to_string(path)?;
        let mut scanner = FileScanner::new(profile);
        for line in content.lines() {
            scanner.push_line(line);
        }
        Ok(scanner.finish())
    }
}

/// Sequential scan that prints every line's classification tag to stderr.
fn scan_file_traced(path: &Path, registry: &ProfileRegistry) -> Option<FileReport> {
    let profile = registry.get_by_extension(extension(path)?)?;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: skipping {}: {e}", path.display());
            return None;
        }
    };

    let mut scanner = FileScanner::new(profile);
    for (idx, line) in content.lines().enumerate() {
        let class = scanner.push_line(line);
        eprintln!("{}:{}: {:<12} {line}", path.display(), idx + 1, class.tag());
    }

    Some(FileReport {
        path: path.to_path_buf(),
        language: profile.name().to_string(),
        counters: scanner.finish(),
    })
}

fn write_output(target: Option<&Path>, output: &str) -> Result<()> {
    match target {
        Some(path) => Ok(fs::write(path, format!("{output}\n"))?),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
