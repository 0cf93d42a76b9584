use std::fs;
use std::path::PathBuf;

use super::*;

use crate::output::OutputFormat;

fn cli_for(paths: Vec<PathBuf>, output: Option<PathBuf>) -> Cli {
    Cli {
        paths,
        config: None,
        ext: None,
        exclude: vec![],
        format: OutputFormat::Text,
        output,
        debug: false,
        quiet: true,
    }
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("main.rs"),
        "// comment\nfn main() {}\n\nlet x = 1;\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a known language\n").unwrap();
    dir
}

#[test]
fn run_writes_totals_to_output_file() {
    let dir = fixture();
    let report_path = dir.path().join("report.txt");
    let cli = cli_for(
        vec![dir.path().to_path_buf()],
        Some(report_path.clone()),
    );

    let code = run(&cli).unwrap();
    assert_eq!(code, EXIT_SUCCESS);

    let report = fs::read_to_string(report_path).unwrap();
    assert!(report.contains("Files scanned: 1"));
    assert!(report.contains("Total non-blank lines: 3"));
    assert!(report.contains("Total commented lines: 1"));
}

#[test]
fn run_skips_files_without_a_profile() {
    let dir = fixture();
    let report_path = dir.path().join("report.txt");
    let cli = cli_for(vec![dir.path().to_path_buf()], Some(report_path.clone()));

    run(&cli).unwrap();

    let report = fs::read_to_string(report_path).unwrap();
    // notes.txt has no registered extension and must not appear in totals.
    assert!(report.contains("Files scanned: 1"));
}

#[test]
fn run_json_format() {
    let dir = fixture();
    let report_path = dir.path().join("report.json");
    let mut cli = cli_for(vec![dir.path().to_path_buf()], Some(report_path.clone()));
    cli.format = OutputFormat::Json;

    run(&cli).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(parsed["summary"]["total_files"], 1);
    assert_eq!(parsed["summary"]["commented_lines"], 1);
}

#[test]
fn run_debug_mode_produces_same_counts() {
    let dir = fixture();
    let plain_path = dir.path().join("plain.json");
    let traced_path = dir.path().join("traced.json");

    let mut plain = cli_for(vec![dir.path().to_path_buf()], Some(plain_path.clone()));
    plain.format = OutputFormat::Json;
    run(&plain).unwrap();

    let mut traced = cli_for(vec![dir.path().to_path_buf()], Some(traced_path.clone()));
    traced.format = OutputFormat::Json;
    traced.debug = true;
    run(&traced).unwrap();

    // The report files use unregistered extensions, so neither run picks
    // up the other's output and the counts stay comparable.
    let plain_out = fs::read_to_string(plain_path).unwrap();
    let traced_out = fs::read_to_string(traced_path).unwrap();
    assert_eq!(plain_out, traced_out);
}

#[test]
fn run_rejects_invalid_exclude_glob() {
    let dir = fixture();
    let mut cli = cli_for(vec![dir.path().to_path_buf()], None);
    cli.exclude = vec!["a{b".to_string()];

    assert!(run(&cli).is_err());
}

#[test]
fn run_with_extension_filter() {
    let dir = fixture();
    fs::write(dir.path().join("script.py"), "# only comments\n").unwrap();

    let report_path = dir.path().join("report.txt");
    let mut cli = cli_for(vec![dir.path().to_path_buf()], Some(report_path.clone()));
    cli.ext = Some(vec!["py".to_string()]);

    run(&cli).unwrap();

    let report = fs::read_to_string(report_path).unwrap();
    assert!(report.contains("Files scanned: 1"));
    assert!(report.contains("Total commented lines: 1"));
}
