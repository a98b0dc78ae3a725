use std::fs::{File, read_to_string};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use flate2::read::GzDecoder;
use pretty_assertions::assert_eq;
use rstest::*;

fn pscurve() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pscurve"))
}

fn read_gz(path: &Path) -> String {
    let mut text = String::new();
    GzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

/// Run `pscurve run NAME - ...` with `input` on stdin, writing into `out`.
fn run_stdin(name: &str, input: &str, out: &Path, extra: &[&str]) -> bool {
    let mut child = pscurve()
        .arg("run")
        .arg(name)
        .arg("-")
        .args(["--genome", "mm10", "--no-plot"])
        .arg("--output")
        .arg(out)
        .args(extra)
        .stdin(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait().unwrap().success()
}

fn inner_rows(iolr: &str) -> Vec<usize> {
    iolr.lines()
        .enumerate()
        .filter(|(_, l)| l.split(' ').nth(1).unwrap().parse::<f64>().unwrap() > 0.0)
        .map(|(i, _)| i)
        .collect()
}

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/contacts")
        .join(file_name)
}

#[rstest]
fn test_run_writes_tables_and_figures() {
    let tempdir = tempfile::tempdir().unwrap();

    let status = pscurve()
        .arg("run")
        .arg("sample")
        .arg(get_test_path("mm10_contacts.txt"))
        .args(["--genome", "mm10"])
        .arg("--output")
        .arg(tempdir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let hist = read_to_string(tempdir.path().join("sample_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(hist.lines().count(), 1000);
    assert!(hist.lines().all(|l| l.split(' ').count() == 4));

    let iolr = read_to_string(tempdir.path().join("sample_iolr_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(iolr.lines().count(), 1000);
    assert!(iolr.lines().all(|l| l.split(' ').count() == 5));

    assert!(tempdir.path().join("sample_fits.json").exists());
    assert!(tempdir.path().join("sample_genome_wide_cp.svg").exists());
    assert!(tempdir.path().join("sample_iolr_genome_wide_cp.svg").exists());
}

#[rstest]
fn test_run_gzip_without_plots() {
    let tempdir = tempfile::tempdir().unwrap();

    let status = pscurve()
        .arg("run")
        .arg("gz")
        .arg(get_test_path("mm10_contacts.txt.gz"))
        .args(["--genome", "mm10", "--gzip", "--no-plot"])
        .arg("--output")
        .arg(tempdir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let hist = read_gz(&tempdir.path().join("gz_hist_genome_wide_cp.txt.gz"));
    assert_eq!(hist.lines().count(), 1000);
    assert!(hist.lines().all(|l| l.split(' ').count() == 4));

    let iolr = read_gz(&tempdir.path().join("gz_iolr_hist_genome_wide_cp.txt.gz"));
    assert_eq!(iolr.lines().count(), 1000);
    assert!(iolr.lines().all(|l| l.split(' ').count() == 5));
    assert!(!tempdir.path().join("gz_genome_wide_cp.svg").exists());
}

#[rstest]
fn test_run_is_reproducible() {
    let tempdir = tempfile::tempdir().unwrap();

    for name in ["first", "second"] {
        let status = pscurve()
            .arg("run")
            .arg(name)
            .arg(get_test_path("mm10_contacts.txt"))
            .args(["--genome", "mm10", "--no-plot"])
            .arg("--output")
            .arg(tempdir.path())
            .status()
            .unwrap();
        assert!(status.success());
    }

    let first = read_to_string(tempdir.path().join("first_hist_genome_wide_cp.txt")).unwrap();
    let second = read_to_string(tempdir.path().join("second_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case("unknown_chrom.txt", "mm10")]
#[case("bad_strand.txt", "mm10")]
#[case("mm10_contacts.txt", "hg38")]
fn test_run_fails_on_bad_input(#[case] file_name: &str, #[case] genome: &str) {
    let tempdir = tempfile::tempdir().unwrap();

    let status = pscurve()
        .arg("run")
        .arg("bad")
        .arg(get_test_path(file_name))
        .args(["--genome", genome, "--no-plot"])
        .arg("--output")
        .arg(tempdir.path())
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!tempdir.path().join("bad_hist_genome_wide_cp.txt").exists());
}

#[rstest]
fn test_chroms() {
    let output = pscurve().args(["chroms", "--genome", "mm10"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "1\tchr1\t195471971");
    assert_eq!(lines[19], "20\tchrX\t171031299");
}

#[rstest]
fn test_possible() {
    let output = pscurve()
        .args(["possible", "--genome", "hg19", "--bins", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 100);
}

#[rstest]
fn test_bins_flag_overrides_config_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = std::env::current_dir()
        .unwrap()
        .join("../tests/data/config/scaling.toml");

    // strand tokens come from the config file, the bin count from the flag
    let ok = run_stdin(
        "cfg",
        "+ chr1 1000 - chr1 5000\n",
        tempdir.path(),
        &["--config", config.to_str().unwrap(), "--bins", "100"],
    );
    assert!(ok);

    let hist = read_to_string(tempdir.path().join("cfg_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(hist.lines().count(), 100);
    let observed: u64 = hist
        .lines()
        .map(|l| l.split(' ').nth(2).unwrap().parse::<u64>().unwrap())
        .sum();
    assert_eq!(observed, 1);

    let iolr = read_to_string(tempdir.path().join("cfg_iolr_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(iolr.lines().count(), 100);
    assert_eq!(inner_rows(&iolr).len(), 1);
}

#[rstest]
fn test_config_file_overrides_defaults() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = std::env::current_dir()
        .unwrap()
        .join("../tests/data/config/scaling.toml");

    let ok = run_stdin(
        "cfg",
        "+ chr1 1000 - chr1 5000\n",
        tempdir.path(),
        &["--config", config.to_str().unwrap()],
    );
    assert!(ok);

    let hist = read_to_string(tempdir.path().join("cfg_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(hist.lines().count(), 500);
}

#[rstest]
fn test_token_flags_override_config_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let config = std::env::current_dir()
        .unwrap()
        .join("../tests/data/config/scaling.toml");
    let config = config.to_str().unwrap();

    let ok = run_stdin(
        "tokens",
        "F chr1 1000 R chr1 5000\n",
        tempdir.path(),
        &["--config", config, "--forward-token", "F", "--reverse-token", "R"],
    );
    assert!(ok);

    let iolr =
        read_to_string(tempdir.path().join("tokens_iolr_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(iolr.lines().count(), 500);
    assert_eq!(inner_rows(&iolr).len(), 1);

    // the config file's tokens no longer apply
    let ok = run_stdin(
        "stale",
        "+ chr1 1000 - chr1 5000\n",
        tempdir.path(),
        &["--config", config, "--forward-token", "F", "--reverse-token", "R"],
    );
    assert!(!ok);
}

#[rstest]
fn test_default_tokens_from_stdin() {
    let tempdir = tempfile::tempdir().unwrap();

    let ok = run_stdin("stdin", "0 chr2 100 16 chr2 250000\n", tempdir.path(), &[]);
    assert!(ok);

    let iolr = read_to_string(tempdir.path().join("stdin_iolr_hist_genome_wide_cp.txt")).unwrap();
    assert_eq!(iolr.lines().count(), 1000);
    assert_eq!(inner_rows(&iolr).len(), 1);
}

#[rstest]
fn test_possible_gz_output() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("mm10_possible.txt.gz");

    let status = pscurve()
        .args(["possible", "--genome", "mm10", "--output"])
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let text = read_gz(&path);
    assert_eq!(text.lines().count(), 1000);
    assert!(text.lines().all(|l| l.split(' ').count() == 2));
}
