//! End-to-end tests for the `margo-workload` binary
//!
//! Each full run takes at least eight seconds of real time.

use std::process::{Command, Output};
use std::time::{Duration, Instant};

const BINARY: &str = env!("CARGO_BIN_EXE_margo-workload");

// Helper function to run the workload with specified arguments
fn run_workload(args: &[&str]) -> (Output, Duration) {
    run_workload_with_env(args, &[])
}

// Same, with only the given log variables set
fn run_workload_with_env(args: &[&str], vars: &[(&str, &str)]) -> (Output, Duration) {
    let mut cmd = Command::new(BINARY);
    cmd.args(args)
        .env_remove("RUST_LOG")
        .env_remove("RUST_LOG_FORMAT")
        .env_remove("MARGO_LOG_LEVEL")
        .envs(vars.iter().copied());

    let started = Instant::now();
    let output = cmd.output().expect("Failed to execute margo-workload");
    (output, started.elapsed())
}

/// Replace every `timestamp=<digits>` with `timestamp=<ts>`, collecting the
/// digits.
fn normalize(stdout: &str) -> (String, Vec<u64>) {
    let mut timestamps = Vec::new();
    let lines: Vec<String> = stdout
        .lines()
        .map(|line| match line.split_once("timestamp=") {
            Some((head, digits)) => {
                timestamps.push(digits.parse().expect("timestamp is an integer"));
                format!("{head}timestamp=<ts>")
            }
            None => line.to_string(),
        })
        .collect();
    (lines.join("\n") + "\n", timestamps)
}

fn expected_template() -> String {
    format!(
        "🦭 Margo WASM Demo - Hello from WebAssembly!\n\
         ========================================\n\
         Runtime: wasm32-wasi\n\
         Build: Rust {} (margo-workload)\n\
         \n\
         [1] Sensor reading: temperature=23°C, timestamp=<ts>\n\
         [2] Sensor reading: temperature=26°C, timestamp=<ts>\n\
         [3] Sensor reading: temperature=29°C, timestamp=<ts>\n\
         [4] Sensor reading: temperature=32°C, timestamp=<ts>\n\
         [5] Sensor reading: temperature=35°C, timestamp=<ts>\n\
         \n\
         ✓ WASM workload completed successfully\n\
         Memory footprint: <10 MB (WASM sandbox)\n",
        env!("CARGO_PKG_VERSION")
    )
}

#[test]
fn test_run_without_arguments() {
    let (output, elapsed) = run_workload(&[]);

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    let (normalized, timestamps) = normalize(&stdout);
    assert_eq!(normalized, expected_template());

    assert_eq!(timestamps.len(), 5);
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]), "{timestamps:?}");
    // Four two-second pauses separate the readings.
    assert!(timestamps[4] - timestamps[0] >= 7, "{timestamps:?}");
    assert!(elapsed >= Duration::from_secs(8), "finished after {elapsed:?}");

    // Default level is quiet.
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_logging_does_not_touch_stdout() {
    let (output, _) = run_workload(&["--log-level", "debug", "--log-format", "json"]);

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (normalized, _) = normalize(&stdout);
    assert_eq!(normalized, expected_template());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.is_empty());
    assert!(stderr.lines().all(|l| l.starts_with('{')), "{stderr}");
    assert!(stderr.contains("emitted reading"));
    assert!(stderr.contains("Sensor workload completed"));
    assert!(stderr.contains("workload_run"), "{stderr}");
}

fn assert_completes_despite(var: &str, value: &str) -> String {
    let (output, _) = run_workload_with_env(&[], &[(var, value)]);

    assert_eq!(output.status.code(), Some(0), "{var}={value}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let (normalized, timestamps) = normalize(&stdout);
    assert_eq!(normalized, expected_template(), "{var}={value}");
    assert_eq!(timestamps.len(), 5);

    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn test_malformed_filter_env_falls_back_to_level() {
    let stderr = assert_completes_despite("RUST_LOG", "margo_workload=loudest");
    assert!(stderr.contains("Ignoring log filter"), "{stderr}");
}

#[test]
fn test_unknown_format_env_falls_back_to_default() {
    let stderr = assert_completes_despite("RUST_LOG_FORMAT", "full");
    assert!(stderr.is_empty(), "{stderr}");
}

#[test]
fn test_unknown_level_env_falls_back_to_default() {
    let stderr = assert_completes_despite("MARGO_LOG_LEVEL", "verbose");
    assert!(stderr.is_empty(), "{stderr}");
}

#[test]
fn test_level_env_is_honoured() {
    let (output, _) = run_workload_with_env(&[], &[("MARGO_LOG_LEVEL", "debug")]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("emitted reading"), "{stderr}");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let (output, elapsed) = run_workload(&["--log-level", "loudest"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("loudest"));
    assert!(elapsed < Duration::from_secs(8));
}

#[test]
fn test_version_flag() {
    let (output, _) = run_workload(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim(),
        format!("margo-workload {}", env!("CARGO_PKG_VERSION"))
    );
}
