use std::process::Command;

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_harmony").to_string()
}

fn run_cli(args: &[&str]) -> String {
    let output = Command::new(bin()).args(args).output().expect("run");
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_prints_harmonic_mean() {
    assert_eq!(run_cli(&["--no-color", "1", "2", "4"]), "1.7142857142857142");
}

#[test]
fn cli_styled_output_contains_the_number() {
    // Without --no-color the digits are still present, whatever escape
    // sequences wrap them.
    let stdout = run_cli(&["1", "2", "4"]);
    assert!(stdout.contains("1.7142857142857142"), "stdout: {stdout}");
}

#[test]
fn cli_no_arguments_prints_default() {
    assert_eq!(run_cli(&["--no-color"]), "0.0");
}

#[test]
fn cli_unparsable_argument_discards_whole_set() {
    assert_eq!(run_cli(&["--no-color", "1", "2.5", "cheese"]), "0.0");
}

#[test]
fn cli_zero_among_values_prints_default() {
    assert_eq!(run_cli(&["--no-color", "1", "0", "4"]), "0.0");
}

#[test]
fn cli_accepts_negative_numbers() {
    assert_eq!(run_cli(&["--no-color", "-2", "-4"]), "-2.6666666666666665");
}

#[test]
fn cli_scalar_strategy_matches() {
    assert_eq!(
        run_cli(&["--no-color", "--strategy", "scalar", "1", "2", "4"]),
        "1.7142857142857142"
    );
}

#[test]
fn cli_json_report() {
    let stdout = run_cli(&["--no-color", "--json", "1", "2", "4"]);
    assert_eq!(
        stdout,
        r#"{"count":3,"strategy":"Vectorized","mean":1.7142857142857142}"#
    );
}

#[test]
fn cli_json_report_on_discarded_input() {
    let stdout = run_cli(&["--no-color", "--json", "not-a-number"]);
    assert_eq!(stdout, r#"{"count":0,"strategy":"Vectorized","mean":0.0}"#);
}
