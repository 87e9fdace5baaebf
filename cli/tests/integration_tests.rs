use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optrie-demo"))
        .args(args)
        .output()
        .expect("failed to run optrie-demo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn demo_sets_flag_and_captures_value() {
    let output = run_demo(&["--", "-t", "-fhello"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("is_set: true"), "{out}");
    assert!(out.contains("file: hello"), "{out}");
    assert!(stderr(&output).is_empty());
}

#[test]
fn demo_reports_invalid_options_and_keeps_going() {
    let output = run_demo(&["--", "-x", "-testing", "-T"]);
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("error: invalid option: \"-x\"\n"), "{err}");
    assert!(
        err.contains("error: invalid option: \"-testing\", did you mean \"-test\" ?"),
        "{err}"
    );
    assert!(stdout(&output).contains("is_set: true"));
}

#[test]
fn demo_no_suggest_drops_hints() {
    let output = run_demo(&["--no-suggest", "--", "-testing"]);
    let err = stderr(&output);
    assert!(err.contains("error: invalid option: \"-testing\""), "{err}");
    assert!(!err.contains("did you mean"), "{err}");
}

#[test]
fn demo_skip_first_ignores_program_name() {
    let output = run_demo(&["--skip-first", "--", "-t", "-fdebug"]);
    let out = stdout(&output);
    assert!(out.contains("is_set: false"), "{out}");
    assert!(out.contains("debug: true"), "{out}");
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn demo_json_output_includes_state_and_report() {
    let output = run_demo(&["--json", "--", "echo", "-level", "-level", "5", "echo"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["state"]["echoed"], serde_json::json!(["-level"]));
    assert_eq!(json["state"]["level"], 5);
    assert_eq!(json["report"]["matched"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["report"]["diagnostics"][0]["message"],
        "no more argument for \"echo\""
    );
}

#[test]
fn demo_json_reports_bad_integer() {
    let output = run_demo(&["--json", "--", "-L", "ten"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["state"]["level"], serde_json::Value::Null);
    assert_eq!(
        json["report"]["diagnostics"][0]["message"],
        "\"-l\" got a wrong value: \"ten\""
    );
}
