use std::process::Command;

fn run() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_lanesum"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lanesum")
}

#[test]
fn test_prints_result_line_and_exits_zero() {
    let output = run();

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Result: 9 9 9 9 9 9 9 9 \n");
}

#[test]
fn test_output_has_eight_numeric_fields() {
    let stdout = String::from_utf8(run().stdout).unwrap();

    let body = stdout
        .strip_prefix("Result:")
        .and_then(|rest| rest.strip_suffix('\n'))
        .expect("line must start with `Result:` and end with a newline");

    let fields: Vec<f32> = body
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();

    assert_eq!(fields, vec![9.0; 8]);
}

#[test]
fn test_logging_environment_is_ignored() {
    let baseline = run();

    for (key, value) in [("RUST_LOG", "trace"), ("RUST_LOG_STYLE", "always")] {
        let output = Command::new(env!("CARGO_BIN_EXE_lanesum"))
            .env_remove("RUST_LOG")
            .env(key, value)
            .output()
            .expect("failed to run lanesum");

        assert_eq!(output.status.code(), Some(0), "{key}={value}");
        assert_eq!(output.stdout, baseline.stdout, "{key}={value}");
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&baseline.stderr),
            "{key}={value}"
        );
    }

    assert!(baseline.stderr.is_empty());
}
