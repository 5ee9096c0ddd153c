use std::process::Command;

#[test]
fn stdout_matches_golden_script() {
    let bin = env!("CARGO_BIN_EXE_ledring");
    let output = Command::new(bin).output().expect("run ledring");

    assert!(output.status.success(), "ledring exited with failure");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let golden = include_str!("fixtures/default.scr");
    assert_eq!(stdout, golden);
}

#[test]
fn debug_flag_keeps_stdout_clean() {
    let bin = env!("CARGO_BIN_EXE_ledring");
    let output = Command::new(bin)
        .arg("--debug")
        .env_remove("RUST_LOG")
        .output()
        .expect("run ledring --debug");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout, include_str!("fixtures/default.scr"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("placed led ring"),
        "debug diagnostics missing from stderr"
    );
}
