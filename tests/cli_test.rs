use assert_cmd::Command;

#[test]
fn version_flag_prints_version() {
    let output = Command::cargo_bin("gradecalc")
        .unwrap()
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_options() {
    let output = Command::cargo_bin("gradecalc")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn missing_explicit_config_fails_before_starting_the_ui() {
    let output = Command::cargo_bin("gradecalc")
        .unwrap()
        .args(["--config", "/nonexistent/gradecalc.toml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
}
