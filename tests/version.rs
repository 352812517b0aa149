//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_payview"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn missing_payload_file_fails_before_terminal_setup() {
    let dir = std::env::temp_dir();
    let config = dir.join("payview-version-test.toml");
    let log = dir.join("payview-version-test.log");
    std::fs::write(&config, format!("log_file_path = {:?}\n", log.display().to_string()))
        .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_payview"))
        .arg("--config")
        .arg(&config)
        .arg("/nonexistent/payview/body.json")
        .output()
        .expect("Failed to execute binary");
    let _ = std::fs::remove_file(&config);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("/nonexistent/payview/body.json"),
        "Expected the missing path in the error, got: {}",
        stderr
    );
}
