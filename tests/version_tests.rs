use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    path.pop();
    path.push("toolchat");
    path
}

#[test]
fn test_version_flag() {
    let output = Command::new(get_binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("toolchat {}", env!("CARGO_PKG_VERSION")),
        "Output should be in format 'toolchat X.Y.Z'"
    );
}

#[test]
fn test_version_subcommand() {
    let output = Command::new(get_binary_path())
        .arg("version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("toolchat v{}", env!("CARGO_PKG_VERSION"))));
}
