use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A display number nothing listens on.
const DEAD_DISPLAY: &str = ":4242";

/// Returns an empty home directory unique to `name`.
fn fresh_home(name: &str) -> PathBuf {
    let home = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).expect("failed to create test home");
    home
}

fn mwtm(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mwtm"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("DISPLAY")
        .output()
        .expect("failed to execute mwtm")
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let home = fresh_home("help");

    // Act
    let output = mwtm(&home, &["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("named monitors"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let home = fresh_home("version");

    // Act
    let output = mwtm(&home, &["--version"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mwtm"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    // Arrange
    let home = fresh_home("no-args");

    // Act
    let output = mwtm(&home, &[]);

    // Assert
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn odd_argument_count_is_a_usage_error() {
    // Arrange
    let home = fresh_home("odd-args");

    // Act
    let output = mwtm(&home, &["gmail", "hdmi-1", "terminal"]);

    // Assert
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("got 3 arguments"));
    assert!(!stderr.contains("cannot open display"));
}

#[test]
fn unreachable_display_fails() {
    // Arrange
    let home = fresh_home("dead-display");

    // Act
    let output = mwtm(&home, &["--display", DEAD_DISPLAY, "gmail", "hdmi-1"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open display :4242"));
}

#[test]
fn list_needs_no_pairs() {
    // Arrange
    let home = fresh_home("list");

    // Act
    let output = mwtm(&home, &["--list", "--display", DEAD_DISPLAY]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open display"));
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    // Arrange
    let home = fresh_home("bad-config");
    let dir = home.join(".config").join("mwtm");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[placement\n").unwrap();

    // Act
    let output = mwtm(&home, &["--display", DEAD_DISPLAY, "gmail", "hdmi-1"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using defaults"));
    assert!(stderr.contains("cannot open display"));
}

#[test]
fn init_config_writes_template_once() {
    // Arrange
    let home = fresh_home("init-config");
    let path = home.join(".config").join("mwtm").join("config.toml");

    // Act
    let first = mwtm(&home, &["--init-config"]);
    let second = mwtm(&home, &["--init-config"]);

    // Assert
    assert!(first.status.success());
    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("offset_x = 10"));
    assert!(second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("Already exists"));
}

#[test]
fn title_starting_with_hyphen_is_a_value() {
    // Arrange
    let home = fresh_home("hyphen-title");

    // Act
    let output = mwtm(&home, &["--display", DEAD_DISPLAY, "- gmail", "hdmi-1"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open display"));
}

#[test]
fn numeric_looking_title_is_a_value() {
    // Arrange
    let home = fresh_home("negative-title");

    // Act
    let output = mwtm(&home, &["--display", DEAD_DISPLAY, "-1", "hdmi-1"]);

    // Assert
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open display"));
}
