use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use etoile_setup::layout::{DIR_DATA_INPUT, DIR_DATA_PROCESSED, DIR_PHOTO_RELATED};
use etoile_setup::resources::RESOURCES_PATH_FILE;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_etoile-setup"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_no_directory_without_config() {
    let tmp = tempfile::tempdir().unwrap();

    let out = run_in(tmp.path(), &[]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "No Directory\n");
    assert!(tmp.path().join(DIR_DATA_INPUT).is_dir());
    assert!(tmp.path().join(DIR_DATA_PROCESSED).is_dir());
    assert_eq!(
        fs::read_to_string(tmp.path().join(RESOURCES_PATH_FILE)).unwrap(),
        ""
    );
}

#[test]
fn prints_configured_resources_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let resources = tmp.path().join("Resources");
    let resources_str = resources.to_str().unwrap();
    fs::write(tmp.path().join(RESOURCES_PATH_FILE), resources_str).unwrap();

    let out = run_in(tmp.path(), &[]);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("Resources Directory: {}\n", resources_str)
    );
    assert!(resources.join(DIR_PHOTO_RELATED).is_dir());
}

#[test]
fn working_dir_flag_overrides_current_dir() {
    let cwd = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();

    let out = run_in(
        cwd.path(),
        &["--working-dir", target.path().to_str().unwrap()],
    );

    assert!(out.status.success());
    assert!(target.path().join(DIR_DATA_INPUT).is_dir());
    assert!(target.path().join(RESOURCES_PATH_FILE).is_file());
    assert!(!cwd.path().join(DIR_DATA_INPUT).exists());
}

#[test]
fn custom_resources_file_name() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("paths.txt"), "Resources").unwrap();

    let out = run_in(tmp.path(), &["-r", "paths.txt"]);

    assert!(out.status.success());
    assert!(tmp.path().join("Resources").is_dir());
    assert!(!tmp.path().join(RESOURCES_PATH_FILE).exists());
}

#[test]
fn failure_prints_no_message_and_exits_nonzero() {
    let tmp = tempfile::tempdir().unwrap();
    let resources = tmp.path().join("absent").join("Resources");
    fs::write(
        tmp.path().join(RESOURCES_PATH_FILE),
        resources.to_str().unwrap(),
    )
    .unwrap();

    let out = run_in(tmp.path(), &[]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));
}

#[test]
fn invalid_log_level_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let out = run_in(tmp.path(), &["--log-level", "loud"]);

    assert!(!out.status.success());
    assert!(!tmp.path().join(DIR_DATA_INPUT).exists());
}
