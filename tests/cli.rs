use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn shred_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shred"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(shred_command().args(args).output()?)
}

#[test]
fn shreds_every_file_given() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, b"first secret")?;
    fs::write(&second, b"second secret")?;

    let output = run(&[first.to_str().unwrap(), second.to_str().unwrap()])?;
    assert!(
        output.status.success(),
        "shred failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&format!("Shredding {}...", first.display())));
    assert!(stdout.contains(&format!("Shredded successfully: {}", second.display())));
    assert!(!first.exists());
    assert!(!second.exists());
    Ok(())
}

#[test]
fn failure_continues_and_sets_exit_code() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.txt");
    let present = dir.path().join("present.txt");
    fs::write(&present, b"payload")?;

    let output = run(&[missing.to_str().unwrap(), present.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains(&format!("Error shredding {}", missing.display())),
        "missing error line: {}",
        stderr
    );
    assert!(!present.exists(), "later paths must still be shredded");
    Ok(())
}

#[test]
fn no_arguments_prints_usage() -> Result<(), Box<dyn Error>> {
    let output = run(&[])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Usage: shred <file1> [file2 ...]"));
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("shred "), "unexpected version line: {}", stdout);
    assert!(
        stdout.starts_with(&format!("shred {} (", env!("CARGO_PKG_VERSION"))),
        "version line should lead with the package version: {}",
        stdout
    );
    assert!(stdout.contains("development") || stdout.contains("release"));
    Ok(())
}
