use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn pixelpaint_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pixelpaint").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_script(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("session.paint");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    pixelpaint_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Headless driver for the pixelpaint raster paint engine",
        ));
}

#[test]
fn no_arguments_prints_guidance() {
    let temp = TempDir::new().unwrap();
    pixelpaint_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("pixelpaint --replay SCRIPT"));
}

#[test]
fn ascii_requires_replay() {
    let temp = TempDir::new().unwrap();
    pixelpaint_cmd(&temp)
        .arg("--ascii")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_pencil_then_line() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "# pencil dot, then a committed diagonal
         size 2
         press 5 5
         release 5 5
         tool line
         size 1
         press 0 0
         release 0 0
         motion 9 9
         press 9 9
         release 9 9
        ",
    );

    pixelpaint_cmd(&temp)
        .args(["--width", "10", "--height", "10", "--ascii", "--replay"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: 10x10"))
        .stdout(predicate::str::contains("Tool: line (size 1)"))
        .stdout(predicate::str::contains("Painted pixels: 12"))
        .stdout(predicate::str::contains("Modified: yes"))
        .stdout(predicate::str::contains(
            "#.........\n.#........\n..#.......\n...#......\n....##....\n....##....\n......#...\n",
        ));
}

#[test]
fn anchored_line_is_not_committed() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "tool line\npress 1 1\nrelease 1 1\nmotion 6 6\n");

    pixelpaint_cmd(&temp)
        .args(["--width", "8", "--height", "8", "--replay"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Painted pixels: 0"))
        .stdout(predicate::str::contains("Modified: no"));
}

#[test]
fn config_file_sets_initial_state() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[canvas]\nwidth = 6\nheight = 3\nbackground_color = \"black\"\n\n\
         [tools]\ndefault_tool = \"eraser\"\ndefault_size = 3\n",
    )
    .unwrap();
    let script = write_script(&temp, "bg white\npress 1 1\n");

    pixelpaint_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: 6x3"))
        .stdout(predicate::str::contains("Tool: eraser (size 3)"))
        .stdout(predicate::str::contains("Background: White"))
        // the 3x3 white stamp leaves the other 9 black pixels
        .stdout(predicate::str::contains("Painted pixels: 9"));
}

#[test]
fn seeded_airbrush_is_reproducible() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "tool airbrush\nsize 9\npress 10 10\nmotion 12 11\nmotion 9 13\nrelease 9 13\n",
    );

    let run = || {
        pixelpaint_cmd(&temp)
            .args(["--width", "24", "--height", "24", "--seed", "7", "--ascii"])
            .arg("--replay")
            .arg(&script)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn script_errors_report_line_numbers() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "size 2\n\nsmudge 1 1\n");

    pixelpaint_cmd(&temp)
        .arg("--replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3: unknown command 'smudge'"));
}

#[test]
fn invalid_engine_arguments_fail_the_replay() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "size 4\nsize -1\n");

    pixelpaint_cmd(&temp)
        .arg("--replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: invalid argument"));
}

#[test]
fn oversized_dimension_overrides_are_clamped() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "press 0 0\n");

    pixelpaint_cmd(&temp)
        .args(["--width", "100000", "--height", "0", "--replay"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: 8192x1"));
}

#[test]
fn init_config_writes_once() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("pixelpaint").join("config.toml");

    pixelpaint_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(expected.exists());

    pixelpaint_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn schema_dump_is_json() {
    let mut cmd = Command::cargo_bin("dump_config_schema").expect("binary exists");
    let output = cmd.assert().success().get_output().stdout.clone();
    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(schema["properties"]["canvas"].is_object());
}
