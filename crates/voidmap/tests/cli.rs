use std::path::PathBuf;
use std::process::Command;

/// Creates an empty scratch directory unique to this test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("voidmap-cli-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// A `voidmap` command whose home directory has no config file.
fn voidmap(home: &PathBuf) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_voidmap"));
    cmd.env("HOME", home);
    cmd
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let home = scratch_dir("help");
    let mut cmd = voidmap(&home);
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("free rectangles"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let home = scratch_dir("version");
    let mut cmd = voidmap(&home);
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voidmap"));
}

#[test]
fn capacity_prints_minimum_buffer_length() {
    // Arrange
    let home = scratch_dir("capacity");
    let mut cmd = voidmap(&home);
    cmd.args(["capacity", "3"]);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "46");
}

#[test]
fn rect_lists_voids_around_a_box() {
    // Arrange
    let home = scratch_dir("rect");
    let mut cmd = voidmap(&home);
    cmd.args(["rect", "--area", "0,0,100,200", "--box", "20,20,10,10"]);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("0,0 20x20\n"));
    assert!(stdout.contains("8 voids found"));
}

#[test]
fn rect_group_merges_voids() {
    // Arrange
    let home = scratch_dir("rect-group");
    let mut cmd = voidmap(&home);
    cmd.args([
        "rect",
        "--area",
        "0,0,100,200",
        "--box",
        "20,20,10,10",
        "--group",
    ]);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 voids found"));
}

#[test]
fn rect_json_is_parseable() {
    // Arrange
    let home = scratch_dir("rect-json");
    let mut cmd = voidmap(&home);
    cmd.args([
        "rect",
        "--area",
        "0,0,100,200",
        "--box",
        "20,20,10,10",
        "--box",
        "40,40,5,5",
        "--json",
    ]);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let voids: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let voids = voids.as_array().expect("expected a JSON array");
    assert_eq!(voids.len(), 23);
    assert_eq!(voids[0]["width"], 20);
}

#[test]
fn rect_rejects_malformed_area() {
    let home = scratch_dir("rect-bad");
    let mut cmd = voidmap(&home);
    cmd.args(["rect", "--area", "0,0,100"]);

    let output = cmd.output().expect("failed to execute voidmap");

    assert!(!output.status.success());
}

#[test]
fn map_reads_scene_file() {
    // Arrange
    let home = scratch_dir("map");
    let scene = home.join("scene.toml");
    std::fs::write(
        &scene,
        "[area]\nx = 0\ny = 0\nwidth = 100\nheight = 200\n\n\
         [[box]]\nx = 20\ny = 20\nwidth = 10\nheight = 10\n\n\
         [[box]]\nx = 30\ny = 20\nwidth = 10\nheight = 10\n\n\
         [[box]]\nx = 20\ny = 30\nwidth = 10\nheight = 10\n",
    )
    .unwrap();
    let mut cmd = voidmap(&home);
    cmd.arg("map").arg(&scene);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("13 voids found"));
}

#[test]
fn map_uses_group_from_config() {
    // Arrange
    let home = scratch_dir("map-config");
    let config_dir = home.join(".config").join("voidmap");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[output]\ngroup = true\n").unwrap();
    let scene = home.join("scene.json");
    std::fs::write(
        &scene,
        r#"{"area":{"x":0,"y":0,"width":100,"height":200},
            "box":[{"x":20,"y":20,"width":10,"height":10}]}"#,
    )
    .unwrap();
    let mut cmd = voidmap(&home);
    cmd.arg("map").arg(&scene);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 voids found"));
}

#[test]
fn map_missing_file_fails() {
    let home = scratch_dir("map-missing");
    let mut cmd = voidmap(&home);
    cmd.arg("map").arg(home.join("nope.toml"));

    let output = cmd.output().expect("failed to execute voidmap");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.toml"));
}

#[test]
fn check_flags_overlapping_boxes() {
    // Arrange
    let home = scratch_dir("check");
    let scene = home.join("scene.toml");
    std::fs::write(
        &scene,
        "[area]\nx = 0\ny = 0\nwidth = 100\nheight = 200\n\n\
         [[box]]\nx = 20\ny = 20\nwidth = 10\nheight = 10\n\n\
         [[box]]\nx = 25\ny = 25\nwidth = 10\nheight = 10\n",
    )
    .unwrap();
    let mut cmd = voidmap(&home);
    cmd.arg("check").arg(&scene);

    // Act
    let output = cmd.output().expect("failed to execute voidmap");

    // Assert
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("box #0 overlaps box #1"));
}

#[test]
fn init_writes_config_once() {
    // Arrange
    let home = scratch_dir("init");

    // Act
    let first = voidmap(&home).arg("init").output().unwrap();
    let second = voidmap(&home).arg("init").output().unwrap();

    // Assert
    assert!(first.status.success());
    assert!(String::from_utf8_lossy(&first.stdout).contains("Created"));
    assert!(String::from_utf8_lossy(&second.stdout).contains("Already exists"));
    assert!(home.join(".config/voidmap/config.toml").exists());
}
