use assert_cmd::Command;
use predicates::prelude::*;

mod common;

use common::{fixture, open_rgba, write_solid_image, CYAN, LIGHT_GREEN, RED, WHITE};

fn labelpaint() -> Command {
    let mut cmd = Command::cargo_bin("labelpaint").unwrap();
    cmd.env_remove("LABELPAINT_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn runs() {
    labelpaint().assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = labelpaint();
    cmd.arg("-V");
    cmd.assert().success().stdout("labelpaint 0.1.0\n");
}

#[test]
fn no_subcommand_prints_banner() {
    labelpaint()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("labelpaint 0.1.0\n"))
        .stdout(predicate::str::contains("labelpaint --help"));
}

// Render subcommand tests

#[test]
fn render_writes_annotated_image() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("in.png");
    let output = temp.path().join("out.png");
    write_solid_image(&image, 100, 100, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("render")
        .arg(fixture("sample_annotations.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Annotated image saved to"));

    let out = open_rgba(&output);
    assert_eq!(out.dimensions(), (100, 100));
    // Left edge of the "person" box.
    assert_eq!(*out.get_pixel(10, 45), CYAN);
    // Inside the polygon stays white.
    assert_eq!(*out.get_pixel(25, 77), WHITE);
}

#[test]
fn render_invalid_annotations_fails_without_output() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("in.png");
    let output = temp.path().join("out.png");
    write_solid_image(&image, 50, 50, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("render")
        .arg(fixture("sample_invalid_annotations.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("annotation 0"));
    assert!(!output.exists());
}

#[test]
fn render_missing_image_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let mut cmd = labelpaint();
    cmd.arg("render")
        .arg(fixture("sample_annotations.json"))
        .arg("--image")
        .arg(temp.path().join("missing.png"))
        .arg("--output")
        .arg(temp.path().join("out.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode image"));
}

#[test]
fn render_uses_config_style() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("in.png");
    let output = temp.path().join("out.png");
    let config = temp.path().join("labelpaint.toml");
    write_solid_image(&image, 100, 100, WHITE);
    std::fs::write(&config, "[style]\nstroke_color = \"#ff0000\"\nantialias = false\n")
        .expect("write config");

    let mut cmd = labelpaint();
    cmd.env("LABELPAINT_CONFIG", &config)
        .arg("render")
        .arg(fixture("sample_annotations.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    assert_eq!(*open_rgba(&output).get_pixel(10, 45), RED);
}

#[test]
fn bad_config_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let config = temp.path().join("labelpaint.toml");
    std::fs::write(&config, "[style]\nstroke_color = \"mauve-ish\"\n").expect("write config");
    let image = temp.path().join("in.png");
    write_solid_image(&image, 10, 10, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("--config")
        .arg(&config)
        .arg("render")
        .arg(fixture("sample_annotations.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(temp.path().join("out.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("mauve-ish"));
}

// Detection subcommand tests

#[test]
fn analyze_prints_report_and_writes_both_images() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("street.jpg");
    let objects = temp.path().join("objects.png");
    let people = temp.path().join("people.jpg");
    write_solid_image(&image, 100, 100, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("analyze")
        .arg(fixture("image_analysis.json"))
        .arg("--image")
        .arg(&image)
        .arg("--objects-out")
        .arg(&objects)
        .arg("--people-out")
        .arg(&people);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(" Caption:\n"))
        .stdout(predicate::str::contains("Confidence 0.74"))
        .stdout(predicate::str::contains(" Dense Captions:\n"))
        .stdout(predicate::str::contains("   \"bicycle\"\n"))
        .stdout(predicate::str::contains(
            "Bounding box {X=8,Y=10,Width=44,Height=70}, Confidence: 0.95",
        ));

    assert_eq!(open_rgba(&objects).dimensions(), (100, 100));
    assert_eq!(open_rgba(&people).dimensions(), (100, 100));
}

#[test]
fn analyze_defaults_output_names_from_config() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("street.png");
    let config = temp.path().join("labelpaint.toml");
    write_solid_image(&image, 100, 100, WHITE);
    let objects = temp.path().join("o.png");
    let people = temp.path().join("p.png");
    std::fs::write(
        &config,
        format!(
            "[output]\nobjects = {:?}\npeople = {:?}\n",
            objects.display().to_string(),
            people.display().to_string()
        ),
    )
    .expect("write config");

    let mut cmd = labelpaint();
    cmd.arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(fixture("image_analysis.json"))
        .arg("--image")
        .arg(&image);
    cmd.assert().success();

    assert!(objects.exists());
    assert!(people.exists());
}

#[test]
fn read_text_prints_lines_and_words() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("page.png");
    let output = temp.path().join("text.png");
    write_solid_image(&image, 100, 100, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("read-text")
        .arg(fixture("text_read.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Text:\n   'Four score'\n"))
        .stdout(predicate::str::contains("     Word: 'score', Confidence 0.9910"))
        .stdout(predicate::str::contains("   'and seven'\n"));

    let out = open_rgba(&output);
    // Left edge of the "Four" word polygon.
    assert_eq!(*out.get_pixel(5, 18), CYAN);
    // Top edge of the first line between its words: the line outline is not drawn.
    assert_eq!(*out.get_pixel(40, 10), WHITE);
    // The second line has no words, so its own polygon is drawn.
    assert_eq!(*out.get_pixel(5, 48), CYAN);
}

#[test]
fn faces_prints_report_and_draws_boxes() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("group.png");
    let output = temp.path().join("faces.png");
    write_solid_image(&image, 100, 100, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("faces")
        .arg(fixture("faces.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("2 faces detected.\n\nFace number 1\n"))
        .stdout(predicate::str::contains(" - Mouth occluded: true\n"))
        .stdout(predicate::str::contains("   - glasses\n"))
        .stdout(predicate::str::contains("\nFace number 2\n"));

    let out = open_rgba(&output);
    // Left edge of the first face, in light green.
    assert_eq!(*out.get_pixel(20, 50), LIGHT_GREEN);
}

#[test]
fn faces_without_detections_writes_nothing() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let image = temp.path().join("empty.png");
    let output = temp.path().join("faces.png");
    write_solid_image(&image, 10, 10, WHITE);

    let mut cmd = labelpaint();
    cmd.arg("faces")
        .arg(fixture("faces_empty.json"))
        .arg("--image")
        .arg(&image)
        .arg("--output")
        .arg(&output);
    cmd.assert().success().stdout("No faces detected.\n");
    assert!(!output.exists());
}

// Validate subcommand tests

#[test]
fn validate_valid_annotations_succeeds() {
    let mut cmd = labelpaint();
    cmd.arg("validate").arg(fixture("sample_annotations.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Validation passed"));
}

#[test]
fn validate_invalid_annotations_fails() {
    let mut cmd = labelpaint();
    cmd.arg("validate").arg(fixture("sample_invalid_annotations.json"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("2 error(s) and 2 warning(s)"))
        .stdout(predicate::str::contains("NegativeBoxSize"))
        .stdout(predicate::str::contains("TooFewPolygonPoints"))
        .stdout(predicate::str::contains("ConfidenceOutOfRange"))
        .stdout(predicate::str::contains("EmptyLabel"));
}

#[test]
fn validate_bounds_need_image_size() {
    let mut cmd = labelpaint();
    cmd.arg("validate").arg(fixture("sample_warnings_annotations.json"));
    cmd.assert().success();

    let mut cmd = labelpaint();
    cmd.args(["validate", "--width", "100", "--height", "100"])
        .arg(fixture("sample_warnings_annotations.json"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("GeometryOutOfBounds"));
}

#[test]
fn validate_strict_fails_on_warnings() {
    let mut cmd = labelpaint();
    cmd.args(["validate", "--strict", "--width", "100", "--height", "100"])
        .arg(fixture("sample_warnings_annotations.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0 error(s) and 1 warning(s)"));
}

#[test]
fn validate_width_requires_height() {
    let mut cmd = labelpaint();
    cmd.args(["validate", "--width", "100"])
        .arg(fixture("sample_annotations.json"));
    cmd.assert().failure();
}

#[test]
fn validate_json_output_format() {
    let mut cmd = labelpaint();
    cmd.arg("validate")
        .arg(fixture("sample_invalid_annotations.json"))
        .args(["--output", "json"]);
    let output = cmd.assert().failure().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["error_count"], 2);
    assert_eq!(json["warning_count"], 2);
    assert_eq!(json["issues"][0]["code"], "NegativeBoxSize");
    assert_eq!(json["issues"][0]["context"]["index"], 0);
}

#[test]
fn validate_unsupported_output_fails() {
    let mut cmd = labelpaint();
    cmd.arg("validate")
        .arg(fixture("sample_annotations.json"))
        .args(["--output", "yaml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn validate_nonexistent_file_fails() {
    let mut cmd = labelpaint();
    cmd.args(["validate", "nonexistent_file.json"]);
    cmd.assert().failure();
}
